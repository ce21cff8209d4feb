use clap::Parser;

use junior_rankings::args::{Args, CleanArgs, CsrfProvider};

fn parse(argv: &[&str]) -> Result<CleanArgs, String> {
    let args = Args::try_parse_from(std::iter::once("junior-rankings").chain(argv.iter().copied()))
        .map_err(|e| e.to_string())?;
    args.validate()?;
    Ok(CleanArgs::from(args))
}

#[test]
fn test_defaults() {
    let config = parse(&["--api-base", "http://localhost:8000"]).expect("defaults are valid");
    assert_eq!(config.static_dir, "./static");
    assert_eq!(config.submission_mount.as_deref(), Some("app-submission-form"));
    assert_eq!(config.verify_mount.as_deref(), Some("app-verify-flow"));
    assert_eq!(config.csrf, CsrfProvider::Cookie("csrftoken".to_string()));
}

#[test]
fn test_static_dir_must_exist() {
    let err = parse(&["--static-dir", "./no-such-directory"]).expect_err("missing dir");
    assert!(err.contains("not readable"));

    let config = parse(&["--static-dir", "src"]).expect("src is a directory");
    assert_eq!(config.static_dir, "src");
}

#[test]
fn test_disable_and_rename_mounts() {
    let config = parse(&["--no-verify", "--submission-mount", "scores-form"]).expect("valid");
    assert_eq!(config.submission_mount.as_deref(), Some("scores-form"));
    assert!(config.verify_mount.is_none());

    assert!(parse(&["--no-verify", "--no-submission"]).is_err());
    assert!(parse(&["--submission-mount", "same", "--verify-mount", "same"]).is_err());
    assert!(parse(&["--verify-mount", "#bad id"]).is_err());
}

#[test]
fn test_fixed_csrf_token_overrides_cookie() {
    let config = parse(&["--csrf-token", "abc123", "--csrf-cookie", "other"]).expect("valid");
    assert_eq!(config.csrf, CsrfProvider::Fixed("abc123".to_string()));
    assert!(parse(&["--csrf-token", "  "]).is_err());
}
