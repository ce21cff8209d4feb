use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, CsrfProvider};

/// Parses the command line (and its env fallbacks) into the config the server runs with.
///
/// # Errors
///
/// Will return `Err` if the options contradict each other
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::from(args))
}
