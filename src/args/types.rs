use actix_web::HttpRequest;
use clap::Parser;

pub const DEFAULT_SUBMISSION_MOUNT: &str = "app-submission-form";
pub const DEFAULT_VERIFY_MOUNT: &str = "app-verify-flow";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the rankings backend; `/api/...` is appended to it.
    #[arg(
        long,
        env = "JR_API_BASE",
        value_name = "API_BASE_URL",
        default_value = "http://localhost:8000",
        value_parser = crate::args::validation::check_absolute_url
    )]
    pub api_base: String,
    #[arg(long, env = "JR_BIND", value_name = "ADDRESS", default_value = "0.0.0.0:8081")]
    pub bind: String,
    /// Browser cookie whose value is forwarded to the backend as the CSRF token.
    #[arg(long, value_name = "COOKIE_NAME", default_value = "csrftoken")]
    pub csrf_cookie: String,
    /// Fixed CSRF token; overrides --csrf-cookie.
    #[arg(long, env = "JR_CSRF_TOKEN", value_name = "TOKEN")]
    pub csrf_token: Option<String>,
    #[arg(
        long,
        value_name = "ELEMENT_ID",
        default_value = DEFAULT_SUBMISSION_MOUNT,
        value_parser = crate::args::validation::check_mount_id
    )]
    pub submission_mount: String,
    #[arg(
        long,
        value_name = "ELEMENT_ID",
        default_value = DEFAULT_VERIFY_MOUNT,
        value_parser = crate::args::validation::check_mount_id
    )]
    pub verify_mount: String,
    /// Do not mount the athlete score-submission wizard.
    #[arg(long)]
    pub no_submission: bool,
    /// Do not mount the administrator verification flow.
    #[arg(long)]
    pub no_verify: bool,
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_STATIC_DIR,
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub static_dir: String,
}

/// Where the CSRF token for backend posts comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsrfProvider {
    /// Read from the named cookie on the incoming browser request.
    Cookie(String),
    Fixed(String),
}

impl CsrfProvider {
    #[must_use]
    pub fn token(&self, req: &HttpRequest) -> Option<String> {
        match self {
            Self::Cookie(name) => req.cookie(name).map(|c| c.value().to_string()),
            Self::Fixed(token) => Some(token.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_base: String,
    pub bind: String,
    pub csrf: CsrfProvider,
    /// `None` means the wizard is not initialised at all.
    pub submission_mount: Option<String>,
    pub verify_mount: Option<String>,
    pub static_dir: String,
}

impl CleanArgs {
    /// Both wizards mounted on their usual ids, talking to `api_base`.
    #[must_use]
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            bind: "127.0.0.1:8081".to_string(),
            csrf: CsrfProvider::Cookie("csrftoken".to_string()),
            submission_mount: Some(DEFAULT_SUBMISSION_MOUNT.to_string()),
            verify_mount: Some(DEFAULT_VERIFY_MOUNT.to_string()),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        let csrf = match args.csrf_token {
            Some(token) => CsrfProvider::Fixed(token),
            None => CsrfProvider::Cookie(args.csrf_cookie),
        };
        Self {
            api_base: args.api_base,
            bind: args.bind,
            csrf,
            submission_mount: (!args.no_submission).then_some(args.submission_mount),
            verify_mount: (!args.no_verify).then_some(args.verify_mount),
            static_dir: args.static_dir,
        }
    }
}
