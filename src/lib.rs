pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod api;
    pub mod routes;
    pub mod session;
    pub mod submission;
    pub mod verify;
}
pub mod mvu {
    pub mod runtime;
    pub mod submission;
    pub mod verify;
    pub mod wizard;
}
pub mod view {
    pub mod index;
    pub mod layout;
    pub mod submission;
    pub mod verify;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::AppError;
