pub mod client;
pub mod endpoints;
pub mod error;
pub mod loader;

pub use client::{Backend, HttpBackend, Params, parse_envelope};
pub use error::ApiError;
pub use loader::LoadData;
