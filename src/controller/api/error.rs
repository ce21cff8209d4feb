use thiserror::Error;

use super::client::Params;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend failed and did not even answer with JSON.
    #[error("API ERROR: Non-JSON failed request with response code {status}")]
    NonJson { status: u16 },
    /// The backend answered with an `error` field; `params` are the ones we sent.
    #[error("{message}")]
    Application { message: String, params: Params },
    #[error("Something went wrong")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid api url: {0}")]
    Url(String),
}

impl ApiError {
    #[must_use]
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Looks up one of the request parameters an application error was raised for.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        match self {
            Self::Application { params, .. } => params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
