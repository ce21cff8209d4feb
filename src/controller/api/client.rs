use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::error::ApiError;

/// Query parameters, in the order they were given.
pub type Params = Vec<(String, String)>;

/// The rankings backend as the wizards see it.
#[async_trait]
pub trait Backend: Send + Sync {
    /// GET `/api/{path}/` with `params` as the query string.
    async fn get(&self, path: &str, params: &Params) -> Result<Value, ApiError>;

    /// POST `body` as JSON to `/api/{path}/`, sending `csrf` as `X-CSRFToken` when present.
    async fn post(&self, path: &str, body: &Value, csrf: Option<&str>) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Will return `Err` if `base_url` is not an absolute url
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::Url(e.to_string()))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if `path` cannot be joined onto the base url
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(&format!("api/{}/", path.trim_matches('/')))
            .map_err(|e| ApiError::Url(e.to_string()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get(&self, path: &str, params: &Params) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, ?params, "api get");
        let resp = self.client.get(url).query(params).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        parse_envelope(status.as_u16(), status.is_success(), &body, params)
    }

    async fn post(&self, path: &str, body: &Value, csrf: Option<&str>) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "api post");
        let mut req = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?);
        if let Some(token) = csrf {
            req = req.header("X-CSRFToken", token);
        }
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            // an empty 200 is a fine answer to a post
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Value::Null);
            }
            return parse_envelope(status.as_u16(), true, &bytes, &Vec::new());
        }
        match parse_envelope(status.as_u16(), false, &bytes, &Vec::new()) {
            Ok(_) => Err(ApiError::Rejected {
                status: status.as_u16(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Applies the backend's response conventions to a raw body.
///
/// # Errors
///
/// Will return `Err` for failed non-JSON responses, unparseable successful ones, and any JSON
/// object carrying an `error` field.
pub fn parse_envelope(
    status: u16,
    success: bool,
    body: &[u8],
    params: &Params,
) -> Result<Value, ApiError> {
    let data: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) if !success => return Err(ApiError::NonJson { status }),
        Err(e) => return Err(ApiError::from(e)),
    };

    if let Some(err) = data.get("error").filter(|e| !e.is_null()) {
        let message = match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ApiError::Application {
            message,
            params: params.clone(),
        });
    }
    Ok(data)
}
