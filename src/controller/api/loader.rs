use serde_json::Value;

use super::error::ApiError;

/// Loading/error bookkeeping for one backend path, owned by the step that renders it.
///
/// Flows split a load in two: [`LoadData::begin`] when the effect is issued and
/// [`LoadData::finish`] when its result comes back, so a render in between sees `loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadData {
    pub path: &'static str,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl LoadData {
    #[must_use]
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            loading: false,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Records the outcome and hands back the payload, or `None` after logging the error.
    pub fn finish(&mut self, result: Result<Value, ApiError>) -> Option<Value> {
        self.loading = false;
        match result {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!(path = self.path, error = %e, "API ERROR");
                self.error = Some(e);
                None
            }
        }
    }

    /// Records a failure that happened after the payload arrived, e.g. an unexpected shape.
    pub fn fail(&mut self, e: ApiError) {
        tracing::error!(path = self.path, error = %e, "API ERROR: unexpected payload");
        self.loading = false;
        self.error = Some(e);
    }
}
