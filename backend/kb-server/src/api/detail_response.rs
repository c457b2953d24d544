use serde::Serialize;

/// `{"detail": "..."}` returned by action endpoints.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
