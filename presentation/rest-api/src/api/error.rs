use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error family, e.g. "ValidationError"
    pub name: String,
    /// Human-readable description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(name: &str, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
