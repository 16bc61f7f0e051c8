use crate::domain::{ApiError, ErrorType};
use serde::Serialize;

// Error envelope shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            kind: err.error_type(),
            message: err.message(),
        }
    }
}
