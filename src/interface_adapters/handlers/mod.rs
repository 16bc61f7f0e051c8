use crate::domain::ApiError;
use crate::interface_adapters::protocol::ErrorResponse;
use axum::{Json, http::StatusCode};

pub mod people;
pub mod starships;

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

// Helper to build a JSON error response from a domain error.
pub(crate) fn error_response(err: &ApiError) -> ErrorReply {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

// Path ids must be integers; anything else never reaches the upstream.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ErrorReply> {
    raw.parse::<i64>()
        .map_err(|_| error_response(&ApiError::bad_request("invalid id")))
}

// Not-found keeps its message; every other failure is reported as a bare
// internal error so upstream detail never leaks to the caller.
pub(crate) fn map_lookup_error(err: ApiError) -> ErrorReply {
    if err.status() == StatusCode::NOT_FOUND.as_u16() {
        return error_response(&err);
    }

    tracing::error!(error = %err, "lookup failed.");
    error_response(&ApiError::internal())
}
