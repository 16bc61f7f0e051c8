use serde::Serialize;
use std::fmt;

const INTERNAL_MESSAGE: &str = "Internal server error.";

// Machine-readable error type carried in every error body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    BadRequest,
    NotFound,
    InternalServerError,
}

// Resource names used in not-found messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Starship,
    Starships,
    People,
    Peoples,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Starship => "starship",
            ResourceKind::Starships => "starships",
            ResourceKind::People => "people",
            ResourceKind::Peoples => "peoples",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Domain-level errors for lookups. Handlers pick the response from `status()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound {
        kind: ResourceKind,
        id: Option<String>,
    },
    Internal,
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        ApiError::BadRequest(reason.into())
    }

    pub fn not_found(kind: ResourceKind, id: impl ToString) -> Self {
        ApiError::NotFound {
            kind,
            id: Some(id.to_string()),
        }
    }

    pub fn collection_not_found(kind: ResourceKind) -> Self {
        ApiError::NotFound { kind, id: None }
    }

    pub fn internal() -> Self {
        ApiError::Internal
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound { .. } => 404,
            ApiError::Internal => 500,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            ApiError::BadRequest(_) => ErrorType::BadRequest,
            ApiError::NotFound { .. } => ErrorType::NotFound,
            ApiError::Internal => ErrorType::InternalServerError,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(reason) => write!(f, "Bad request. Reason: {reason}"),
            ApiError::NotFound { kind, id: Some(id) } => {
                write!(f, "resource: {kind} with id: {id} not found")
            }
            ApiError::NotFound { kind, id: None } => write!(f, "resource: {kind} not found"),
            ApiError::Internal => f.write_str(INTERNAL_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}
