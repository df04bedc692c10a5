use axum::response::{IntoResponse, Response};
use diesel::r2d2;
use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    InvalidArgument(String),
    Validation(validator::ValidationErrors),
    Upstream(String),
    Internal(String),
}

impl ApiError {
    /// True for every flavor of "the backing collection could not be
    /// reached or queried": pool exhaustion, query failure, transport
    /// failure on the client side.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            ApiError::Database(_) | ApiError::DatabaseConnection(_) | ApiError::Upstream(_)
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Upstream(e) => write!(f, "Upstream error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Storage unavailable: {}", e),
            ),
            ApiError::DatabaseConnection(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Storage unavailable: {}", e),
            ),
            ApiError::Upstream(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Upstream unavailable: {}", e),
            ),
            ApiError::InvalidArgument(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid argument: {}", msg))
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}
