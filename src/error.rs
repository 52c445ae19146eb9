use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Domain failures raised by handlers and translated into structured JSON.
///
/// Bodies follow the `{"detail": ...}` shape throughout so clients see one
/// error format regardless of where the failure originated.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid API Key")]
    InvalidApiKey,

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidApiKey => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate email and friends; the upstream API used 400 here
            // rather than 409, kept for compatibility.
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<crate::users::repo::RepoError> for ApiError {
    fn from(e: crate::users::repo::RepoError) -> Self {
        use crate::users::repo::RepoError;
        match e {
            RepoError::DuplicateEmail => ApiError::Conflict("Email already registered".into()),
            RepoError::Other(e) => ApiError::Internal(e),
        }
    }
}
