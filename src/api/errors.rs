//! # API Errors
//!
//! The response-mapping half of the service: every failure a request can hit
//! is an [`ApiError`], and each error renders as a fixed message plus the
//! underlying detail. Store failures map by kind — validation to 400,
//! everything else to 500 — rather than by operation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::{StoreError, StoreErrorKind};

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A single-document lookup matched nothing
    #[error("movie not found")]
    NotFound,

    /// A year-range bound in the path was not numeric
    #[error("invalid year range: {0}")]
    InvalidRange(String),

    /// Failure surfaced by the document store
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(e) => match e.kind() {
                StoreErrorKind::Validation => StatusCode::BAD_REQUEST,
                StoreErrorKind::Query | StoreErrorKind::Internal => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// The fixed client-facing message
    fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "movie not found",
            ApiError::InvalidRange(_) => "invalid year range",
            ApiError::Store(e) if e.kind() == StoreErrorKind::Validation => "failed to add movie",
            ApiError::Store(_) => "internal server error",
        }
    }

    /// Underlying detail, when there is one worth forwarding
    fn detail(&self) -> Option<String> {
        match self {
            ApiError::NotFound => None,
            ApiError::InvalidRange(detail) => Some(detail.clone()),
            ApiError::Store(e) => Some(e.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.message().to_string(),
            error: err.detail(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            let detail = self.detail().unwrap_or_default();
            Logger::error("request_failed", &[("detail", detail.as_str())]);
        }
        let body = ErrorBody::from(&self);
        (status, Json(body)).into_response()
    }
}
