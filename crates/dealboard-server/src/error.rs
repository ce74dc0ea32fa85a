//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use dealboard_core::TimeParseError;
use dealboard_ingest::FeedError;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client supplied unparseable time text.
    #[error("{0}")]
    InvalidTime(#[from] TimeParseError),

    /// The upstream feed could not supply a snapshot.
    #[error("{0}")]
    Feed(#[from] FeedError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body. The shape (timestamp/status/error/message) is
/// part of the external contract.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = match &self {
            ApiError::InvalidTime(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            ApiError::Feed(_) => (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };

        // Internal details stay out of the response body.
        let message = match &self {
            ApiError::Internal(_) => "an unexpected error occurred".to_string(),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: reason.to_string(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
