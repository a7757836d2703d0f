//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type for all item endpoints. It implements
//! `axum::response::IntoResponse`, producing a plain-text message body with
//! the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body could not be decoded as an item (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unknown item ID or unmatched route (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Verb not supported on this route (405).
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}
