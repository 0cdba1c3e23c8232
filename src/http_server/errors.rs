//! # HTTP Errors
//!
//! Both error kinds are client errors. Validation failures are returned as
//! the field → messages report itself; other errors use the generic
//! `{ "error", "code" }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::ValidationErrors;

/// Result type for HTTP handlers
pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Body is not parseable JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Body parsed but failed field validation
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Generic error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            RestError::Validation(errors) => (status, Json(errors)).into_response(),
            other => {
                let body = ErrorResponse {
                    error: other.to_string(),
                    code: status.as_u16(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
