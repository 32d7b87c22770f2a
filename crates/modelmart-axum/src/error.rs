//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and JSON bodies. Only "no document
//! matched" becomes a 404 and only validation failures become a 400; every
//! other failure is a 500 carrying the route's fixed message, with the cause
//! logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use modelmart_core::{CoreError, RepositoryError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Message for every 404.
pub const MODEL_NOT_FOUND: &str = "Model not found";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No document matched.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl HttpError {
    /// Map a core error, using `failure` as the body of a 500.
    pub fn from_core(err: CoreError, failure: &str) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(_)) => {
                Self::NotFound(MODEL_NOT_FOUND.to_string())
            }
            CoreError::Validation(e) => e.into(),
            err @ (CoreError::InvalidIdentifier(_) | CoreError::Repository(_)) => {
                tracing::error!(target: "modelmart.http", error = %err, "{}", failure);
                Self::Internal(failure.to_string())
            }
        }
    }
}

/// Attach a route's fixed failure message to a core result.
pub trait OrHttpError<T> {
    fn or_http_error(self, failure: &str) -> Result<T, HttpError>;
}

impl<T> OrHttpError<T> for Result<T, CoreError> {
    fn or_http_error(self, failure: &str) -> Result<T, HttpError> {
        self.map_err(|err| HttpError::from_core(err, failure))
    }
}
