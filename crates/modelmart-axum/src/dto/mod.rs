//! Request and response bodies that only exist at the HTTP edge.

mod purchase;

pub use purchase::PurchaseRequest;

use serde::Serialize;
use serde_json::Value;

use crate::error::HttpError;

/// Plain `{"message": ...}` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Decode a request body as JSON regardless of its content type.
///
/// `Content-Type` is not checked, so clients that omit the header still have
/// their body read; a body that isn't JSON is a 400 either way. Shape checks
/// are left to the core validators.
pub fn json_body(body: &[u8]) -> Result<Value, HttpError> {
    serde_json::from_slice(body).map_err(|e| HttpError::BadRequest(format!("Invalid JSON body: {e}")))
}
