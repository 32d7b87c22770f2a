//! Body of `POST /models/{id}/purchase`.

use modelmart_core::{ValidationError, validate_buyer_email};
use serde_json::Value;

use crate::error::HttpError;

/// Parsed purchase request.
///
/// The body is optional: an empty body or `null` purchases as the guest buyer.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub buyer_email: Option<String>,
}

impl PurchaseRequest {
    /// Parse and validate a raw request body.
    pub fn from_body(body: &[u8]) -> Result<Self, HttpError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| HttpError::BadRequest(format!("Invalid JSON body: {e}")))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Ok(Self {
                buyer_email: validate_buyer_email(fields.get("buyerEmail"))?,
            }),
            _ => Err(ValidationError::NotAnObject.into()),
        }
    }
}
