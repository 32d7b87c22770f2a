//! Edge validation for request bodies.
//!
//! Raw JSON bodies are turned into typed inputs here, before any repository
//! call. The store never sees a document that failed these checks.

use serde_json::Value;
use thiserror::Error;

use crate::domain::{Fields, ID_FIELD, ModelPatch, NewModel, PURCHASED_FIELD};

/// Errors raised when a request body doesn't meet the input rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Field '_id' is assigned by the store and cannot be set")]
    IdentityField,

    #[error("Invalid field name: '{0}'")]
    InvalidFieldName(String),

    #[error("Field 'purchased' must be a non-negative integer")]
    InvalidPurchased,

    #[error("Update must contain at least one field")]
    EmptyUpdate,

    #[error("Field 'buyerEmail' must be a string")]
    InvalidBuyerEmail,
}

/// Validate the body of a create request.
///
/// An absent or falsy `purchased` (`null`, `false`, `0`, `""`) becomes 0;
/// any other value must be a non-negative integer.
pub fn validate_new_model(body: Value) -> Result<NewModel, ValidationError> {
    let mut fields = document_fields(body)?;
    let purchased = match fields.remove(PURCHASED_FIELD) {
        Some(value) if !is_falsy(&value) => purchased_count(&value)?,
        _ => 0,
    };
    Ok(NewModel { fields, purchased })
}

/// Validate the body of an update request.
///
/// `purchased` may be overwritten but must then be a non-negative integer.
pub fn validate_model_patch(body: Value) -> Result<ModelPatch, ValidationError> {
    let mut fields = document_fields(body)?;
    let purchased = fields
        .remove(PURCHASED_FIELD)
        .map(|value| purchased_count(&value))
        .transpose()?;

    let patch = ModelPatch { fields, purchased };
    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }
    Ok(patch)
}

/// Validate an optional buyer email.
///
/// The address is free text and kept verbatim; only its type is checked.
/// Missing, `null` and empty values mean "no buyer" and yield `None`.
pub fn validate_buyer_email(value: Option<&Value>) -> Result<Option<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(email)) if email.is_empty() => Ok(None),
        Some(Value::String(email)) => Ok(Some(email.clone())),
        Some(_) => Err(ValidationError::InvalidBuyerEmail),
    }
}

fn document_fields(body: Value) -> Result<Fields, ValidationError> {
    let Value::Object(fields) = body else {
        return Err(ValidationError::NotAnObject);
    };

    for name in fields.keys() {
        if name == ID_FIELD {
            return Err(ValidationError::IdentityField);
        }
        if name.is_empty() || name.starts_with('$') {
            return Err(ValidationError::InvalidFieldName(name.clone()));
        }
    }
    Ok(fields)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// Bounded by i64 so the count fits the store's integer column.
fn purchased_count(value: &Value) -> Result<u64, ValidationError> {
    value
        .as_i64()
        .and_then(|n| u64::try_from(n).ok())
        .ok_or(ValidationError::InvalidPurchased)
}
