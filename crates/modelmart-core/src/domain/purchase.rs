//! Purchase domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::DocumentId;
use super::model::Model;

/// Buyer recorded when a purchase request names none.
pub const GUEST_BUYER_EMAIL: &str = "guest@example.com";

/// Message returned with every successful purchase.
pub const PURCHASE_CONFIRMATION: &str = "Purchase successful";

/// One entry in the append-only purchase log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Identifier of the purchased model, stored as plain text.
    pub model_id: String,
    pub buyer_email: String,
    /// Capture time, assigned by the store.
    pub date: DateTime<Utc>,
}

/// A purchase record that hasn't been appended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchase {
    pub model_id: String,
    pub buyer_email: String,
}

impl NewPurchase {
    /// Build a record for `model_id`, falling back to the guest buyer.
    pub fn new(model_id: &DocumentId, buyer_email: Option<String>) -> Self {
        Self {
            model_id: model_id.to_string(),
            buyer_email: buyer_email.unwrap_or_else(|| GUEST_BUYER_EMAIL.to_string()),
        }
    }
}

/// Confirmation payload for a purchase.
///
/// `updated_model` is `None` only when an unknown model was purchased under
/// [`UnknownModelPolicy::Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub message: String,
    pub updated_model: Option<Model>,
}

impl PurchaseReceipt {
    pub fn new(updated_model: Option<Model>) -> Self {
        Self {
            message: PURCHASE_CONFIRMATION.to_string(),
            updated_model,
        }
    }
}

/// What a purchase of a model that doesn't exist does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownModelPolicy {
    /// Append the record anyway and report `updatedModel: null`. The
    /// increment and the append are independent writes.
    #[default]
    Record,
    /// Fail with `NotFound` and write nothing. The counter increment and the
    /// log append run in one store transaction.
    Reject,
}
