//! Model domain types.
//!
//! A model is a schemaless document: the store assigns its identity and owns
//! the `purchased` counter, everything else is caller-supplied.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::DocumentId;

/// Name of the identity field in a model document.
pub const ID_FIELD: &str = "_id";

/// Name of the purchase counter field in a model document.
pub const PURCHASED_FIELD: &str = "purchased";

/// Free-form document attributes, keyed by field name.
pub type Fields = Map<String, Value>;

/// A persisted catalog item.
///
/// Serializes as a flat document: `{"_id": ..., "purchased": ..., ...fields}`.
/// `fields` never contains `_id` or `purchased`; validation strips or rejects
/// them before a document reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Number of recorded purchases (or the last value written by an update).
    pub purchased: u64,
    /// Caller-supplied attributes (name, price, description, ...).
    #[serde(flatten)]
    pub fields: Fields,
}

impl Model {
    /// Look up a caller-supplied attribute.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A model that hasn't been persisted yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewModel {
    pub fields: Fields,
    pub purchased: u64,
}

/// A merge-patch against a stored model.
///
/// Only the supplied fields are overwritten; everything else is left as is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelPatch {
    pub fields: Fields,
    pub purchased: Option<u64>,
}

impl ModelPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.purchased.is_none()
    }

    /// Apply the patch to a model in place.
    pub fn apply_to(&self, model: &mut Model) {
        for (name, value) in &self.fields {
            model.fields.insert(name.clone(), value.clone());
        }
        if let Some(purchased) = self.purchased {
            model.purchased = purchased;
        }
    }
}
