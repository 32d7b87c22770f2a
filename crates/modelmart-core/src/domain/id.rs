//! Store-assigned document identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier assigned by the document store when a document is inserted.
///
/// Rendered as a lowercase hyphenated UUID. Parsing accepts any UUID
/// notation and normalizes it, so two spellings of the same id compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// The string is not in the store's identifier format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identifier: '{0}'")]
pub struct InvalidIdentifier(pub String);

impl FromStr for DocumentId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| InvalidIdentifier(s.to_string()))
    }
}
