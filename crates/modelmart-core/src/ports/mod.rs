//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Identifiers are parsed before they reach a port

pub mod model_repository;
pub mod purchase_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::InvalidIdentifier;
use crate::validation::ValidationError;

pub use model_repository::ModelRepository;
pub use purchase_repository::PurchaseRepository;

/// Container for all repository trait objects.
///
/// Built once at the composition root and handed to `AppCore`, so no
/// handler ever reaches the store through ambient state.
#[derive(Clone)]
pub struct Repos {
    /// Model repository over the `models` collection.
    pub models: Arc<dyn ModelRepository>,
    /// Purchase log over the `purchases` collection.
    pub purchases: Arc<dyn PurchaseRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(models: Arc<dyn ModelRepository>, purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { models, purchases }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No document matched the identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connection, query, transaction).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Request input failed edge validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Identifier string is not in the store's format.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
}

impl CoreError {
    /// True when no document matched.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
