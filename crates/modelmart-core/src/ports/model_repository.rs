//! Model repository trait definition.
//!
//! This port defines the interface for the `models` collection.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{DocumentId, Model, ModelPatch, NewModel};

/// Repository for model persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - The store assigns identifiers on insert
/// - `increment_purchased` is a single atomic store operation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// List all models. No pagination.
    async fn list(&self) -> Result<Vec<Model>, RepositoryError>;

    /// Get a model by its identifier.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the model doesn't exist.
    async fn get_by_id(&self, id: &DocumentId) -> Result<Model, RepositoryError>;

    /// Insert a new model and return it with its assigned identifier.
    async fn insert(&self, model: &NewModel) -> Result<Model, RepositoryError>;

    /// Merge `patch` into a stored model and return the post-update document.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the model doesn't exist.
    async fn update(&self, id: &DocumentId, patch: &ModelPatch) -> Result<Model, RepositoryError>;

    /// Delete a model. Purchase records referencing it are left in place.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the model doesn't exist.
    async fn delete(&self, id: &DocumentId) -> Result<(), RepositoryError>;

    /// Add one to the model's `purchased` counter.
    ///
    /// Returns the post-increment document, or `None` when no model matched.
    async fn increment_purchased(&self, id: &DocumentId) -> Result<Option<Model>, RepositoryError>;
}
