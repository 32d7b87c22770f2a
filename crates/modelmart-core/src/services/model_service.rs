//! Model service - orchestrates model CRUD operations.

use crate::domain::{DocumentId, Model, ModelPatch, NewModel};
use crate::ports::{CoreError, ModelRepository};
use std::sync::Arc;

/// Service for model operations.
///
/// A thin facade over the injected `ModelRepository`: it parses raw
/// identifiers and lifts repository errors into `CoreError`.
pub struct ModelService {
    repo: Arc<dyn ModelRepository>,
}

impl ModelService {
    /// Create a new model service with the given repository.
    pub fn new(repo: Arc<dyn ModelRepository>) -> Self {
        Self { repo }
    }

    /// List all models.
    pub async fn list(&self) -> Result<Vec<Model>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a model by its identifier string.
    pub async fn get(&self, id: &str) -> Result<Model, CoreError> {
        let id = parse_id(id)?;
        self.repo.get_by_id(&id).await.map_err(CoreError::from)
    }

    /// Create a model from validated input.
    pub async fn create(&self, model: NewModel) -> Result<Model, CoreError> {
        self.repo.insert(&model).await.map_err(CoreError::from)
    }

    /// Merge-patch a model and return the updated document.
    pub async fn update(&self, id: &str, patch: ModelPatch) -> Result<Model, CoreError> {
        let id = parse_id(id)?;
        self.repo.update(&id, &patch).await.map_err(CoreError::from)
    }

    /// Delete a model by its identifier string.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let id = parse_id(id)?;
        self.repo.delete(&id).await.map_err(CoreError::from)
    }
}

pub(super) fn parse_id(raw: &str) -> Result<DocumentId, CoreError> {
    Ok(raw.parse::<DocumentId>()?)
}
