//! Purchase log trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{DocumentId, Model, NewPurchase, Purchase};

/// Append-only log over the `purchases` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Append a record. The store assigns the identifier and the timestamp.
    ///
    /// The referenced model is not checked.
    async fn append(&self, purchase: &NewPurchase) -> Result<Purchase, RepositoryError>;

    /// List every record. No filtering, no pagination.
    async fn list(&self) -> Result<Vec<Purchase>, RepositoryError>;

    /// Increment the model's counter and append `purchase` in one transaction.
    ///
    /// Returns `Err(RepositoryError::NotFound)` and writes nothing when the
    /// model doesn't exist.
    async fn record(
        &self,
        model_id: &DocumentId,
        purchase: &NewPurchase,
    ) -> Result<(Model, Purchase), RepositoryError>;
}
