//! Purchase service - records purchases against the catalog.

use std::sync::Arc;

use tracing::{info, warn};

use super::model_service::parse_id;
use crate::domain::{NewPurchase, Purchase, PurchaseReceipt, UnknownModelPolicy};
use crate::ports::{CoreError, ModelRepository, PurchaseRepository};

/// Service for the purchase operation and the purchase log.
pub struct PurchaseService {
    models: Arc<dyn ModelRepository>,
    purchases: Arc<dyn PurchaseRepository>,
    policy: UnknownModelPolicy,
}

impl PurchaseService {
    /// Create a new purchase service.
    pub fn new(
        models: Arc<dyn ModelRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        policy: UnknownModelPolicy,
    ) -> Self {
        Self {
            models,
            purchases,
            policy,
        }
    }

    /// The policy applied to purchases of unknown models.
    pub const fn policy(&self) -> UnknownModelPolicy {
        self.policy
    }

    /// Purchase a model: bump its counter and append a record to the log.
    ///
    /// The identifier is trimmed before parsing. `buyer_email` must already
    /// be validated; `None` records the guest buyer.
    pub async fn purchase(
        &self,
        model_id: &str,
        buyer_email: Option<String>,
    ) -> Result<PurchaseReceipt, CoreError> {
        let id = parse_id(model_id.trim())?;
        let purchase = NewPurchase::new(&id, buyer_email);

        info!(
            target: "modelmart.purchase",
            model_id = %id,
            buyer = %purchase.buyer_email,
            policy = ?self.policy,
            "Purchase request"
        );

        let updated = match self.policy {
            UnknownModelPolicy::Reject => {
                let (model, _) = self.purchases.record(&id, &purchase).await?;
                Some(model)
            }
            UnknownModelPolicy::Record => {
                let updated = self.models.increment_purchased(&id).await?;
                if updated.is_none() {
                    warn!(
                        target: "modelmart.purchase",
                        model_id = %id,
                        "No model matched; recording purchase with a dangling reference"
                    );
                }
                self.purchases.append(&purchase).await?;
                updated
            }
        };

        Ok(PurchaseReceipt::new(updated))
    }

    /// List every purchase record.
    pub async fn list(&self) -> Result<Vec<Purchase>, CoreError> {
        self.purchases.list().await.map_err(CoreError::from)
    }
}
