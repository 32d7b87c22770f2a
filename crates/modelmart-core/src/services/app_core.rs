//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance built at their composition root
//! and use it to access all functionality.

use crate::domain::UnknownModelPolicy;
use crate::ports::Repos;

use super::{ModelService, PurchaseService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, UnknownModelPolicy::Reject);
///
/// let models = core.models().list().await?;
/// ```
pub struct AppCore {
    models: ModelService,
    purchases: PurchaseService,
}

impl AppCore {
    /// Create a new `AppCore` from repositories and the unknown-model policy.
    pub fn new(repos: Repos, policy: UnknownModelPolicy) -> Self {
        Self {
            models: ModelService::new(repos.models.clone()),
            purchases: PurchaseService::new(repos.models, repos.purchases, policy),
        }
    }

    /// Access the model service.
    pub const fn models(&self) -> &ModelService {
        &self.models
    }

    /// Access the purchase service.
    pub const fn purchases(&self) -> &PurchaseService {
        &self.purchases
    }
}
