#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    DocumentId, Fields, GUEST_BUYER_EMAIL, InvalidIdentifier, Model, ModelPatch, NewModel,
    NewPurchase, PURCHASE_CONFIRMATION, Purchase, PurchaseReceipt, UnknownModelPolicy,
};
pub use ports::{CoreError, ModelRepository, PurchaseRepository, Repos, RepositoryError};
pub use services::{AppCore, ModelService, PurchaseService};
pub use validation::{
    ValidationError, validate_buyer_email, validate_model_patch, validate_new_model,
};
