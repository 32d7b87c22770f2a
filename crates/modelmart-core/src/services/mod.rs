//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod model_service;
mod purchase_service;

pub use app_core::AppCore;
pub use model_service::ModelService;
pub use purchase_service::PurchaseService;
