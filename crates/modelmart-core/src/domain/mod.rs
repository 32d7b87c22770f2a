//! Domain types for the model catalog and the purchase log.
//!
//! These types are independent of any infrastructure concern. Storage
//! adapters map them to rows; HTTP adapters serialize them as JSON.

mod id;
mod model;
mod purchase;

pub use id::{DocumentId, InvalidIdentifier};
pub use model::{Fields, ID_FIELD, Model, ModelPatch, NewModel, PURCHASED_FIELD};
pub use purchase::{
    GUEST_BUYER_EMAIL, NewPurchase, PURCHASE_CONFIRMATION, Purchase, PurchaseReceipt,
    UnknownModelPolicy,
};
