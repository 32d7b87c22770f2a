//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Constructed once in `create_router` from the bootstrapped context.
pub type AppState = Arc<AxumContext>;
