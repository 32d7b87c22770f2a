//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use modelmart_core::{AppCore, Repos, UnknownModelPolicy};

use crate::repositories::{SqliteModelRepository, SqlitePurchaseRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `modelmart-core` containing
    /// trait-object-wrapped repositories that share the pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteModelRepository::new(pool.clone())),
            Arc::new(SqlitePurchaseRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, policy);
    /// ```
    pub fn build_app_core(pool: SqlitePool, policy: UnknownModelPolicy) -> AppCore {
        AppCore::new(Self::build_repos(pool), policy)
    }
}
