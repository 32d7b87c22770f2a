//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The store pool and repositories are built
//! here once and handed to handlers through `AppState`.

use std::sync::Arc;

use anyhow::Result;
use modelmart_core::{AppCore, UnknownModelPolicy};
use modelmart_db::{CoreFactory, setup_database};

/// Default store connection string.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://modelmart.db";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Store connection string.
    pub database_url: String,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// What purchasing an unknown model does.
    pub unknown_model_policy: UnknownModelPolicy,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors: CorsConfig::default(),
            unknown_model_policy: UnknownModelPolicy::default(),
        }
    }

    /// Config backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            ..Self::with_defaults()
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Set the unknown-model purchase policy.
    #[must_use]
    pub const fn with_unknown_model_policy(mut self, policy: UnknownModelPolicy) -> Self {
        self.unknown_model_policy = policy;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the store and core services.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "modelmart.bootstrap",
        port = config.port,
        unknown_model_policy = ?config.unknown_model_policy,
        cors = ?config.cors,
        "Bootstrapping modelmart"
    );

    let pool = setup_database(&config.database_url).await?;
    let core = Arc::new(CoreFactory::build_app_core(
        pool,
        config.unknown_model_policy,
    ));

    Ok(AxumContext { core })
}

/// Start the web server on the configured port.
///
/// Runs until Ctrl-C is received, then drains in-flight requests.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(config.clone()).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("modelmart listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("modelmart stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
