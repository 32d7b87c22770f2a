//! `modelmart` server binary.

use anyhow::Result;
use clap::Parser;
use modelmart_axum::{ServeArgs, start_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServeArgs::parse().into_config();
    start_server(config).await
}
