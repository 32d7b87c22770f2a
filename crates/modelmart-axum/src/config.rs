//! Command-line and environment configuration.
//!
//! Each flag falls back to an environment variable, so the service can be
//! configured purely through the process environment.

use clap::{Parser, ValueEnum};
use modelmart_core::UnknownModelPolicy;

use crate::bootstrap::{CorsConfig, DEFAULT_DATABASE_URL, DEFAULT_PORT, ServerConfig};

/// Arguments for the `modelmart` binary.
#[derive(Debug, Parser)]
#[command(name = "modelmart")]
#[command(about = "Serve the model catalog and purchase log over HTTP")]
#[command(version)]
pub struct ServeArgs {
    /// Store connection string (`sqlite::memory:` for a throwaway store)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Comma-separated CORS allow-list; empty allows every origin
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// What a purchase of an unknown model does
    #[arg(
        long,
        env = "UNKNOWN_MODEL_POLICY",
        value_enum,
        default_value_t = PolicyArg::Record
    )]
    pub unknown_model_policy: PolicyArg,
}

/// CLI spelling of [`UnknownModelPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Record the purchase anyway and report `updatedModel: null`
    Record,
    /// Respond 404 and record nothing
    Reject,
}

impl From<PolicyArg> for UnknownModelPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Record => Self::Record,
            PolicyArg::Reject => Self::Reject,
        }
    }
}

impl ServeArgs {
    /// Turn parsed arguments into a server configuration.
    pub fn into_config(self) -> ServerConfig {
        let origins: Vec<String> = self
            .cors_origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let cors = if origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(origins)
        };

        ServerConfig {
            port: self.port,
            database_url: self.database_url,
            cors,
            unknown_model_policy: self.unknown_model_policy.into(),
        }
    }
}
