//! Service configuration
//!
//! Loaded with the `config` crate from defaults overridden by `EVENTS__*`
//! environment variables (double underscore separates nested keys, e.g.
//! `EVENTS__SERVER__PORT`). Database settings are read separately through
//! [`common::database::DatabaseConfig`].

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Default tracing filter, used when `RUST_LOG` is not set
    pub log_level: String,
    pub storage: StorageBackend,
}

impl AppConfig {
    /// Load the configuration from defaults and the environment
    ///
    /// # Environment Variables
    /// - `EVENTS__SERVER__HOST`: listen address (default: "0.0.0.0")
    /// - `EVENTS__SERVER__PORT`: listen port (default: 3001)
    /// - `EVENTS__LOG_LEVEL`: default log filter (default: "info")
    /// - `EVENTS__STORAGE`: "postgres" or "memory" (default: "postgres")
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001_i64)?
            .set_default("log_level", "info")?
            .set_default("storage", "postgres")?
            .add_source(
                Environment::with_prefix("EVENTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
