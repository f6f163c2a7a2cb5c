//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Namespaced variables use the
//! `MOOD_TRACKER` prefix with `__` separating nested keys. The plain
//! variables hosting platforms set (`ENVIRONMENT`, `DATABASE_URL`,
//! `STAGING_DATABASE_URL`, `PORT`) override them.
//!
//! # Example
//!
//! ```no_run
//! use mood_tracker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;
use std::env;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from a `.env` file (if present) and the environment.
    ///
    /// # Environment Variable Format
    ///
    /// - `MOOD_TRACKER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MOOD_TRACKER__DATABASE__MAX_CONNECTIONS=20` -> `database.max_connections = 20`
    /// - `DATABASE_URL=...` -> `database.url = ...`
    /// - `STAGING_DATABASE_URL=...` -> `database.staging_url = ...`
    /// - `ENVIRONMENT=production` -> `server.environment = production`
    /// - `PORT=3000` -> `server.port = 3000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Same as [`AppConfig::load`] without reading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOOD_TRACKER")
                    .separator("__"),
            )
            .set_override_option("server.environment", env::var("ENVIRONMENT").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option(
                "database.staging_url",
                env::var("STAGING_DATABASE_URL").ok(),
            )?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate(self.server.environment)?;
        Ok(())
    }

    /// Database URL for the configured environment
    pub fn database_url(&self) -> Result<&str, ValidationError> {
        self.database.effective_url(self.server.environment)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
