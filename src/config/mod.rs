//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INTEREST_AGGREGATOR` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use interest_aggregator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod collaborators;
mod concurrency;
mod database;
mod error;
mod redis;
mod server;
mod weights;

pub use collaborators::CollaboratorsConfig;
pub use concurrency::ConcurrencyConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use weights::WeightsConfig;

use serde::Deserialize;

use crate::application::AggregatorSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, service name)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Redis configuration (ranking channel, reaction intake)
    pub redis: RedisConfig,

    /// Signal weights
    #[serde(default)]
    pub weights: WeightsConfig,

    /// Optimistic write retries
    #[serde(default)]
    pub concurrency: ConcurrencyConfig,

    /// Event catalog and logging service endpoints
    #[serde(default)]
    pub collaborators: CollaboratorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INTEREST_AGGREGATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INTEREST_AGGREGATOR__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `INTEREST_AGGREGATOR__WEIGHTS__FAVORITE=5.0` -> `weights.favorite = 5.0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INTEREST_AGGREGATOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
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
        self.database.validate()?;
        self.redis.validate()?;
        self.weights.validate()?;
        self.concurrency.validate()?;
        self.collaborators.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Aggregator tuning derived from this configuration.
    pub fn aggregator_settings(&self) -> Result<AggregatorSettings, ValidationError> {
        Ok(AggregatorSettings {
            weights: self.weights.fold_weights()?,
            max_fold_attempts: self.concurrency.max_fold_attempts,
            service_name: self.server.service_name.clone(),
        })
    }
}
