//! Application configuration schemas.
//!
//! All configuration structs are deserialized through the `config`
//! crate from TOML files plus `CATALOG__*` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// sources (base file + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `base` (a path without extension, e.g. `config/default`),
    /// the optional `config/{env}` overlay, and environment variables
    /// prefixed with `CATALOG__` (e.g. `CATALOG__DATABASE__URL`).
    /// Missing files are not an error.
    pub fn load(base: &str, env: &str) -> Result<Self, AppError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name(base).required(false))
                .add_source(config::File::with_name(&format!("config/{env}")).required(false))
                .add_source(
                    config::Environment::with_prefix("CATALOG")
                        .prefix_separator("__")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}
