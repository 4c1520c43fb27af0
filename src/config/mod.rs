//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHARTER_FORGE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use charter_forge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Snapshot storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file if present, then environment variables with
    /// the `CHARTER_FORGE` prefix:
    ///
    /// - `CHARTER_FORGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHARTER_FORGE__STORAGE__SNAPSHOT_DIR=...` -> `storage.snapshot_dir = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHARTER_FORGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CHARTER_FORGE__SERVER__PORT");
        env::remove_var("CHARTER_FORGE__SERVER__ENVIRONMENT");
        env::remove_var("CHARTER_FORGE__STORAGE__SNAPSHOT_DIR");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.snapshot_dir, "./data/versions");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHARTER_FORGE__SERVER__PORT", "3000");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHARTER_FORGE__SERVER__ENVIRONMENT", "production");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert!(config.is_production());
    }

    #[test]
    fn test_custom_snapshot_dir() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHARTER_FORGE__STORAGE__SNAPSHOT_DIR", "/tmp/contracts");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.storage.snapshot_dir, "/tmp/contracts");
    }
}
