//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of loaded configuration.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Server port must not be 0")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Snapshot directory must not be empty")]
    EmptySnapshotDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_reasons() {
        assert!(ValidationError::InvalidPort.to_string().contains("port"));
        assert!(ValidationError::InvalidTimeout.to_string().contains("timeout"));
        assert!(ValidationError::EmptySnapshotDir
            .to_string()
            .contains("Snapshot directory"));
    }
}
