//! Snapshot storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Storage configuration for contract snapshots
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding contract snapshot files
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_dir.trim().is_empty() {
            return Err(ValidationError::EmptySnapshotDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

fn default_snapshot_dir() -> String {
    "./data/versions".to_string()
}
