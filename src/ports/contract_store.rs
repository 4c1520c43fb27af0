//! Contract store port - snapshot persistence and version listing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::contract::ContractDocument;
use crate::domain::foundation::{ContractId, Timestamp};

/// A stored snapshot: the structured document plus its rendered HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSnapshot {
    pub document: ContractDocument,
    pub html: String,
}

/// Listing entry for the version history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub contract_id: ContractId,
    pub version_number: String,
    pub vessel_name: String,
    pub stored_at: Timestamp,
    pub size_bytes: u64,
}

/// Port for persisting contract snapshots keyed by contract id and
/// version, and listing them by modification time for the version
/// history display.
#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Stores a snapshot. Overwrites any previous snapshot with the same
    /// contract id and version number.
    async fn save(&self, snapshot: &ContractSnapshot) -> Result<(), StoreError>;

    /// Loads a snapshot by id and version.
    async fn load(
        &self,
        contract_id: &ContractId,
        version_number: &str,
    ) -> Result<ContractSnapshot, StoreError>;

    /// Lists stored snapshots, most recently modified first.
    async fn list(&self) -> Result<Vec<SnapshotInfo>, StoreError>;
}

/// Errors that can occur in the snapshot store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Snapshot not found: {contract_id} v{version_number}")]
    NotFound {
        contract_id: String,
        version_number: String,
    },

    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error in contract store: {0}")]
    Io(String),
}

impl StoreError {
    /// Creates a not-found error.
    pub fn not_found(contract_id: &ContractId, version_number: &str) -> Self {
        Self::NotFound {
            contract_id: contract_id.to_string(),
            version_number: version_number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_store_is_object_safe() {
        fn check<T: ContractStore + ?Sized>() {}
        check::<dyn ContractStore>();
    }

    #[test]
    fn not_found_error_names_the_snapshot() {
        let err = StoreError::not_found(&ContractId::from_token("AB12CD34"), "1.0");
        assert!(err.to_string().contains("AB12CD34"));
        assert!(err.to_string().contains("v1.0"));
    }
}
