//! File-based contract snapshot store.
//!
//! Each snapshot is stored as a pair of files keyed by version and
//! contract id: the rendered HTML and the structured document as JSON.
//! The listing is derived from the JSON files, most recently modified
//! first, which is what the version history view displays.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::fs;

use crate::domain::foundation::{ContractId, Timestamp};
use crate::ports::{ContractSnapshot, ContractStore, SnapshotInfo, StoreError};

/// Stores contract snapshots under a base directory.
#[derive(Debug, Clone)]
pub struct FileContractStore {
    base_path: PathBuf,
}

impl FileContractStore {
    /// Creates a store rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn stem(&self, contract_id: &ContractId, version_number: &str) -> String {
        format!("contract_v{}_{}", version_number, contract_id)
    }

    fn json_path(&self, contract_id: &ContractId, version_number: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.json", self.stem(contract_id, version_number)))
    }

    fn html_path(&self, contract_id: &ContractId, version_number: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.html", self.stem(contract_id, version_number)))
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl ContractStore for FileContractStore {
    async fn save(&self, snapshot: &ContractSnapshot) -> Result<(), StoreError> {
        self.ensure_dir().await?;

        let contract_id = &snapshot.document.contract_id;
        let version = &snapshot.document.metadata.version_number;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(self.json_path(contract_id, version), json)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        fs::write(self.html_path(contract_id, version), &snapshot.html)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(())
    }

    async fn load(
        &self,
        contract_id: &ContractId,
        version_number: &str,
    ) -> Result<ContractSnapshot, StoreError> {
        let path = self.json_path(contract_id, version_number);
        if !path.exists() {
            return Err(StoreError::not_found(contract_id, version_number));
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<SnapshotInfo>, StoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let mut infos = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let json = fs::read_to_string(&path)
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
            let Ok(snapshot) = serde_json::from_str::<ContractSnapshot>(&json) else {
                // Unparseable stray file; leave it out of the listing.
                continue;
            };

            let metadata = entry
                .metadata()
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
            let modified = metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .and_then(|d| Utc.timestamp_opt(d.as_secs() as i64, 0).single())
                .map(Timestamp::from_datetime)
                .unwrap_or_else(Timestamp::now);

            infos.push(SnapshotInfo {
                contract_id: snapshot.document.contract_id.clone(),
                version_number: snapshot.document.metadata.version_number.clone(),
                vessel_name: snapshot.document.vessel.name.clone(),
                stored_at: modified,
                size_bytes: metadata.len(),
            });
        }

        infos.sort_by(|a, b| b.stored_at.cmp(&a.stored_at));
        Ok(infos)
    }
}
