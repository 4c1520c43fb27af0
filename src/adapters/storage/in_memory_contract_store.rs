//! In-memory contract store for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{ContractId, Timestamp};
use crate::ports::{ContractSnapshot, ContractStore, SnapshotInfo, StoreError};

/// Keeps snapshots in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryContractStore {
    snapshots: Mutex<HashMap<(String, String), (ContractSnapshot, Timestamp)>>,
}

impl InMemoryContractStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.lock().expect("store mutex poisoned").len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ContractStore for InMemoryContractStore {
    async fn save(&self, snapshot: &ContractSnapshot) -> Result<(), StoreError> {
        let key = (
            snapshot.document.contract_id.to_string(),
            snapshot.document.metadata.version_number.clone(),
        );
        self.snapshots
            .lock()
            .expect("store mutex poisoned")
            .insert(key, (snapshot.clone(), Timestamp::now()));
        Ok(())
    }

    async fn load(
        &self,
        contract_id: &ContractId,
        version_number: &str,
    ) -> Result<ContractSnapshot, StoreError> {
        self.snapshots
            .lock()
            .expect("store mutex poisoned")
            .get(&(contract_id.to_string(), version_number.to_string()))
            .map(|(snapshot, _)| snapshot.clone())
            .ok_or_else(|| StoreError::not_found(contract_id, version_number))
    }

    async fn list(&self) -> Result<Vec<SnapshotInfo>, StoreError> {
        let snapshots = self.snapshots.lock().expect("store mutex poisoned");
        let mut infos: Vec<SnapshotInfo> = snapshots
            .values()
            .map(|(snapshot, stored_at)| SnapshotInfo {
                contract_id: snapshot.document.contract_id.clone(),
                version_number: snapshot.document.metadata.version_number.clone(),
                vessel_name: snapshot.document.vessel.name.clone(),
                stored_at: *stored_at,
                size_bytes: snapshot.html.len() as u64,
            })
            .collect();
        infos.sort_by(|a, b| b.stored_at.cmp(&a.stored_at));
        Ok(infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{
        CharterTerms, ContractAssembler, ContractMetadata, FinancialTerms, Parties, VesselSpecs,
    };
    use crate::domain::risk::{FactorSelections, RiskEngine};
    use chrono::NaiveDate;

    fn snapshot() -> ContractSnapshot {
        let document = ContractAssembler::assemble(
            VesselSpecs {
                name: "S/Y Memory".to_string(),
                ..Default::default()
            },
            CharterTerms {
                start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
                delivery_location: "Split".to_string(),
                return_location: "Split".to_string(),
                operational_area: "Adriatic".to_string(),
                daily_rate: 3_000.0,
                currency: "EUR".to_string(),
                special_requests: None,
            },
            Parties::default(),
            FinancialTerms::default(),
            RiskEngine::new().compute(&FactorSelections::new()),
            vec![],
            ContractMetadata::default(),
        )
        .unwrap();
        ContractSnapshot {
            document,
            html: "<html></html>".to_string(),
        }
    }

    #[tokio::test]
    async fn save_load_and_list() {
        let store = InMemoryContractStore::new();
        assert!(store.is_empty());

        let snapshot = snapshot();
        store.save(&snapshot).await.unwrap();

        let loaded = store
            .load(&snapshot.document.contract_id, "1.0")
            .await
            .unwrap();
        assert_eq!(loaded.document.vessel.name, "S/Y Memory");

        let infos = store.list().await.unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].vessel_name, "S/Y Memory");
    }

    #[tokio::test]
    async fn load_unknown_is_not_found() {
        let store = InMemoryContractStore::new();
        let result = store.load(&ContractId::from_token("AAAA1111"), "1.0").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
