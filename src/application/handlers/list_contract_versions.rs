//! ListContractVersionsHandler - version history for stored snapshots.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ContractStore, SnapshotInfo};

/// Handler for the version history view.
pub struct ListContractVersionsHandler {
    store: Arc<dyn ContractStore>,
}

impl ListContractVersionsHandler {
    pub fn new(store: Arc<dyn ContractStore>) -> Self {
        Self { store }
    }

    /// Returns stored snapshots, most recently modified first.
    pub async fn handle(&self) -> Result<Vec<SnapshotInfo>, DomainError> {
        self.store
            .list()
            .await
            .map_err(|e| DomainError::new(ErrorCode::StorageError, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::HtmlTemplateRenderer;
    use crate::adapters::storage::InMemoryContractStore;
    use crate::domain::contract::{
        CharterTerms, ContractAssembler, ContractMetadata, FinancialTerms, Parties, VesselSpecs,
    };
    use crate::domain::risk::{FactorSelections, RiskEngine};
    use crate::ports::{ContractSnapshot, TemplateRenderer};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn lists_stored_snapshots() {
        let store = Arc::new(InMemoryContractStore::new());
        let document = ContractAssembler::assemble(
            VesselSpecs {
                name: "S/Y History".to_string(),
                ..Default::default()
            },
            CharterTerms {
                start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
                delivery_location: "Athens".to_string(),
                return_location: "Athens".to_string(),
                operational_area: "Saronic Gulf".to_string(),
                daily_rate: 4_000.0,
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
        let html = HtmlTemplateRenderer::new().render(&document).unwrap().html;
        store
            .save(&ContractSnapshot { document, html })
            .await
            .unwrap();

        let handler = ListContractVersionsHandler::new(store);
        let infos = handler.handle().await.unwrap();

        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].vessel_name, "S/Y History");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListContractVersionsHandler::new(Arc::new(InMemoryContractStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
