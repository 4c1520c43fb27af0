//! Request/response types for contract endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::GenerateContractResult;
use crate::domain::contract::{
    CharterTerms, ContractMetadata, FinancialTerms, Parties, VesselSpecs,
};
use crate::domain::risk::FactorSelections;
use crate::ports::SnapshotInfo;

/// Everything the generate form submits.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub vessel: VesselSpecs,
    pub terms: CharterTerms,
    #[serde(default)]
    pub parties: Parties,
    #[serde(default)]
    pub financial: FinancialTerms,
    #[serde(default)]
    pub metadata: ContractMetadata,
    /// Risk factor selections keyed by category.
    #[serde(default)]
    pub selections: HashMap<String, Vec<String>>,
}

impl GenerateRequest {
    /// Converts the wire selection map into domain selections.
    pub fn selections(&self) -> FactorSelections {
        self.selections
            .iter()
            .map(|(category, factors)| {
                (category.clone(), factors.iter().cloned().collect())
            })
            .collect()
    }
}

/// Generation summary with download locations.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub contract_id: String,
    pub version_number: String,
    pub vessel_name: String,
    pub duration_days: i64,
    pub total_charter_value: f64,
    pub risk_score: f64,
    pub risk_level: String,
    pub clause_count: usize,
    pub pdf_degraded: bool,
    pub snapshot_stored: bool,
    pub html_url: String,
    pub pdf_url: String,
}

impl From<&GenerateContractResult> for GenerateResponse {
    fn from(result: &GenerateContractResult) -> Self {
        let document = &result.document;
        let id = document.contract_id.to_string();
        let version = document.metadata.version_number.clone();
        Self {
            html_url: format!("/api/contracts/{id}/{version}/html"),
            pdf_url: format!("/api/contracts/{id}/{version}/pdf"),
            contract_id: id,
            version_number: version,
            vessel_name: document.vessel.name.clone(),
            duration_days: document.duration_days(),
            total_charter_value: document.terms.total_charter_value(),
            risk_score: document.risk.overall_score,
            risk_level: document.risk.risk_level.to_string(),
            clause_count: document.clauses.len(),
            pdf_degraded: result.pdf_degraded,
            snapshot_stored: result.snapshot_stored,
        }
    }
}

/// Version history listing.
#[derive(Debug, Serialize)]
pub struct VersionListResponse {
    pub versions: Vec<SnapshotInfo>,
}
