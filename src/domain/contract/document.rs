//! The contract document aggregate - an immutable generation snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::clause::ClauseSource;
use crate::domain::foundation::{ContractId, Timestamp};
use crate::domain::risk::RiskAssessmentResult;

use super::terms::{CharterTerms, FinancialTerms, Parties};
use super::vessel::VesselSpecs;

/// A clause attached to a specific contract, with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedClause {
    pub name: String,
    pub content: String,
    pub category: String,
    pub source: ClauseSource,
}

/// Contract-level metadata supplied by the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub template_name: String,
    pub version_number: String,
    pub governing_law: String,
    pub contract_language: String,
    pub cancellation_policy: String,
}

impl Default for ContractMetadata {
    fn default() -> Self {
        Self {
            template_name: "Enhanced Standard".to_string(),
            version_number: "1.0".to_string(),
            governing_law: "Monaco".to_string(),
            contract_language: "English".to_string(),
            cancellation_policy: "Standard (90/60/30 days)".to_string(),
        }
    }
}

/// The fully assembled contract, ready for rendering and export.
///
/// Created fresh on each generate action and never mutated afterwards;
/// the snapshot handed to the renderer is the snapshot that gets stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDocument {
    pub contract_id: ContractId,
    pub vessel: VesselSpecs,
    pub terms: CharterTerms,
    pub parties: Parties,
    pub financial: FinancialTerms,
    pub risk: RiskAssessmentResult,
    pub clauses: Vec<SelectedClause>,
    pub metadata: ContractMetadata,
    pub generated_at: Timestamp,
}

impl ContractDocument {
    /// Charter duration in days (delegates to the terms, including the
    /// one-day clamp).
    pub fn duration_days(&self) -> i64 {
        self.terms.duration_days()
    }

    /// Hull insurance scaled by the risk score, matching the assessment
    /// summary shown on the rendered contract.
    pub fn recommended_hull_insurance(&self) -> f64 {
        self.financial.hull_insurance * self.risk_multiplier()
    }

    /// Liability insurance scaled by the risk score.
    pub fn recommended_liability_insurance(&self) -> f64 {
        self.financial.liability_insurance * self.risk_multiplier()
    }

    /// The premium multiplier: never below the standard rate.
    fn risk_multiplier(&self) -> f64 {
        self.risk.overall_score.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::{FactorSelections, RiskEngine};
    use chrono::NaiveDate;

    fn sample_document() -> ContractDocument {
        let engine = RiskEngine::new();
        ContractDocument {
            contract_id: ContractId::from_token("AB12CD34"),
            vessel: VesselSpecs {
                name: "M/Y Meltemi".to_string(),
                ..Default::default()
            },
            terms: CharterTerms {
                start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 7, 8).unwrap(),
                delivery_location: "Monaco".to_string(),
                return_location: "Monaco".to_string(),
                operational_area: "Western Mediterranean".to_string(),
                daily_rate: 10_000.0,
                currency: "EUR".to_string(),
                special_requests: None,
            },
            parties: Parties::default(),
            financial: FinancialTerms {
                hull_insurance: 25_000_000.0,
                liability_insurance: 50_000_000.0,
                ..Default::default()
            },
            risk: engine.compute(&FactorSelections::new()),
            clauses: vec![],
            metadata: ContractMetadata::default(),
            generated_at: Timestamp::now(),
        }
    }

    #[test]
    fn recommended_insurance_never_drops_below_standard() {
        let document = sample_document();
        // Zero-risk charter: multiplier floors at 1.0.
        assert!((document.recommended_hull_insurance() - 25_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recommended_insurance_scales_with_risk() {
        let mut document = sample_document();
        document.risk.overall_score = 1.5;
        assert!((document.recommended_hull_insurance() - 37_500_000.0).abs() < 1e-6);
        assert!((document.recommended_liability_insurance() - 75_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn document_roundtrips_through_json() {
        let document = sample_document();
        let json = serde_json::to_string(&document).unwrap();
        let back: ContractDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);
    }
}
