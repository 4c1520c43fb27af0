//! Request/response types for risk endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::risk::{
    FactorSelections, RankedMitigation, RiskAssessmentResult, RiskCategory,
};

/// Factor selections as submitted by the form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub selections: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub max_recommendations: Option<usize>,
}

impl AssessRequest {
    /// Converts the wire map into domain selections.
    pub fn into_selections(self) -> FactorSelections {
        self.selections
            .into_iter()
            .map(|(category, factors)| (category, factors.into_iter().collect()))
            .collect()
    }
}

/// Assessment plus ranked mitigations.
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub assessment: RiskAssessmentResult,
    pub mitigations: Vec<RankedMitigation>,
}

/// Current category configuration.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<RiskCategory>,
}

/// Weight update payload.
#[derive(Debug, Deserialize)]
pub struct UpdateWeightRequest {
    pub weight: f64,
}

/// New factor payload.
#[derive(Debug, Deserialize)]
pub struct AddFactorRequest {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

/// The mitigation catalog (built-in plus custom entries).
#[derive(Debug, Serialize)]
pub struct MitigationCatalogResponse {
    pub catalog: Vec<crate::domain::risk::MitigationStrategy>,
}

/// Custom mitigation payload.
#[derive(Debug, Deserialize)]
pub struct AddMitigationRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub implementation: String,
    pub effectiveness: f64,
    pub cost_impact: crate::domain::risk::CostImpact,
}
