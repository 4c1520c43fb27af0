//! Risk assessment: weighted categories, the scoring engine, and
//! mitigation recommendations.

mod assessment;
mod category;
mod engine;
mod mitigation;

pub use assessment::{CategoryBreakdown, RiskAssessmentResult, RiskLevel};
pub use category::{default_categories, RiskCategory, RiskFactor};
pub use engine::{FactorSelections, RiskEngine};
pub use mitigation::{
    CostImpact, MitigationRecommender, MitigationStrategy, RankedMitigation, DEFAULT_CATALOG,
};
