//! Risk assessment results produced by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level classification derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 1.0.
    Low,
    /// Score below 2.0.
    Medium,
    /// Score below 3.0.
    High,
    /// Score 3.0 and above.
    Critical,
}

impl RiskLevel {
    /// Classifies an overall score into a level.
    pub fn from_score(score: f64) -> Self {
        if score < 1.0 {
            RiskLevel::Low
        } else if score < 2.0 {
            RiskLevel::Medium
        } else if score < 3.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-category contribution to an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    /// Sum of the weights of the selected factors in this category.
    pub raw_score: f64,
    /// Raw score multiplied by the category weight.
    pub weighted_score: f64,
    /// Names of the factors that were selected and recognized.
    pub active_factors: Vec<String>,
}

/// Immutable result of one risk computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub breakdown: Vec<CategoryBreakdown>,
}

impl RiskAssessmentResult {
    /// Builds a result from per-category breakdowns.
    pub fn from_breakdown(breakdown: Vec<CategoryBreakdown>) -> Self {
        let overall_score: f64 = breakdown.iter().map(|b| b.weighted_score).sum();
        Self {
            overall_score,
            risk_level: RiskLevel::from_score(overall_score),
            breakdown,
        }
    }

    /// All active factor names across categories, for display.
    pub fn active_factor_names(&self) -> Vec<&str> {
        self.breakdown
            .iter()
            .flat_map(|b| b.active_factors.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(1.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(1.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(2.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(2.99), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(3.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(10.0), RiskLevel::Critical);
    }

    #[test]
    fn result_sums_weighted_scores() {
        let result = RiskAssessmentResult::from_breakdown(vec![
            CategoryBreakdown {
                category: "Operational".to_string(),
                raw_score: 1.2,
                weighted_score: 0.36,
                active_factors: vec!["Remote Destinations".to_string()],
            },
            CategoryBreakdown {
                category: "Financial".to_string(),
                raw_score: 1.0,
                weighted_score: 0.25,
                active_factors: vec!["High Value Charter".to_string()],
            },
        ]);

        assert!((result.overall_score - 0.61).abs() < 1e-9);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(
            result.active_factor_names(),
            vec!["Remote Destinations", "High Value Charter"]
        );
    }

    #[test]
    fn empty_breakdown_is_low_risk() {
        let result = RiskAssessmentResult::from_breakdown(vec![]);
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }
}
