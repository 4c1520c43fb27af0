//! Risk categories and the boolean factors they group.

use serde::{Deserialize, Serialize};

/// A boolean-selectable condition contributing a fixed weight to its
/// category's raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Unique within the owning category.
    pub name: String,
    /// Always positive.
    pub weight: f64,
    pub description: String,
}

impl RiskFactor {
    /// Creates a new factor.
    pub fn new(name: impl Into<String>, weight: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            description: description.into(),
        }
    }
}

/// A weighted grouping of related risk factors.
///
/// Category weights across the whole configuration sum to 1.0; the engine
/// renormalizes on every weight update rather than rejecting imbalance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCategory {
    pub name: String,
    pub weight: f64,
    pub factors: Vec<RiskFactor>,
}

impl RiskCategory {
    /// Creates a new category.
    pub fn new(name: impl Into<String>, weight: f64, factors: Vec<RiskFactor>) -> Self {
        Self {
            name: name.into(),
            weight,
            factors,
        }
    }

    /// Looks up a factor by name.
    pub fn factor(&self, name: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|f| f.name == name)
    }
}

/// The default risk configuration.
///
/// Factor names follow the charter risk profile questionnaire; weights are
/// tuned so the four category weights sum to 1.0.
pub fn default_categories() -> Vec<RiskCategory> {
    vec![
        RiskCategory::new(
            "Operational",
            0.30,
            vec![
                RiskFactor::new(
                    "Remote Destinations",
                    1.2,
                    "Itinerary includes areas far from rescue and repair infrastructure",
                ),
                RiskFactor::new(
                    "High Season Charter",
                    0.8,
                    "Peak-season congestion in anchorages and marinas",
                ),
                RiskFactor::new(
                    "Extreme Weather Season",
                    1.1,
                    "Charter dates overlap hurricane or monsoon season",
                ),
                RiskFactor::new(
                    "High Traffic Waters",
                    0.7,
                    "Transit through dense commercial shipping lanes",
                ),
                RiskFactor::new(
                    "Political Instability",
                    1.3,
                    "Ports of call in regions with travel advisories",
                ),
            ],
        ),
        RiskCategory::new(
            "Financial",
            0.25,
            vec![
                RiskFactor::new(
                    "High Value Charter",
                    1.0,
                    "Total charter value places the booking in the top exposure band",
                ),
                RiskFactor::new(
                    "Accelerated Payment Schedule",
                    0.9,
                    "Full payment compressed into the booking window",
                ),
                RiskFactor::new(
                    "Corporate Credit Exposure",
                    0.8,
                    "Net-terms invoicing against corporate credit",
                ),
                RiskFactor::new(
                    "Currency Fluctuation",
                    0.6,
                    "Charter priced in a currency other than the operator's",
                ),
            ],
        ),
        RiskCategory::new(
            "Client",
            0.25,
            vec![
                RiskFactor::new(
                    "First Time Charterer",
                    1.0,
                    "No prior charter history with any operator",
                ),
                RiskFactor::new(
                    "Inexperienced Guests",
                    0.9,
                    "Guest party unfamiliar with life aboard",
                ),
                RiskFactor::new(
                    "Large Guest Party",
                    0.6,
                    "Guest count at or near vessel capacity",
                ),
                RiskFactor::new(
                    "Unverified References",
                    0.8,
                    "Client references could not be confirmed before booking",
                ),
            ],
        ),
        RiskCategory::new(
            "Regulatory",
            0.20,
            vec![
                RiskFactor::new(
                    "Multi-Jurisdiction Itinerary",
                    1.4,
                    "Itinerary crosses three or more legal jurisdictions",
                ),
                RiskFactor::new(
                    "Flag State Restrictions",
                    0.9,
                    "Flag state imposes charter-area or crewing restrictions",
                ),
                RiskFactor::new(
                    "Customs & Immigration Complexity",
                    0.8,
                    "Guests require visas or pre-clearance at ports of call",
                ),
                RiskFactor::new(
                    "Environmental Zone Transit",
                    0.7,
                    "Transit through marine protected or emission-controlled areas",
                ),
                RiskFactor::new(
                    "Sanctions Screening Required",
                    1.2,
                    "Parties or ports require sanctions-list screening",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_weights_sum_to_one() {
        let total: f64 = default_categories().iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_factor_weights_are_positive() {
        for category in default_categories() {
            for factor in &category.factors {
                assert!(factor.weight > 0.0, "{} has non-positive weight", factor.name);
            }
        }
    }

    #[test]
    fn regulatory_factor_weights_sum_to_five() {
        let categories = default_categories();
        let regulatory = categories.iter().find(|c| c.name == "Regulatory").unwrap();
        let total: f64 = regulatory.factors.iter().map(|f| f.weight).sum();
        assert!((total - 5.0).abs() < 1e-9);
    }

    #[test]
    fn factor_lookup_by_name() {
        let categories = default_categories();
        let operational = categories.iter().find(|c| c.name == "Operational").unwrap();
        let factor = operational.factor("Remote Destinations").unwrap();
        assert!((factor.weight - 1.2).abs() < f64::EPSILON);
        assert!(operational.factor("Nonexistent").is_none());
    }
}
