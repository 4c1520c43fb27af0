//! Mitigation strategies and the effectiveness-ranked recommender.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Relative cost of putting a mitigation in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostImpact {
    Low,
    Medium,
    High,
}

/// A recommended action to reduce charter risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationStrategy {
    pub name: String,
    pub description: String,
    /// Concrete steps an operator takes to apply the strategy.
    pub implementation: String,
    /// Expected risk reduction, 0.0 to 1.0.
    pub effectiveness: f64,
    pub cost_impact: CostImpact,
}

impl MitigationStrategy {
    /// Creates a new strategy.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        implementation: impl Into<String>,
        effectiveness: f64,
        cost_impact: CostImpact,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            implementation: implementation.into(),
            effectiveness,
            cost_impact,
        }
    }
}

/// A catalog entry ranked by the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMitigation {
    pub strategy: MitigationStrategy,
    /// True for the first `max_count` entries; the remainder are shown as
    /// optional extras beyond the recommended cutoff.
    pub recommended: bool,
}

/// The built-in strategy catalog. Operators append custom entries at runtime.
pub static DEFAULT_CATALOG: Lazy<Vec<MitigationStrategy>> = Lazy::new(|| {
    vec![
        MitigationStrategy::new(
            "Comprehensive Travel Insurance",
            "Require charterer-side travel and cancellation insurance",
            "Collect proof of a policy covering the full charter value before releasing documents",
            0.85,
            CostImpact::Low,
        ),
        MitigationStrategy::new(
            "Increased Security Deposit",
            "Raise the security deposit in line with the assessed risk band",
            "Scale the deposit to 1.5x the standard rate and hold it in escrow",
            0.8,
            CostImpact::Medium,
        ),
        MitigationStrategy::new(
            "Professional Skipper Requirement",
            "Mandate a professional skipper for the full charter period",
            "Engage a skipper holding commercial certification for the vessel class",
            0.9,
            CostImpact::High,
        ),
        MitigationStrategy::new(
            "Pre-Charter Briefing & Checkout",
            "Extended briefing and a supervised checkout sail",
            "Schedule a half-day checkout covering systems, safety gear, and anchoring",
            0.7,
            CostImpact::Low,
        ),
        MitigationStrategy::new(
            "Weather Routing Service",
            "Subscribe the charter to a professional weather routing service",
            "Contract daily routing updates with mandatory captain acknowledgement",
            0.75,
            CostImpact::Medium,
        ),
        MitigationStrategy::new(
            "Itinerary Restriction",
            "Restrict the operational area to sheltered waters",
            "Amend the operational-area clause to exclude exposed passages",
            0.65,
            CostImpact::Low,
        ),
        MitigationStrategy::new(
            "Enhanced Liability Coverage",
            "Raise third-party liability cover above the standard minimum",
            "Endorse the policy to the recommended liability figure from the assessment",
            0.8,
            CostImpact::High,
        ),
    ]
});

/// Ranks mitigation strategies by effectiveness for a given risk score.
pub struct MitigationRecommender;

impl MitigationRecommender {
    /// Default recommendation count for a score: the score clamped to 1..=3
    /// and truncated, so higher-risk charters surface more strategies.
    pub fn default_max_count(risk_score: f64) -> usize {
        risk_score.clamp(1.0, 3.0) as usize
    }

    /// Returns strategies sorted by effectiveness descending, truncated to
    /// `max_count + 2`. The first `max_count` entries are flagged
    /// recommended; the trailing entries are optional extras. Ties keep
    /// catalog order, so the ranking is deterministic for equal inputs.
    pub fn recommend(
        risk_score: f64,
        catalog: &[MitigationStrategy],
        max_count: Option<usize>,
    ) -> Vec<RankedMitigation> {
        let max_count = max_count.unwrap_or_else(|| Self::default_max_count(risk_score));

        let mut ranked: Vec<&MitigationStrategy> = catalog.iter().collect();
        // sort_by is stable, so equal effectiveness keeps catalog order.
        ranked.sort_by(|a, b| {
            b.effectiveness
                .partial_cmp(&a.effectiveness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
            .into_iter()
            .take(max_count + 2)
            .enumerate()
            .map(|(i, strategy)| RankedMitigation {
                strategy: strategy.clone(),
                recommended: i < max_count,
            })
            .collect()
    }
}
