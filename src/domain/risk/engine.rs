//! Risk engine - weighted scoring over the category configuration.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::DomainError;

use super::assessment::{CategoryBreakdown, RiskAssessmentResult};
use super::category::{default_categories, RiskCategory, RiskFactor};

/// Factor selections keyed by category name.
///
/// BTreeMap keeps category iteration order deterministic for equal inputs.
pub type FactorSelections = BTreeMap<String, BTreeSet<String>>;

/// Holds the weighted category configuration and computes assessments.
///
/// `compute` is a pure function over the current configuration; the
/// mutation operations edit the shared configuration in place and
/// renormalize category weights so they always sum to 1.0.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    categories: Vec<RiskCategory>,
}

impl RiskEngine {
    /// Creates an engine with the default category configuration.
    pub fn new() -> Self {
        Self {
            categories: default_categories(),
        }
    }

    /// Creates an engine from an explicit configuration.
    pub fn with_categories(categories: Vec<RiskCategory>) -> Self {
        Self { categories }
    }

    /// Returns the current configuration.
    pub fn categories(&self) -> &[RiskCategory] {
        &self.categories
    }

    /// Computes an assessment from the given selections.
    ///
    /// Unknown category or factor keys are ignored rather than rejected,
    /// tolerating stale selections from a UI that has not yet observed a
    /// configuration change.
    pub fn compute(&self, selections: &FactorSelections) -> RiskAssessmentResult {
        let breakdown = self
            .categories
            .iter()
            .map(|category| {
                let selected = selections.get(&category.name);
                let mut raw_score = 0.0;
                let mut active_factors = Vec::new();

                for factor in &category.factors {
                    if selected.is_some_and(|names| names.contains(&factor.name)) {
                        raw_score += factor.weight;
                        active_factors.push(factor.name.clone());
                    }
                }

                CategoryBreakdown {
                    category: category.name.clone(),
                    raw_score,
                    weighted_score: raw_score * category.weight,
                    active_factors,
                }
            })
            .collect();

        RiskAssessmentResult::from_breakdown(breakdown)
    }

    /// Sets a category's weight and renormalizes all weights to sum to 1.0.
    ///
    /// The caller proposes one weight; every weight (including the proposed
    /// one) is then divided by the proposed total, so the caller never has
    /// to balance the other categories manually. A proposed total of zero
    /// cannot be normalized and is rejected. Unknown categories are a
    /// no-op, consistent with `compute`'s unknown-key tolerance.
    pub fn update_category_weight(
        &mut self,
        category_name: &str,
        new_weight: f64,
    ) -> Result<(), DomainError> {
        let Some(index) = self.category_index(category_name) else {
            return Ok(());
        };

        let proposed_total: f64 = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| if i == index { new_weight } else { c.weight })
            .sum();

        if proposed_total <= 0.0 {
            return Err(DomainError::invalid_configuration(
                "Cannot renormalize category weights: total weight is zero",
            ));
        }

        self.categories[index].weight = new_weight;
        for category in &mut self.categories {
            category.weight /= proposed_total;
        }

        Ok(())
    }

    /// Adds a factor to a category. Replaces any factor with the same name,
    /// so repeating the call is idempotent.
    pub fn add_factor(&mut self, category_name: &str, factor: RiskFactor) {
        let Some(index) = self.category_index(category_name) else {
            return;
        };
        let category = &mut self.categories[index];
        category.factors.retain(|f| f.name != factor.name);
        category.factors.push(factor);
    }

    /// Removes a factor by name. Removing an absent factor is a no-op.
    pub fn remove_factor(&mut self, category_name: &str, factor_name: &str) {
        if let Some(index) = self.category_index(category_name) {
            self.categories[index]
                .factors
                .retain(|f| f.name != factor_name);
        }
    }

    /// Updates a factor's weight and description in place.
    pub fn update_factor(
        &mut self,
        category_name: &str,
        factor_name: &str,
        weight: f64,
        description: impl Into<String>,
    ) {
        if let Some(index) = self.category_index(category_name) {
            if let Some(factor) = self.categories[index]
                .factors
                .iter_mut()
                .find(|f| f.name == factor_name)
            {
                factor.weight = weight;
                factor.description = description.into();
            }
        }
    }

    fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
