//! The operator workspace - explicit session state.
//!
//! Everything an interactive session mutates lives here and is passed
//! into operations explicitly: the risk configuration, the clause
//! library, in-progress factor selections, clauses picked for the next
//! contract, and the browse view state. Nothing is read from ambient
//! globals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::clause::ClauseLibrary;
use crate::domain::contract::SelectedClause;
use crate::domain::risk::{
    FactorSelections, MitigationStrategy, RiskEngine, DEFAULT_CATALOG,
};

/// Per-item browse state, decoupled from the clause records themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseItemState {
    pub selected: bool,
    pub expanded: bool,
}

/// Key for browse view state: one entry per displayed clause revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClauseViewKey {
    pub name: String,
    pub category: String,
    pub version: String,
}

/// Request-scoped session state for a single active editor.
#[derive(Debug, Clone)]
pub struct Workspace {
    risk_engine: RiskEngine,
    clause_library: ClauseLibrary,
    factor_selections: FactorSelections,
    selected_clauses: Vec<SelectedClause>,
    custom_mitigations: Vec<MitigationStrategy>,
    selected_mitigations: Vec<String>,
    view_state: HashMap<ClauseViewKey, ClauseItemState>,
}

impl Workspace {
    /// Creates a workspace with default risk configuration and the seed
    /// clause library.
    pub fn new() -> Self {
        Self {
            risk_engine: RiskEngine::new(),
            clause_library: ClauseLibrary::new(),
            factor_selections: FactorSelections::new(),
            selected_clauses: Vec::new(),
            custom_mitigations: Vec::new(),
            selected_mitigations: Vec::new(),
            view_state: HashMap::new(),
        }
    }

    pub fn risk_engine(&self) -> &RiskEngine {
        &self.risk_engine
    }

    pub fn risk_engine_mut(&mut self) -> &mut RiskEngine {
        &mut self.risk_engine
    }

    pub fn clause_library(&self) -> &ClauseLibrary {
        &self.clause_library
    }

    pub fn clause_library_mut(&mut self) -> &mut ClauseLibrary {
        &mut self.clause_library
    }

    // ───────────────────────────────────────────────────────────────
    // Factor selections (ephemeral per assessment)
    // ───────────────────────────────────────────────────────────────

    pub fn factor_selections(&self) -> &FactorSelections {
        &self.factor_selections
    }

    /// Replaces the current selections wholesale, as submitted by the form.
    pub fn set_factor_selections(&mut self, selections: FactorSelections) {
        self.factor_selections = selections;
    }

    pub fn select_factor(&mut self, category: impl Into<String>, factor: impl Into<String>) {
        self.factor_selections
            .entry(category.into())
            .or_default()
            .insert(factor.into());
    }

    pub fn deselect_factor(&mut self, category: &str, factor: &str) {
        if let Some(set) = self.factor_selections.get_mut(category) {
            set.remove(factor);
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Selected clauses (consumed at generation time)
    // ───────────────────────────────────────────────────────────────

    pub fn selected_clauses(&self) -> &[SelectedClause] {
        &self.selected_clauses
    }

    pub fn add_selected_clause(&mut self, clause: SelectedClause) {
        self.selected_clauses.push(clause);
    }

    /// Removes one selected clause by position. Out-of-range indexes are
    /// ignored (the list may have shifted under a stale view).
    pub fn remove_selected_clause(&mut self, index: usize) {
        if index < self.selected_clauses.len() {
            self.selected_clauses.remove(index);
        }
    }

    pub fn clear_selected_clauses(&mut self) {
        self.selected_clauses.clear();
    }

    /// Takes the selection for contract assembly, leaving the list empty.
    pub fn take_selected_clauses(&mut self) -> Vec<SelectedClause> {
        std::mem::take(&mut self.selected_clauses)
    }

    // ───────────────────────────────────────────────────────────────
    // Mitigations
    // ───────────────────────────────────────────────────────────────

    /// The full strategy catalog: built-in entries then custom additions.
    pub fn mitigation_catalog(&self) -> Vec<MitigationStrategy> {
        DEFAULT_CATALOG
            .iter()
            .cloned()
            .chain(self.custom_mitigations.iter().cloned())
            .collect()
    }

    pub fn add_custom_mitigation(&mut self, strategy: MitigationStrategy) {
        self.custom_mitigations.push(strategy);
    }

    /// Strategy names the operator picked for the next contract. Stored on
    /// the session, not on the strategy objects.
    pub fn selected_mitigations(&self) -> &[String] {
        &self.selected_mitigations
    }

    pub fn set_selected_mitigations(&mut self, names: Vec<String>) {
        self.selected_mitigations = names;
    }

    // ───────────────────────────────────────────────────────────────
    // Browse view state
    // ───────────────────────────────────────────────────────────────

    pub fn view_state(&self, key: &ClauseViewKey) -> ClauseItemState {
        self.view_state.get(key).copied().unwrap_or_default()
    }

    pub fn toggle_expanded(&mut self, key: ClauseViewKey) {
        let state = self.view_state.entry(key).or_default();
        state.expanded = !state.expanded;
    }

    pub fn toggle_selected(&mut self, key: ClauseViewKey) {
        let state = self.view_state.entry(key).or_default();
        state.selected = !state.selected;
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
