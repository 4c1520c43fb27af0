//! AssessRiskHandler - computes an assessment and ranks mitigations.

use crate::domain::risk::{
    FactorSelections, MitigationRecommender, RankedMitigation, RiskAssessmentResult,
};
use crate::domain::session::Workspace;

/// Command carrying the submitted factor selections.
#[derive(Debug, Clone)]
pub struct AssessRiskCommand {
    pub selections: FactorSelections,
    /// Override for the recommended-mitigation count; defaults to the
    /// score-derived count.
    pub max_recommendations: Option<usize>,
}

/// Result of an assessment pass.
#[derive(Debug, Clone)]
pub struct AssessRiskResult {
    pub assessment: RiskAssessmentResult,
    pub mitigations: Vec<RankedMitigation>,
}

/// Runs the full assessment pass: score, classify, recommend.
pub struct AssessRiskHandler;

impl AssessRiskHandler {
    /// Stores the selections on the workspace and computes the result.
    pub fn handle(workspace: &mut Workspace, cmd: AssessRiskCommand) -> AssessRiskResult {
        workspace.set_factor_selections(cmd.selections);

        let assessment = workspace
            .risk_engine()
            .compute(workspace.factor_selections());

        let catalog = workspace.mitigation_catalog();
        let mitigations = MitigationRecommender::recommend(
            assessment.overall_score,
            &catalog,
            cmd.max_recommendations,
        );

        AssessRiskResult {
            assessment,
            mitigations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::RiskLevel;

    fn selections(pairs: &[(&str, &[&str])]) -> FactorSelections {
        pairs
            .iter()
            .map(|(category, factors)| {
                (
                    category.to_string(),
                    factors.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn assessment_pass_scores_and_recommends() {
        let mut workspace = Workspace::new();
        let result = AssessRiskHandler::handle(
            &mut workspace,
            AssessRiskCommand {
                selections: selections(&[
                    ("Operational", &["Remote Destinations"]),
                    ("Financial", &["High Value Charter"]),
                ]),
                max_recommendations: None,
            },
        );

        assert!((result.assessment.overall_score - 0.61).abs() < 1e-9);
        assert_eq!(result.assessment.risk_level, RiskLevel::Low);
        // max_count = 1 at this score, displayed = 3.
        assert_eq!(result.mitigations.len(), 3);
        assert_eq!(result.mitigations.iter().filter(|m| m.recommended).count(), 1);
    }

    #[test]
    fn selections_persist_on_the_workspace() {
        let mut workspace = Workspace::new();
        AssessRiskHandler::handle(
            &mut workspace,
            AssessRiskCommand {
                selections: selections(&[("Client", &["First Time Charterer"])]),
                max_recommendations: None,
            },
        );

        assert!(workspace
            .factor_selections()
            .get("Client")
            .is_some_and(|s| s.contains("First Time Charterer")));
    }

    #[test]
    fn explicit_max_count_overrides_the_default() {
        let mut workspace = Workspace::new();
        let result = AssessRiskHandler::handle(
            &mut workspace,
            AssessRiskCommand {
                selections: FactorSelections::new(),
                max_recommendations: Some(3),
            },
        );

        assert_eq!(result.mitigations.len(), 5);
        assert_eq!(result.mitigations.iter().filter(|m| m.recommended).count(), 3);
    }
}
