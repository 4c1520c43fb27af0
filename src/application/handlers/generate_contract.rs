//! GenerateContractHandler - assemble, render, export, snapshot.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::contract::{
    CharterTerms, ContractAssembler, ContractDocument, ContractMetadata, FinancialTerms,
    Parties, SelectedClause, VesselSpecs,
};
use crate::domain::foundation::DomainError;
use crate::domain::risk::RiskAssessmentResult;
use crate::ports::{ContractSnapshot, ContractStore, PdfExporter, RenderedContract, TemplateRenderer};

/// Command with everything a generation pass consumes.
#[derive(Debug, Clone)]
pub struct GenerateContractCommand {
    pub vessel: VesselSpecs,
    pub terms: CharterTerms,
    pub parties: Parties,
    pub financial: FinancialTerms,
    pub metadata: ContractMetadata,
    pub risk: RiskAssessmentResult,
    pub clauses: Vec<SelectedClause>,
}

/// Result of a generation pass: the operator always receives artifacts.
#[derive(Debug, Clone)]
pub struct GenerateContractResult {
    pub document: ContractDocument,
    pub html: String,
    pub filename_stem: String,
    pub pdf: Vec<u8>,
    /// True when the PDF came from the fallback path.
    pub pdf_degraded: bool,
    /// True when the snapshot reached the store.
    pub snapshot_stored: bool,
}

/// Handler for generating a contract from the assembled inputs.
///
/// Rendering and PDF export are best effort: a failure in either degrades
/// to a minimal artifact instead of propagating, so the caller always
/// receives downloadable output. A storage failure is logged and reported
/// on the result without failing the generation.
pub struct GenerateContractHandler {
    renderer: Arc<dyn TemplateRenderer>,
    exporter: Arc<dyn PdfExporter>,
    store: Arc<dyn ContractStore>,
}

impl GenerateContractHandler {
    pub fn new(
        renderer: Arc<dyn TemplateRenderer>,
        exporter: Arc<dyn PdfExporter>,
        store: Arc<dyn ContractStore>,
    ) -> Self {
        Self {
            renderer,
            exporter,
            store,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateContractCommand,
    ) -> Result<GenerateContractResult, DomainError> {
        let document = ContractAssembler::assemble(
            cmd.vessel,
            cmd.terms,
            cmd.parties,
            cmd.financial,
            cmd.risk,
            cmd.clauses,
            cmd.metadata,
        )?;

        let rendered = match self.renderer.render(&document) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(contract_id = %document.contract_id, error = %e, "render failed, using minimal document");
                minimal_rendered(&document)
            }
        };

        let (pdf, pdf_degraded) = match self.exporter.export(&document, &rendered) {
            Ok(pdf) => (pdf, false),
            Err(e) => {
                warn!(contract_id = %document.contract_id, error = %e, "PDF export failed, using fallback");
                (self.exporter.fallback(&document), true)
            }
        };

        let snapshot = ContractSnapshot {
            document: document.clone(),
            html: rendered.html.clone(),
        };
        let snapshot_stored = match self.store.save(&snapshot).await {
            Ok(()) => true,
            Err(e) => {
                warn!(contract_id = %document.contract_id, error = %e, "snapshot store failed");
                false
            }
        };

        info!(
            contract_id = %document.contract_id,
            risk_score = document.risk.overall_score,
            clauses = document.clauses.len(),
            pdf_degraded,
            "contract generated"
        );

        Ok(GenerateContractResult {
            html: rendered.html,
            filename_stem: rendered.filename_stem,
            document,
            pdf,
            pdf_degraded,
            snapshot_stored,
        })
    }
}

/// The minimal document used when the full template fails: at least the
/// contract id and vessel name survive.
fn minimal_rendered(document: &ContractDocument) -> RenderedContract {
    RenderedContract {
        html: format!(
            "<html><body><h1>Yacht Charter Contract</h1>\
             <p>Contract ID: {}</p><p>Vessel: {}</p></body></html>",
            document.contract_id, document.vessel.name
        ),
        filename_stem: format!(
            "contract_v{}_{}",
            document.metadata.version_number, document.contract_id
        ),
    }
}
