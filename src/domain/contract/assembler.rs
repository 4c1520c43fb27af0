//! Contract assembly - pure aggregation of the generation inputs.

use crate::domain::foundation::{ContractId, DomainError, Timestamp};
use crate::domain::risk::RiskAssessmentResult;

use super::document::{ContractDocument, ContractMetadata, SelectedClause};
use super::terms::{CharterTerms, FinancialTerms, Parties};
use super::vessel::VesselSpecs;

/// Merges vessel, charter, party, financial, risk, and clause input into
/// one immutable `ContractDocument`.
pub struct ContractAssembler;

impl ContractAssembler {
    /// Assembles a contract document.
    ///
    /// Pure aggregation: the only validation is a required vessel name.
    /// Inverted charter dates are tolerated via the terms' one-day minimum
    /// rather than rejected. A fresh contract token is generated per call;
    /// the caller-supplied version number in `metadata` is preserved.
    pub fn assemble(
        vessel: VesselSpecs,
        terms: CharterTerms,
        parties: Parties,
        financial: FinancialTerms,
        risk: RiskAssessmentResult,
        clauses: Vec<SelectedClause>,
        metadata: ContractMetadata,
    ) -> Result<ContractDocument, DomainError> {
        if vessel.name.trim().is_empty() {
            return Err(DomainError::validation(
                "vessel_name",
                "A contract requires a vessel name",
            ));
        }

        Ok(ContractDocument {
            contract_id: ContractId::new(),
            vessel,
            terms,
            parties,
            financial,
            risk,
            clauses,
            metadata,
            generated_at: Timestamp::now(),
        })
    }
}
