//! Application handlers - one use case per module.

mod assess_risk;
mod generate_contract;
mod list_contract_versions;

pub use assess_risk::{AssessRiskCommand, AssessRiskHandler, AssessRiskResult};
pub use generate_contract::{
    GenerateContractCommand, GenerateContractHandler, GenerateContractResult,
};
pub use list_contract_versions::ListContractVersionsHandler;
