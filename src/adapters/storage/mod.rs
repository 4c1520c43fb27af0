//! Snapshot storage adapters.

mod file_contract_store;
mod in_memory_contract_store;

pub use file_contract_store::FileContractStore;
pub use in_memory_contract_store::InMemoryContractStore;
