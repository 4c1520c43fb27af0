//! Foundation value objects shared across the domain.

mod errors;
mod ids;
mod rating;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClauseKey, ContractId};
pub use rating::ClauseRating;
pub use timestamp::Timestamp;
