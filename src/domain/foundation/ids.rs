//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Short uppercase token identifying a generated contract.
///
/// Eight hex characters drawn from a fresh UUID, uppercased. Stable for
/// the lifetime of a contract snapshot and used as the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    /// Generates a new random contract token.
    pub fn new() -> Self {
        let raw = Uuid::new_v4().simple().to_string();
        Self(raw[..8].to_uppercase())
    }

    /// Wraps an existing token, e.g. when loading a stored snapshot.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into().to_uppercase())
    }

    /// Returns the token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key identifying a clause lineage: the (name, category) pair.
///
/// A library clause and every version branched from it share one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClauseKey {
    pub name: String,
    pub category: String,
}

impl ClauseKey {
    /// Creates a key from a clause name and category.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_id_is_eight_uppercase_chars() {
        let id = ContractId::new();
        assert_eq!(id.as_str().len(), 8);
        assert_eq!(id.as_str(), id.as_str().to_uppercase());
    }

    #[test]
    fn contract_id_new_generates_unique_tokens() {
        let a = ContractId::new();
        let b = ContractId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn contract_id_from_token_uppercases() {
        let id = ContractId::from_token("ab12cd34");
        assert_eq!(id.as_str(), "AB12CD34");
    }

    #[test]
    fn clause_key_displays_name_and_category() {
        let key = ClauseKey::new("Standard Payment Schedule", "Payment Terms");
        assert_eq!(
            format!("{}", key),
            "Standard Payment Schedule_Payment Terms"
        );
    }

    #[test]
    fn clause_key_equality_covers_both_fields() {
        let a = ClauseKey::new("Clause", "Payment Terms");
        let b = ClauseKey::new("Clause", "Cancellation Policy");
        assert_ne!(a, b);
    }
}
