//! Clause records and their metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ClauseKey, ClauseRating, Timestamp};

/// Provenance of a clause record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ClauseStatus {
    /// Immutable seed data shipped with the library.
    Library,
    /// Fully user-owned; mutable and deletable.
    Custom,
    /// A branched revision of a library clause.
    Modified,
}

/// Where a selected clause came from, recorded on the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseSource {
    Library,
    Custom,
    Version,
    AiSuggestion,
}

impl fmt::Display for ClauseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClauseSource::Library => "From Library",
            ClauseSource::Custom => "Custom",
            ClauseSource::Version => "Version",
            ClauseSource::AiSuggestion => "AI Suggested",
        };
        write!(f, "{}", s)
    }
}

/// Descriptive metadata carried by every clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClauseMetadata {
    #[serde(default)]
    pub jurisdiction: Vec<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub complexity: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub rating: ClauseRating,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub legal_notes: String,
    #[serde(default)]
    pub applicable_to: Vec<String>,
}

/// A reusable block of contract text, organized by category.
///
/// Library clauses are immutable originals; editing one branches a new
/// `Modified` record into the version chain keyed by (name, category).
/// Custom clauses live outside any chain and are directly mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub name: String,
    pub category: String,
    pub content: String,
    /// Monotonically increasing per lineage: the library original is
    /// implicitly v1.0, branches start at v2.0.
    pub version: String,
    pub status: ClauseStatus,
    #[serde(default)]
    pub metadata: ClauseMetadata,
    /// Free-text note recorded when a version is branched.
    #[serde(default)]
    pub modification_notes: Option<String>,
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,
}

impl Clause {
    /// The lineage key for this clause.
    pub fn key(&self) -> ClauseKey {
        ClauseKey::new(self.name.clone(), self.category.clone())
    }
}

/// Input for creating a custom clause; validated by the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseDraft {
    pub name: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub metadata: ClauseMetadata,
}
