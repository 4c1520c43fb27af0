//! Request/response types for clause endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::clause::{
    CategoryClauses, Clause, ClauseDraft, ClauseMetadata, ClauseSource, SearchFilters,
    SearchResult,
};
use crate::domain::contract::SelectedClause;

/// Category browse query.
#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub category: String,
}

/// Category contents grouped by provenance.
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub library: Vec<Clause>,
    pub versions: Vec<Clause>,
    pub custom: Vec<Clause>,
}

impl BrowseResponse {
    /// Clones the borrowed groups into an owned response.
    pub fn from_category(clauses: CategoryClauses<'_>) -> Self {
        Self {
            library: clauses.library.into_iter().cloned().collect(),
            versions: clauses.versions.into_iter().cloned().collect(),
            custom: clauses.custom.into_iter().cloned().collect(),
        }
    }
}

/// Search payload: query text plus pre-filters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
}

/// Ranked search results.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
}

/// Custom clause payload.
#[derive(Debug, Deserialize)]
pub struct CustomClauseRequest {
    pub name: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub metadata: ClauseMetadata,
}

impl From<CustomClauseRequest> for ClauseDraft {
    fn from(request: CustomClauseRequest) -> Self {
        ClauseDraft {
            name: request.name,
            category: request.category,
            content: request.content,
            metadata: request.metadata,
        }
    }
}

/// Identifies a custom clause or version lineage.
#[derive(Debug, Deserialize)]
pub struct ClauseKeyQuery {
    pub name: String,
    pub category: String,
}

/// New version payload.
#[derive(Debug, Deserialize)]
pub struct CreateVersionRequest {
    pub name: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub modification_notes: String,
}

/// Clause picked for the in-progress contract.
#[derive(Debug, Deserialize)]
pub struct SelectClauseRequest {
    pub name: String,
    pub content: String,
    pub category: String,
    pub source: ClauseSource,
}

impl From<SelectClauseRequest> for SelectedClause {
    fn from(request: SelectClauseRequest) -> Self {
        SelectedClause {
            name: request.name,
            content: request.content,
            category: request.category,
            source: request.source,
        }
    }
}

/// The current contract selection.
#[derive(Debug, Serialize)]
pub struct SelectedClausesResponse {
    pub selected: Vec<SelectedClause>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_defaults_filters() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"query": "payment"}"#).unwrap();
        assert_eq!(request.query, "payment");
        assert!(request.filters.category.is_none());
    }

    #[test]
    fn select_request_converts_to_selected_clause() {
        let request: SelectClauseRequest = serde_json::from_str(
            r#"{"name": "N", "content": "C", "category": "Cat", "source": "library"}"#,
        )
        .unwrap();
        let selected: SelectedClause = request.into();
        assert_eq!(selected.source, ClauseSource::Library);
    }
}
