//! Clause search: relevance scoring, snippet extraction, and filtering.

use serde::{Deserialize, Serialize};

use super::clause::Clause;
use super::library::ClauseLibrary;

/// Default snippet length in characters.
pub const SNIPPET_MAX_LEN: usize = 150;

/// How far before the earliest match a snippet window begins.
const SNIPPET_LEAD: usize = 50;

/// Pre-filters applied before relevance scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub jurisdiction: Option<String>,
    pub complexity: Option<String>,
    pub language: Option<String>,
    pub min_usage: Option<u32>,
    pub min_rating: Option<f64>,
}

impl SearchFilters {
    fn matches(&self, clause: &Clause) -> bool {
        if let Some(category) = &self.category {
            if clause.category != *category {
                return false;
            }
        }
        if let Some(jurisdiction) = &self.jurisdiction {
            if !clause.metadata.jurisdiction.contains(jurisdiction) {
                return false;
            }
        }
        if let Some(complexity) = &self.complexity {
            if clause.metadata.complexity != *complexity {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if clause.metadata.language != *language {
                return false;
            }
        }
        if let Some(min_usage) = self.min_usage {
            if clause.metadata.usage_count < min_usage {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if clause.metadata.rating.value() < min_rating {
                return false;
            }
        }
        true
    }
}

/// One matched clause with its score and a content snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub clause: Clause,
    pub relevance: u32,
    pub snippet: String,
}

/// Scores a clause against a query, 0 to 100.
///
/// The full query substring scores against name (+50), category (+30),
/// legal notes (+15), and the joined applicable-to list (+20); each
/// whitespace token additionally scores against content (+10) and name
/// (+20). Highly rated clauses get a small bonus, but only once some
/// textual signal exists - a clause with no textual match scores 0 and is
/// excluded from results regardless of rating.
pub fn relevance(query: &str, clause: &Clause) -> u32 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return 0;
    }

    let name = clause.name.to_lowercase();
    let content = clause.content.to_lowercase();
    let category = clause.category.to_lowercase();
    let notes = clause.metadata.legal_notes.to_lowercase();
    let applicable = clause.metadata.applicable_to.join(" ").to_lowercase();

    let mut score: u32 = 0;

    if name.contains(&query) {
        score += 50;
    }
    for token in query.split_whitespace() {
        if content.contains(token) {
            score += 10;
        }
        if name.contains(token) {
            score += 20;
        }
    }
    if category.contains(&query) {
        score += 30;
    }
    if notes.contains(&query) {
        score += 15;
    }
    if applicable.contains(&query) {
        score += 20;
    }

    if score == 0 {
        return 0;
    }

    score += clause.metadata.rating.relevance_bonus();
    score.min(100)
}

/// Extracts a display snippet around the earliest query-token match.
///
/// Without a match, the content is truncated from the start. With one, the
/// window begins `SNIPPET_LEAD` characters before the match (clamped to
/// the content start), extends to `max_len` characters, and is trimmed to
/// word boundaries when it neither starts at position 0 nor ends at the
/// content end.
pub fn snippet(query: &str, content: &str, max_len: usize) -> String {
    let lower = content.to_lowercase();
    let earliest = query
        .to_lowercase()
        .split_whitespace()
        .filter_map(|token| lower.find(token))
        .min();

    let Some(pos) = earliest else {
        let end = char_floor(content, max_len.min(content.len()));
        return content[..end].to_string();
    };

    // Lowercasing can shift byte offsets for some scripts; clamp back onto
    // a valid boundary of the original content.
    let pos = char_floor(content, pos.min(content.len()));
    let mut start = char_floor(content, pos.saturating_sub(SNIPPET_LEAD));
    let mut end = char_floor(content, (start + max_len).min(content.len()));

    if start > 0 {
        if let Some(space) = content[start..end].find(' ') {
            start += space + 1;
        }
    }
    if end < content.len() {
        if let Some(space) = content[start..end].rfind(' ') {
            end = start + space;
        }
    }

    content[start..end].to_string()
}

fn char_floor(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

impl ClauseLibrary {
    /// Searches library, version, and custom entries uniformly.
    ///
    /// Filters are applied before scoring; zero-relevance clauses are
    /// excluded; results are ordered by relevance descending with catalog
    /// insertion order preserved on ties.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = self
            .all_clauses()
            .filter(|clause| filters.matches(clause))
            .filter_map(|clause| {
                let score = relevance(query, clause);
                if score == 0 {
                    return None;
                }
                Some(SearchResult {
                    snippet: snippet(query, &clause.content, SNIPPET_MAX_LEN),
                    relevance: score,
                    clause: clause.clone(),
                })
            })
            .collect();

        // Stable sort keeps insertion order for equal scores.
        results.sort_by_key(|r| std::cmp::Reverse(r.relevance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clause::{ClauseDraft, ClauseMetadata, ClauseStatus};
    use crate::domain::foundation::{ClauseKey, ClauseRating, Timestamp};

    fn payment_clause() -> Clause {
        Clause {
            name: "Standard 50/50 Payment Schedule".to_string(),
            category: "Payment Terms".to_string(),
            content: "Fifty percent (50%) of the total charter fee shall be paid as a deposit \
                      upon execution of this agreement. The remaining fifty percent (50%) shall \
                      be paid no later than thirty (30) days prior to the charter commencement \
                      date."
                .to_string(),
            version: "2.1".to_string(),
            status: ClauseStatus::Library,
            metadata: ClauseMetadata {
                rating: ClauseRating::new(4.8),
                legal_notes: "Compliant with EU Payment Services Directive and US maritime law"
                    .to_string(),
                applicable_to: vec![
                    "Bareboat".to_string(),
                    "Crewed".to_string(),
                    "Corporate".to_string(),
                ],
                ..Default::default()
            },
            modification_notes: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn full_name_match_scores_at_least_fifty() {
        let clause = payment_clause();
        let score = relevance("payment schedule", &clause);
        assert!(score >= 50, "got {score}");
    }

    #[test]
    fn relevance_is_bounded_to_one_hundred() {
        let clause = payment_clause();
        // A query hitting name, tokens, category, notes, and applicable_to.
        let score = relevance("payment", &clause);
        assert!(score <= 100);
    }

    #[test]
    fn unrelated_query_scores_zero_despite_high_rating() {
        let clause = payment_clause();
        assert_eq!(relevance("helicopter refit", &clause), 0);
    }

    #[test]
    fn rating_bonus_applies_once_text_matches() {
        let mut low = payment_clause();
        low.metadata.rating = ClauseRating::new(3.0);
        let high = payment_clause();

        let base = relevance("deposit", &low);
        let boosted = relevance("deposit", &high);
        assert_eq!(boosted, base + 5);
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(relevance("   ", &payment_clause()), 0);
    }

    #[test]
    fn snippet_contains_the_match() {
        let clause = payment_clause();
        let snippet = snippet("fifty percent", &clause.content, SNIPPET_MAX_LEN);
        assert!(snippet.to_lowercase().contains("percent"));
        assert!(snippet.chars().count() <= SNIPPET_MAX_LEN);
    }

    #[test]
    fn snippet_without_match_truncates_from_start() {
        let clause = payment_clause();
        let snippet = snippet("zzz", &clause.content, 20);
        assert_eq!(snippet, &clause.content[..20]);
    }

    #[test]
    fn snippet_never_panics_on_short_content() {
        assert_eq!(snippet("anything", "short", SNIPPET_MAX_LEN), "short");
        assert_eq!(snippet("short", "short", SNIPPET_MAX_LEN), "short");
    }

    #[test]
    fn snippet_trims_partial_leading_word() {
        let content = "abcdefghij ".repeat(20);
        // Match deep enough that the window starts mid-word.
        let result = snippet("abcdefghij", &content[5..], SNIPPET_MAX_LEN);
        assert!(result.chars().count() <= SNIPPET_MAX_LEN);
    }

    #[test]
    fn search_excludes_zero_relevance_clauses() {
        let library = ClauseLibrary::new();
        let results = library.search("qqqqzzzz", &SearchFilters::default());
        assert!(results.is_empty());
    }

    #[test]
    fn search_orders_by_relevance_descending() {
        let library = ClauseLibrary::new();
        let results = library.search("payment schedule", &SearchFilters::default());

        assert!(!results.is_empty());
        assert_eq!(results[0].clause.name, "Standard 50/50 Payment Schedule");
        for window in results.windows(2) {
            assert!(window[0].relevance >= window[1].relevance);
        }
    }

    #[test]
    fn search_covers_versions_and_custom_entries() {
        let mut library = ClauseLibrary::new();
        library
            .create_version(
                &ClauseKey::new("Standard 50/50 Payment Schedule", "Payment Terms"),
                "Sixty percent due upon signature, forty percent before embarkation.",
                "rebalanced",
            )
            .unwrap();
        library
            .add_custom(ClauseDraft {
                name: "Crypto Settlement Rider".to_string(),
                category: "Payment Terms".to_string(),
                content: "Settlement in digital assets requires prior escrow agreement."
                    .to_string(),
                metadata: ClauseMetadata::default(),
            })
            .unwrap();

        let results = library.search("settlement escrow", &SearchFilters::default());
        assert!(results
            .iter()
            .any(|r| r.clause.name == "Crypto Settlement Rider"));

        let results = library.search("embarkation", &SearchFilters::default());
        assert!(results
            .iter()
            .any(|r| r.clause.status == ClauseStatus::Modified));
    }

    #[test]
    fn filters_apply_before_scoring() {
        let library = ClauseLibrary::new();

        let unfiltered = library.search("payment", &SearchFilters::default());
        assert!(!unfiltered.is_empty());

        let filtered = library.search(
            "payment",
            &SearchFilters {
                category: Some("Cancellation Policy".to_string()),
                ..Default::default()
            },
        );
        assert!(filtered.iter().all(|r| r.clause.category == "Cancellation Policy"));

        let none = library.search(
            "payment",
            &SearchFilters {
                min_usage: Some(1_000_000),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn min_rating_filter_excludes_low_rated() {
        let library = ClauseLibrary::new();
        let results = library.search(
            "payment",
            &SearchFilters {
                min_rating: Some(4.6),
                ..Default::default()
            },
        );
        assert!(results
            .iter()
            .all(|r| r.clause.metadata.rating.value() >= 4.6));
    }
}
