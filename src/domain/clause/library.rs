//! The clause library: seed data, custom clauses, and version chains.

use std::collections::HashMap;

use crate::domain::foundation::{ClauseKey, DomainError, ErrorCode, Timestamp};

use super::clause::{Clause, ClauseDraft, ClauseStatus};
use super::seed::seed_clauses;

/// Clauses for one category, grouped by provenance.
///
/// Library originals, branched versions, and custom entries are logically
/// distinct and presented separately by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryClauses<'a> {
    pub library: Vec<&'a Clause>,
    pub versions: Vec<&'a Clause>,
    pub custom: Vec<&'a Clause>,
}

/// Holds the clause library and all user additions.
///
/// Library clauses are immutable seed data. Editing one never mutates it:
/// the edit is appended to the version chain for that (name, category)
/// lineage. Custom clauses are user-owned and may be deleted; library and
/// version entries cannot, they are the audit trail.
#[derive(Debug, Clone)]
pub struct ClauseLibrary {
    library: Vec<Clause>,
    custom: Vec<Clause>,
    versions: HashMap<ClauseKey, Vec<Clause>>,
}

impl ClauseLibrary {
    /// Creates a library populated with the embedded seed clauses.
    pub fn new() -> Self {
        Self {
            library: seed_clauses(),
            custom: Vec::new(),
            versions: HashMap::new(),
        }
    }

    /// Creates a library from explicit seed data (for tests).
    pub fn with_seed(library: Vec<Clause>) -> Self {
        Self {
            library,
            custom: Vec::new(),
            versions: HashMap::new(),
        }
    }

    /// All category names: library categories in seed order, then any
    /// categories introduced by custom clauses.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for clause in self.library.iter().chain(self.custom.iter()) {
            if !names.contains(&clause.category.as_str()) {
                names.push(&clause.category);
            }
        }
        names
    }

    /// Returns the clauses for a category, grouped by provenance.
    pub fn get_by_category(&self, category: &str) -> CategoryClauses<'_> {
        let library: Vec<&Clause> = self
            .library
            .iter()
            .filter(|c| c.category == category)
            .collect();

        let versions: Vec<&Clause> = library
            .iter()
            .flat_map(|original| {
                self.versions
                    .get(&original.key())
                    .map(|chain| chain.iter())
                    .into_iter()
                    .flatten()
            })
            .collect();

        let custom: Vec<&Clause> = self
            .custom
            .iter()
            .filter(|c| c.category == category)
            .collect();

        CategoryClauses {
            library,
            versions,
            custom,
        }
    }

    /// Adds a custom clause.
    ///
    /// Name, category, and content are required; a failing draft persists
    /// nothing. A category not present in the library becomes a new bucket
    /// implicitly - custom categories are first-class.
    pub fn add_custom(&mut self, draft: ClauseDraft) -> Result<Clause, DomainError> {
        for (field, value) in [
            ("name", &draft.name),
            ("category", &draft.category),
            ("content", &draft.content),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(
                    field,
                    format!("Custom clause requires a non-empty {field}"),
                ));
            }
        }

        let clause = Clause {
            name: draft.name,
            category: draft.category,
            content: draft.content,
            version: "1.0".to_string(),
            status: ClauseStatus::Custom,
            metadata: draft.metadata,
            modification_notes: None,
            created_at: Timestamp::now(),
        };
        self.custom.push(clause.clone());

        Ok(clause)
    }

    /// Branches a new version from a library clause.
    ///
    /// The original is implicitly v1.0; the first branch is v2.0, the next
    /// v3.0, and so on. The original entry is never mutated or removed.
    pub fn create_version(
        &mut self,
        key: &ClauseKey,
        new_content: impl Into<String>,
        modification_notes: impl Into<String>,
    ) -> Result<Clause, DomainError> {
        let original = self
            .library
            .iter()
            .find(|c| c.key() == *key)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ClauseNotFound,
                    format!("No library clause '{}' in '{}'", key.name, key.category),
                )
            })?;

        let metadata = original.metadata.clone();
        let chain = self.versions.entry(key.clone()).or_default();
        let version = format!("v{}.0", chain.len() + 2);

        let clause = Clause {
            name: key.name.clone(),
            category: key.category.clone(),
            content: new_content.into(),
            version,
            status: ClauseStatus::Modified,
            metadata,
            modification_notes: Some(modification_notes.into()),
            created_at: Timestamp::now(),
        };

        chain.push(clause.clone());
        Ok(clause)
    }

    /// Returns the version chain for a lineage, oldest first.
    pub fn version_chain(&self, key: &ClauseKey) -> &[Clause] {
        self.versions.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Removes a custom clause. Library clauses and version chains are
    /// unaffected; deleting them is unsupported by design.
    pub fn delete_custom(&mut self, name: &str, category: &str) {
        self.custom
            .retain(|c| !(c.name == name && c.category == category));
    }

    /// Iterates every clause the library knows: seed entries in order,
    /// each followed by its version chain, then custom entries.
    pub fn all_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.library
            .iter()
            .flat_map(|original| {
                std::iter::once(original).chain(
                    self.versions
                        .get(&original.key())
                        .map(|chain| chain.iter())
                        .into_iter()
                        .flatten(),
                )
            })
            .chain(self.custom.iter())
    }
}

impl Default for ClauseLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clause::ClauseMetadata;

    fn payment_key() -> ClauseKey {
        ClauseKey::new("Standard 50/50 Payment Schedule", "Payment Terms")
    }

    fn draft(name: &str, category: &str, content: &str) -> ClauseDraft {
        ClauseDraft {
            name: name.to_string(),
            category: category.to_string(),
            content: content.to_string(),
            metadata: ClauseMetadata::default(),
        }
    }

    #[test]
    fn get_by_category_returns_seed_clauses() {
        let library = ClauseLibrary::new();
        let payment = library.get_by_category("Payment Terms");
        assert_eq!(payment.library.len(), 3);
        assert!(payment.versions.is_empty());
        assert!(payment.custom.is_empty());
    }

    #[test]
    fn add_custom_assigns_version_and_status() {
        let mut library = ClauseLibrary::new();
        let clause = library
            .add_custom(draft("My Terms", "Payment Terms", "Pay promptly."))
            .unwrap();

        assert_eq!(clause.version, "1.0");
        assert_eq!(clause.status, ClauseStatus::Custom);
    }

    #[test]
    fn add_custom_rejects_missing_fields() {
        let mut library = ClauseLibrary::new();

        assert!(library
            .add_custom(draft("", "Payment Terms", "content"))
            .is_err());
        assert!(library.add_custom(draft("Name", "", "content")).is_err());
        assert!(library
            .add_custom(draft("Name", "Payment Terms", "  "))
            .is_err());

        // Nothing partially persisted.
        assert!(library.get_by_category("Payment Terms").custom.is_empty());
    }

    #[test]
    fn custom_category_is_created_implicitly() {
        let mut library = ClauseLibrary::new();
        library
            .add_custom(draft("Pet Policy", "House Rules", "No pets aboard."))
            .unwrap();

        assert!(library.categories().contains(&"House Rules"));
        assert_eq!(library.get_by_category("House Rules").custom.len(), 1);
    }

    #[test]
    fn create_version_numbers_from_v2() {
        let mut library = ClauseLibrary::new();
        let key = payment_key();

        let first = library
            .create_version(&key, "60% upfront, 40% before charter", "rebalanced")
            .unwrap();
        assert_eq!(first.version, "v2.0");
        assert_eq!(first.status, ClauseStatus::Modified);

        let second = library
            .create_version(&key, "70% upfront, 30% before charter", "rebalanced again")
            .unwrap();
        assert_eq!(second.version, "v3.0");
    }

    #[test]
    fn create_version_never_mutates_the_original() {
        let mut library = ClauseLibrary::new();
        let key = payment_key();
        let original_content = library.get_by_category("Payment Terms").library[0]
            .content
            .clone();

        library
            .create_version(&key, "entirely new content", "test")
            .unwrap();

        let after = library.get_by_category("Payment Terms");
        assert_eq!(after.library[0].content, original_content);
        assert_eq!(after.versions.len(), 1);
        assert_eq!(after.versions[0].version, "v2.0");
    }

    #[test]
    fn create_version_requires_a_library_original() {
        let mut library = ClauseLibrary::new();
        let key = ClauseKey::new("Ghost Clause", "Payment Terms");
        let result = library.create_version(&key, "content", "notes");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::ClauseNotFound);
    }

    #[test]
    fn delete_custom_leaves_library_and_versions_alone() {
        let mut library = ClauseLibrary::new();
        let key = payment_key();
        library.create_version(&key, "branched", "notes").unwrap();
        library
            .add_custom(draft("My Terms", "Payment Terms", "content"))
            .unwrap();

        library.delete_custom("My Terms", "Payment Terms");
        // Deleting a library clause's name is a no-op.
        library.delete_custom("Standard 50/50 Payment Schedule", "Payment Terms");

        let payment = library.get_by_category("Payment Terms");
        assert!(payment.custom.is_empty());
        assert_eq!(payment.library.len(), 3);
        assert_eq!(payment.versions.len(), 1);
    }

    #[test]
    fn all_clauses_orders_library_versions_then_custom() {
        let mut library = ClauseLibrary::with_seed(vec![Clause {
            name: "Seed".to_string(),
            category: "Cat".to_string(),
            content: "seed content".to_string(),
            version: "1.0".to_string(),
            status: ClauseStatus::Library,
            metadata: ClauseMetadata::default(),
            modification_notes: None,
            created_at: Timestamp::now(),
        }]);
        library
            .create_version(&ClauseKey::new("Seed", "Cat"), "branch", "n")
            .unwrap();
        library.add_custom(draft("Extra", "Cat", "custom content")).unwrap();

        let statuses: Vec<ClauseStatus> = library.all_clauses().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                ClauseStatus::Library,
                ClauseStatus::Modified,
                ClauseStatus::Custom
            ]
        );
    }
}
