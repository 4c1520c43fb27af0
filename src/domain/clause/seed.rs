//! Embedded clause library seed data.

use once_cell::sync::Lazy;

use super::clause::Clause;

const SEED_YAML: &str = include_str!("seed_clauses.yaml");

static SEED: Lazy<Vec<Clause>> = Lazy::new(|| {
    serde_yaml::from_str(SEED_YAML).expect("embedded clause seed data must parse")
});

/// Returns a fresh copy of the built-in library clauses.
pub fn seed_clauses() -> Vec<Clause> {
    SEED.clone()
}
