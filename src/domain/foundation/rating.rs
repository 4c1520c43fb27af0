//! Clause quality rating value object (0.0 to 5.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A clause rating between 0.0 and 5.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseRating(f64);

impl ClauseRating {
    /// Unrated.
    pub const UNRATED: Self = Self(0.0);

    /// Creates a new rating, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 5.0))
    }

    /// Creates a rating, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=5.0).contains(&value) {
            return Err(ValidationError::out_of_range("rating", 0.0, 5.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Search-relevance bonus for highly rated clauses: 5 at >= 4.5,
    /// 3 at >= 4.0, otherwise 0.
    pub fn relevance_bonus(&self) -> u32 {
        if self.0 >= 4.5 {
            5
        } else if self.0 >= 4.0 {
            3
        } else {
            0
        }
    }
}

impl Default for ClauseRating {
    fn default() -> Self {
        Self::UNRATED
    }
}

impl fmt::Display for ClauseRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
