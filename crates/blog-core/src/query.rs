//! Text matching policy shared by lookups and searches
//!
//! | Operation class            | Mode       | Result      |
//! |----------------------------|------------|-------------|
//! | resolve post by title      | `Exact`    | first match |
//! | remove post by title       | `Exact`    | first match |
//! | remove posts by author     | `Exact`    | all matches |
//! | search posts / comments    | `Contains` | all matches |
//! | remove comment by author   | `Exact`    | first match |
//! | edit comment by author     | `Exact`    | all matches |
//! | find comment by author     | `Contains` | first match |
//!
//! All comparisons are case-sensitive.

use serde::{Deserialize, Serialize};

/// How a field is compared against a needle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Whole-field equality
    Exact,
    /// Substring containment
    Contains,
}

impl MatchMode {
    /// Check a candidate field against the needle
    pub fn matches(self, candidate: &str, needle: &str) -> bool {
        match self {
            MatchMode::Exact => candidate == needle,
            MatchMode::Contains => candidate.contains(needle),
        }
    }
}

/// Post field scanned by a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostField {
    Title,
    Author,
    Body,
}

/// Comment field scanned by a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentField {
    Author,
    Body,
}
