//! Core type definitions for blogstore

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Surrogate identifier for a post
///
/// Never used by the text-keyed operations; titles stay the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new PostId
    pub fn new() -> Self {
        PostId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(PostId(Uuid::parse_str(s)?))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
