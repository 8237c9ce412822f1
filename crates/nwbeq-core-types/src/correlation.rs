//! Correlation identifiers for comparison runs
//!
//! Every top-level comparison gets a [`CheckId`] so that the start, end and
//! mismatch events it emits can be grouped in structured logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single comparison run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(String);

impl CheckId {
    /// Generate a new CheckId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
