//! Visitor identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a visitor record, unique within a directory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(String);

impl VisitorId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An identifier is usable when it carries at least one non-blank character.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VisitorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VisitorId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
