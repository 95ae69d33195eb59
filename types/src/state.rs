//! State enums for visitor records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a visitor is in their visit lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitorStatus {
    /// Pre-authorized by a resident; not yet at the gate.
    Upcoming,
    /// Admitted and currently on the premises.
    Inside,
    /// Visit finished.
    Exited,
}

impl VisitorStatus {
    /// Whether the record belongs to the active pre-authorization set.
    pub fn is_pre_authorized(&self) -> bool {
        matches!(self, Self::Upcoming)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Inside => "Inside",
            Self::Exited => "Exited",
        }
    }
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a visit, read from the leading word of its purpose label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurposeKind {
    Guest,
    Delivery,
    Service,
    Family,
    Other,
}

impl PurposeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Delivery => "delivery",
            Self::Service => "service",
            Self::Family => "family",
            Self::Other => "other",
        }
    }
}

impl FromStr for PurposeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "delivery" => Ok(Self::Delivery),
            "service" => Ok(Self::Service),
            "family" => Ok(Self::Family),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown visit purpose: {other}")),
        }
    }
}

/// Declared purpose of a visit, as the resident wrote it.
///
/// The label is kept verbatim ("Family Guest" stays "Family Guest"); the
/// [`PurposeKind`] is derived from its leading word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitPurpose(String);

impl VisitPurpose {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    pub fn kind(&self) -> PurposeKind {
        let lead = self.0.split_whitespace().next().unwrap_or_default();
        lead.parse().unwrap_or(PurposeKind::Other)
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Default for VisitPurpose {
    fn default() -> Self {
        Self::new("Guest")
    }
}

impl From<&str> for VisitPurpose {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VisitPurpose {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for VisitPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
