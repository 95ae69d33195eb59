//! Transient messages raised for the gate operator.

use crate::error::GateError;
use serde::{Deserialize, Serialize};
use society_types::Timestamp;
use std::fmt;

/// The operator's verdict on a verified visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionOutcome {
    Approved,
    Denied,
}

impl fmt::Display for DecisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => f.write_str("Approved"),
            Self::Denied => f.write_str("Denied"),
        }
    }
}

/// Result toast of a gate decision. Expires at `expires_at` unless dismissed first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub outcome: DecisionOutcome,
    pub message: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Notification {
    pub fn for_decision(outcome: DecisionOutcome, visitor_name: &str, now: Timestamp, ttl_secs: u64) -> Self {
        Self {
            outcome,
            message: format!("Entry {outcome} for {visitor_name}"),
            issued_at: now,
            expires_at: now.plus_secs(ttl_secs),
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    /// Seconds left before the notification dismisses itself.
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        self.expires_at.as_secs().saturating_sub(now.as_secs())
    }
}

/// Inline error message on the gate screen.
///
/// Lookup failures carry an expiry; a capture failure has none and stays
/// until the operator retries or enters a code by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub raised_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

impl Alert {
    pub fn from_error(err: &GateError, now: Timestamp, ttl_secs: u64) -> Self {
        let expires_at = if err.is_persistent() {
            None
        } else {
            Some(now.plus_secs(ttl_secs))
        };
        Self {
            message: err.to_string(),
            raised_at: now,
            expires_at,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.expires_at.is_none()
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}
