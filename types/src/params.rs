//! Gate parameters: timings and the two behavioural switches of the gate flow.

use serde::{Deserialize, Serialize};

/// Which directory records the verifier considers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    /// Only records in the active pre-authorization set (`Upcoming`).
    #[default]
    UpcomingOnly,
    /// Every record, whatever its status. Lets the gate re-admit visitors
    /// who are already inside or have left.
    AllRecords,
}

/// What an operator decision does besides notifying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPolicy {
    /// Decisions only drive a notification; visitor status is left alone.
    #[default]
    NotifyOnly,
    /// An approval also moves the visitor to `Inside`.
    RecordEntry,
}

/// Parameters of a gate session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateParams {
    /// Seconds before a decision notification dismisses itself.
    pub notification_ttl_secs: u64,

    /// Seconds before a lookup error message dismisses itself.
    pub alert_ttl_secs: u64,

    pub match_scope: MatchScope,

    pub decision_policy: DecisionPolicy,
}

impl GateParams {
    pub const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 3;
    pub const DEFAULT_ALERT_TTL_SECS: u64 = 3;
}

impl Default for GateParams {
    fn default() -> Self {
        Self {
            notification_ttl_secs: Self::DEFAULT_NOTIFICATION_TTL_SECS,
            alert_ttl_secs: Self::DEFAULT_ALERT_TTL_SECS,
            match_scope: MatchScope::default(),
            decision_policy: DecisionPolicy::default(),
        }
    }
}
