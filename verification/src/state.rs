//! Gate flow state.

use serde::{Deserialize, Serialize};
use society_types::{Timestamp, VisitorId};

/// Where the gate screen is in its cycle.
///
/// Lookups are synchronous, so the gate moves from `Idle` straight to
/// `Verified` on a successful match; there is no observable in-between state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatePhase {
    /// Awaiting a scan or a typed code.
    Idle,
    /// A matched visitor awaits the operator's decision.
    Verified,
}

/// The visitor currently presented to the operator.
///
/// Holds the id only; the record itself is read from the directory, so
/// status changes are always visible to the display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveVerification {
    pub visitor: VisitorId,
    pub presented_at: Timestamp,
}
