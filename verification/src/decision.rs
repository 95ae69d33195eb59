//! Gate decision handler: the operator's approve/deny step.

use crate::directory::{VisitorDirectory, VisitorRecord};
use crate::error::GateError;
use crate::notification::{DecisionOutcome, Notification};
use crate::state::ActiveVerification;
use serde::{Deserialize, Serialize};
use society_types::{GateParams, Timestamp, VisitorId};
use tracing::info;

/// A recorded operator verdict. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub visitor: VisitorId,
    pub outcome: DecisionOutcome,
    pub timestamp: Timestamp,
}

/// Holds at most one active verification and at most one notification.
#[derive(Debug)]
pub struct GateDecisionHandler {
    active: Option<ActiveVerification>,
    notification: Option<Notification>,
    notification_ttl_secs: u64,
}

impl Default for GateDecisionHandler {
    fn default() -> Self {
        Self::new(GateParams::DEFAULT_NOTIFICATION_TTL_SECS)
    }
}

impl GateDecisionHandler {
    pub fn new(notification_ttl_secs: u64) -> Self {
        Self {
            active: None,
            notification: None,
            notification_ttl_secs,
        }
    }

    /// Present a verified visitor for a decision.
    ///
    /// Replaces any visitor already presented and clears the last notification.
    pub fn present(&mut self, record: &VisitorRecord, now: Timestamp) {
        self.notification = None;
        self.active = Some(ActiveVerification {
            visitor: record.id.clone(),
            presented_at: now,
        });
    }

    pub fn active(&self) -> Option<&ActiveVerification> {
        self.active.as_ref()
    }

    /// Record the operator's verdict on the presented visitor.
    ///
    /// Clears the active verification and raises a notification that expires
    /// after the configured interval. The visitor's status is not changed here.
    pub fn decide(
        &mut self,
        outcome: DecisionOutcome,
        directory: &VisitorDirectory,
        now: Timestamp,
    ) -> Result<(GateDecision, Notification), GateError> {
        let active = self
            .active
            .take()
            .ok_or_else(|| GateError::InvalidState("no visitor awaiting a decision".into()))?;

        let record = directory.get(&active.visitor).ok_or_else(|| {
            GateError::InvalidState(format!("visitor {} is not in the directory", active.visitor))
        })?;

        let notification = Notification::for_decision(outcome, &record.name, now, self.notification_ttl_secs);
        info!(visitor = %record.id, %outcome, "gate decision");

        self.notification = Some(notification.clone());
        let decision = GateDecision {
            visitor: active.visitor,
            outcome,
            timestamp: now,
        };
        Ok((decision, notification))
    }

    /// The current notification, unless it has expired.
    pub fn notification(&self, now: Timestamp) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Drop the notification if it has expired. Returns whether one was dropped.
    pub fn sweep(&mut self, now: Timestamp) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
            return true;
        }
        false
    }

    pub fn dismiss_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Operator dismiss: return to awaiting a scan without deciding.
    pub fn dismiss_verification(&mut self) -> Option<ActiveVerification> {
        self.active.take()
    }
}
