//! Gate session: connects capture, verification and decisions into the gate
//! operator's screen state.

use crate::capture::{CaptureDevice, CaptureSession, CodeSource};
use crate::decision::{GateDecision, GateDecisionHandler};
use crate::directory::{VisitorDirectory, VisitorRecord};
use crate::error::GateError;
use crate::notification::{Alert, DecisionOutcome, Notification};
use crate::state::GatePhase;
use crate::stats::{GateCounter, GateStats};
use crate::verifier::AccessVerifier;
use society_types::{DecisionPolicy, GateParams, Timestamp, VisitorId, VisitorStatus};
use tracing::{info, warn};

/// Events emitted by the session for the display surface to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    /// A code matched; the visitor awaits a decision.
    VisitorVerified { visitor: VisitorId, source: CodeSource },
    /// A submitted code was blank or matched nobody.
    LookupFailed { reason: String },
    /// The capture device could not be started.
    CaptureUnavailable { reason: String },
    /// The operator approved or denied a visitor.
    DecisionRecorded(GateDecision),
    /// An approval moved the visitor to `Inside` (`RecordEntry` policy only).
    EntryRecorded { visitor: VisitorId },
    /// The operator dismissed a verified visitor without deciding.
    VerificationDismissed { visitor: VisitorId },
    NotificationExpired,
    AlertExpired,
}

/// All state of one gate screen.
pub struct GateSession {
    directory: VisitorDirectory,
    verifier: AccessVerifier,
    decisions: GateDecisionHandler,
    params: GateParams,
    alert: Option<Alert>,
    stats: GateStats,
    /// Pending events for the display surface.
    pending_events: Vec<GateEvent>,
}

impl GateSession {
    pub fn new(directory: VisitorDirectory, params: GateParams) -> Self {
        Self {
            directory,
            verifier: AccessVerifier::new(params.match_scope),
            decisions: GateDecisionHandler::new(params.notification_ttl_secs),
            params,
            alert: None,
            stats: GateStats::new(),
            pending_events: Vec::new(),
        }
    }

    pub fn directory(&self) -> &VisitorDirectory {
        &self.directory
    }

    pub fn params(&self) -> &GateParams {
        &self.params
    }

    pub fn stats(&self) -> &GateStats {
        &self.stats
    }

    /// Verify a code and, on a match, present the visitor.
    ///
    /// A failed lookup raises a timed alert and leaves the presented visitor
    /// (if any) and the directory as they were.
    pub fn submit_code(
        &mut self,
        code: &str,
        source: CodeSource,
        now: Timestamp,
    ) -> Result<&VisitorRecord, GateError> {
        self.stats.record(GateCounter::CodesSubmitted);

        match self.verifier.verify(&self.directory, code) {
            Ok(record) => {
                info!(visitor = %record.id, name = %record.name, %source, "visitor verified");
                self.decisions.present(record, now);
                self.alert = None;
                self.stats.record(GateCounter::Matched);
                self.pending_events.push(GateEvent::VisitorVerified {
                    visitor: record.id.clone(),
                    source,
                });
                Ok(record)
            }
            Err(err) => {
                let counter = match err {
                    GateError::EmptyInput => GateCounter::EmptyInput,
                    _ => GateCounter::NotFound,
                };
                self.stats.record(counter);
                self.alert = Some(Alert::from_error(&err, now, self.params.alert_ttl_secs));
                self.pending_events.push(GateEvent::LookupFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Run one capture on `device` and verify whatever it decodes.
    ///
    /// Returns `Ok(None)` when the device produced no code. The device is
    /// released before this returns, whatever the outcome.
    pub fn scan<D: CaptureDevice + ?Sized>(
        &mut self,
        device: &mut D,
        now: Timestamp,
    ) -> Result<Option<&VisitorRecord>, GateError> {
        let code = match CaptureSession::open(device) {
            Ok(mut capture) => capture.next_code(),
            Err(e) => {
                warn!("capture device unavailable: {e}");
                let err = GateError::DeviceUnavailable(e.to_string());
                self.stats.record(GateCounter::CaptureUnavailable);
                self.alert = Some(Alert::from_error(&err, now, self.params.alert_ttl_secs));
                self.pending_events.push(GateEvent::CaptureUnavailable {
                    reason: e.to_string(),
                });
                return Err(err);
            }
        };

        // A working camera ends any earlier "camera unavailable" message.
        if self.alert.as_ref().is_some_and(Alert::is_persistent) {
            self.alert = None;
        }

        match code {
            Some(code) => self.submit_code(&code, CodeSource::Camera, now).map(Some),
            None => Ok(None),
        }
    }

    /// Approve or deny the presented visitor.
    ///
    /// Under [`DecisionPolicy::NotifyOnly`] the directory is not touched.
    /// Under [`DecisionPolicy::RecordEntry`] an approval moves the visitor to
    /// [`VisitorStatus::Inside`].
    pub fn decide(&mut self, outcome: DecisionOutcome, now: Timestamp) -> Result<Notification, GateError> {
        let (decision, notification) = match self.decisions.decide(outcome, &self.directory, now) {
            Ok(decided) => decided,
            Err(err) => {
                warn!("decision rejected: {err}");
                self.stats.record(GateCounter::InvalidState);
                return Err(err);
            }
        };

        self.stats.record(match outcome {
            DecisionOutcome::Approved => GateCounter::Approved,
            DecisionOutcome::Denied => GateCounter::Denied,
        });

        let record_entry = self.params.decision_policy == DecisionPolicy::RecordEntry
            && outcome == DecisionOutcome::Approved;
        let visitor = decision.visitor.clone();
        self.pending_events.push(GateEvent::DecisionRecorded(decision));

        if record_entry {
            self.directory.set_status(&visitor, VisitorStatus::Inside)?;
            info!(%visitor, "entry recorded");
            self.pending_events.push(GateEvent::EntryRecorded { visitor });
        }

        Ok(notification)
    }

    pub fn phase(&self) -> GatePhase {
        match self.decisions.active() {
            Some(_) => GatePhase::Verified,
            None => GatePhase::Idle,
        }
    }

    /// The presented visitor, read live from the directory.
    pub fn active_visitor(&self) -> Option<&VisitorRecord> {
        self.decisions
            .active()
            .and_then(|a| self.directory.get(&a.visitor))
    }

    pub fn notification(&self, now: Timestamp) -> Option<&Notification> {
        self.decisions.notification(now)
    }

    pub fn alert(&self, now: Timestamp) -> Option<&Alert> {
        self.alert.as_ref().filter(|a| !a.is_expired(now))
    }

    /// Drop expired notification and alert. Once dropped they never come back.
    pub fn tick(&mut self, now: Timestamp) {
        if self.decisions.sweep(now) {
            self.pending_events.push(GateEvent::NotificationExpired);
        }
        if self.alert.as_ref().is_some_and(|a| a.is_expired(now)) {
            self.alert = None;
            self.pending_events.push(GateEvent::AlertExpired);
        }
    }

    pub fn dismiss_notification(&mut self) -> bool {
        self.decisions.dismiss_notification().is_some()
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    /// Return to the idle screen without deciding on the presented visitor.
    pub fn dismiss_verification(&mut self) -> bool {
        match self.decisions.dismiss_verification() {
            Some(active) => {
                self.pending_events.push(GateEvent::VerificationDismissed {
                    visitor: active.visitor,
                });
                true
            }
            None => false,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&mut self) -> Vec<GateEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
