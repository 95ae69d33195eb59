//! Visitor access verification at the security gate.
//!
//! The gate flow is a small cycle:
//! 1. **Capture**: the operator supplies a code, either from the camera or typed in.
//! 2. **Verify**: the code is matched against the pre-authorized visitor directory.
//! 3. **Decide**: the operator approves or denies the matched visitor, which raises a
//!    notification that dismisses itself after a few seconds.
//!
//! [`GateSession`] ties the pieces together and is the only state a gate screen needs.
//! Nothing here is global: every session owns its directory, slots and counters.

pub mod capture;
pub mod decision;
pub mod directory;
pub mod error;
pub mod notification;
pub mod session;
pub mod state;
pub mod stats;
pub mod verifier;

pub use capture::{CaptureDevice, CaptureError, CaptureSession, CodeSource};
pub use decision::{GateDecision, GateDecisionHandler};
pub use directory::{VisitorDirectory, VisitorQuery, VisitorRecord};
pub use error::{DirectoryError, GateError};
pub use notification::{Alert, DecisionOutcome, Notification};
pub use session::{GateEvent, GateSession};
pub use state::{ActiveVerification, GatePhase};
pub use stats::{GateCounter, GateStats};
pub use verifier::AccessVerifier;
