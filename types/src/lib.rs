//! Fundamental types for the society gate.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! visitor identifiers, timestamps, visitor lifecycle enums, portal roles and the
//! tunable gate parameters.

pub mod error;
pub mod id;
pub mod params;
pub mod role;
pub mod state;
pub mod time;

pub use error::SocietyError;
pub use id::VisitorId;
pub use params::{DecisionPolicy, GateParams, MatchScope};
pub use role::{Role, View};
pub use state::{PurposeKind, VisitPurpose, VisitorStatus};
pub use time::Timestamp;
