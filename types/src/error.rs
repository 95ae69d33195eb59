//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the society gate.
#[derive(Debug, Error)]
pub enum SocietyError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("role {role} may not open {view}")]
    ViewNotPermitted { role: String, view: String },
}
