//! Shared utilities for the society gate.

pub mod logging;

pub use logging::{init_logging, LogFormat};
