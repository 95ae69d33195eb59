//! Nullable infrastructure for deterministic testing.
//!
//! Everything the gate depends on from the outside world (the clock and the
//! capture device) has a test-friendly stand-in here that:
//! - Returns deterministic values
//! - Can be controlled programmatically
//! - Never touches real hardware
//!
//! Usage: swap real implementations for nullables in tests.

pub mod camera;
pub mod clock;

pub use camera::NullCamera;
pub use clock::NullClock;
