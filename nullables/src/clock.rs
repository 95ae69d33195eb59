//! Nullable clock: scripted gate time.

use society_types::{GateParams, Timestamp};
use std::cell::Cell;

/// The time a test gate session sees.
///
/// Moves only when told to, either by a number of seconds or past one of the
/// session's message lifetimes.
pub struct NullClock {
    now: Cell<Timestamp>,
}

impl NullClock {
    pub fn at(secs: u64) -> Self {
        Self {
            now: Cell::new(Timestamp::new(secs)),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.now.get()
    }

    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().plus_secs(secs));
    }

    /// Jump to the first second at which a notification raised now has gone.
    pub fn outlast_notification(&self, params: &GateParams) {
        self.advance(params.notification_ttl_secs);
    }

    /// Jump to the first second at which a timed alert raised now has gone.
    pub fn outlast_alert(&self, params: &GateParams) {
        self.advance(params.alert_ttl_secs);
    }

    /// Move the clock backwards, as a corrected system clock would.
    pub fn rewind_to(&self, secs: u64) {
        self.now.set(Timestamp::new(secs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_only_on_request() {
        let clock = NullClock::at(100);
        assert_eq!(clock.now(), Timestamp::new(100));
        clock.advance(3);
        assert_eq!(clock.now(), Timestamp::new(103));
        clock.rewind_to(7);
        assert_eq!(clock.now(), Timestamp::new(7));
    }

    #[test]
    fn outlasts_configured_lifetimes() {
        let params = GateParams {
            notification_ttl_secs: 5,
            alert_ttl_secs: 2,
            ..GateParams::default()
        };
        let clock = NullClock::at(10);
        clock.outlast_notification(&params);
        assert_eq!(clock.now(), Timestamp::new(15));
        clock.outlast_alert(&params);
        assert_eq!(clock.now(), Timestamp::new(17));
    }

    #[test]
    fn advance_saturates() {
        let clock = NullClock::at(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now(), Timestamp::new(u64::MAX));
    }
}
