//! Per-session gate counters.

use std::fmt;

const COUNTERS: usize = 8;

/// Something the gate counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateCounter {
    CodesSubmitted,
    Matched,
    NotFound,
    EmptyInput,
    CaptureUnavailable,
    Approved,
    Denied,
    InvalidState,
}

impl GateCounter {
    pub const ALL: [GateCounter; COUNTERS] = [
        Self::CodesSubmitted,
        Self::Matched,
        Self::NotFound,
        Self::EmptyInput,
        Self::CaptureUnavailable,
        Self::Approved,
        Self::Denied,
        Self::InvalidState,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodesSubmitted => "codes_submitted",
            Self::Matched => "matched",
            Self::NotFound => "not_found",
            Self::EmptyInput => "empty_input",
            Self::CaptureUnavailable => "capture_unavailable",
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::InvalidState => "invalid_state",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GateCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of gate activity since the session opened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateStats {
    counts: [u64; COUNTERS],
}

impl GateStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, counter: GateCounter) {
        let slot = &mut self.counts[counter.slot()];
        *slot = slot.saturating_add(1);
    }

    pub fn get(&self, counter: GateCounter) -> u64 {
        self.counts[counter.slot()]
    }

    /// Every counter with its value, in [`GateCounter::ALL`] order.
    pub fn snapshot(&self) -> impl Iterator<Item = (GateCounter, u64)> + '_ {
        GateCounter::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Codes that reached the verifier but matched nobody or were blank.
    pub fn failed_lookups(&self) -> u64 {
        self.get(GateCounter::NotFound) + self.get(GateCounter::EmptyInput)
    }
}
