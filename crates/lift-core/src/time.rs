//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `SimTime`.  Every
//! duration in the simulator (per-floor travel, door open, door close, loop
//! poll interval) is an integer number of milliseconds, so all arithmetic is
//! exact and two runs with the same inputs produce identical timelines.
//!
//! `SimClock` holds the current instant.  It only moves forward; the
//! simulation advances it to the due time of each wake-up it processes.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in milliseconds since construction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the instant `ms` milliseconds after `self`, saturating at the
    /// end of representable time.
    #[inline]
    pub fn offset(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.offset(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's notion of "now".
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock forward to `to`.  Earlier instants are ignored so the
    /// clock never runs backwards.
    #[inline]
    pub fn advance_to(&mut self, to: SimTime) {
        if to > self.now {
            self.now = to;
        }
    }

    /// Break elapsed time into (minutes, seconds, milliseconds) for logging.
    pub fn elapsed_msm(&self) -> (u64, u64, u64) {
        let ms = self.now.0;
        (ms / 60_000, (ms % 60_000) / 1_000, ms % 1_000)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s, ms) = self.elapsed_msm();
        write!(f, "{} ({:02}:{:02}.{:03})", self.now, m, s, ms)
    }
}
