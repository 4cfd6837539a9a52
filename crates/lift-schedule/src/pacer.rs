//! Real-time pacing between simulated instants.

use std::thread;
use std::time::Duration;

use log::trace;

use lift_core::SimTime;

/// Decides how much wall-clock time elapses when the simulation jumps from
/// one instant to the next.
///
/// The simulation calls [`wait`][Self::wait] before resuming any wake-up that
/// lies in the future.  Timed waits are the only place a run may block.
pub trait Pacer {
    fn wait(&mut self, from: SimTime, to: SimTime);
}

/// Jumps straight to the next instant.  Used by tests and batch runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualPacer;

impl Pacer for VirtualPacer {
    #[inline]
    fn wait(&mut self, _from: SimTime, _to: SimTime) {}
}

/// Sleeps the calling thread for the simulated gap divided by `speed`.
///
/// `speed = 1.0` replays in real time, `speed = 10.0` ten times faster.
#[derive(Debug, Clone, Copy)]
pub struct WallClockPacer {
    speed: f64,
}

impl WallClockPacer {
    /// Non-positive or non-finite speeds fall back to real time.
    pub fn new(speed: f64) -> Self {
        let speed = if speed.is_finite() && speed > 0.0 { speed } else { 1.0 };
        Self { speed }
    }

    pub fn real_time() -> Self {
        Self::new(1.0)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Wall-clock duration spent on a simulated gap of `ms` milliseconds,
    /// capped at `Duration::MAX`.
    pub fn scaled(&self, ms: u64) -> Duration {
        Duration::try_from_secs_f64(ms as f64 / 1_000.0 / self.speed).unwrap_or(Duration::MAX)
    }
}

impl Default for WallClockPacer {
    fn default() -> Self {
        Self::real_time()
    }
}

impl Pacer for WallClockPacer {
    fn wait(&mut self, from: SimTime, to: SimTime) {
        let gap = to.since(from);
        if gap == 0 {
            return;
        }
        let pause = self.scaled(gap);
        trace!("pacing {gap}ms of simulated time as {pause:?}");
        thread::sleep(pause);
    }
}
