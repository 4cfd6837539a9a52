//! The per-call movement state machine.
//!
//! # Phases
//!
//! ```text
//! Assigned ──▶ Moving ──▶ Arrived ──▶ DoorsClosing ──▶ Idle
//!  is_moving   wait        floor ← to  doors_close       is_moving
//!  ← true      move_ms     doors_open  wait close_ms     ← false
//!  move_start  (skipped    wait                          move_end
//!              if from==to) open_ms
//! ```
//!
//! Phases run strictly in that order, never skip (apart from the zero-length
//! `Moving` wait) and never branch back.  Every hook fires on the call's own
//! hooks first, then on the simulation-wide hooks.
//!
//! A run never blocks.  [`MovementRun::start`] and [`MovementRun::resume`]
//! perform every side effect up to the next timed wait and hand that wait
//! back as [`RunStep::Suspend`]; the simulation registers a wake-up and calls
//! `resume` when it is due.

use log::{debug, warn};

use lift_core::{LiftId, SimConfig};
use lift_fleet::Lift;

use crate::{LiftCall, LiftEvent, LiftHooks};

// ── MovementPhase ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementPhase {
    Assigned,
    Moving,
    Arrived,
    DoorsClosing,
    Idle,
}

impl MovementPhase {
    /// The phase that follows `self`, or `None` once the run is over.
    pub fn next(self) -> Option<MovementPhase> {
        match self {
            MovementPhase::Assigned => Some(MovementPhase::Moving),
            MovementPhase::Moving => Some(MovementPhase::Arrived),
            MovementPhase::Arrived => Some(MovementPhase::DoorsClosing),
            MovementPhase::DoorsClosing => Some(MovementPhase::Idle),
            MovementPhase::Idle => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == MovementPhase::Idle
    }
}

// ── RunStep ───────────────────────────────────────────────────────────────────

/// What a run asks of the simulation after advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStep {
    /// Resume this run after the given number of milliseconds.
    Suspend(u64),
    /// The lift is idle again; drop the run.
    Finished,
}

// ── MovementTiming ────────────────────────────────────────────────────────────

/// Timing values captured when a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementTiming {
    pub lift_speed_per_floor_ms: u64,
    pub door_open_ms:            u64,
    pub door_close_ms:           u64,
}

impl From<&SimConfig> for MovementTiming {
    fn from(config: &SimConfig) -> Self {
        Self {
            lift_speed_per_floor_ms: config.lift_speed_per_floor_ms,
            door_open_ms:            config.door_open_ms,
            door_close_ms:           config.door_close_ms,
        }
    }
}

impl MovementTiming {
    /// Travel time between two floors, saturating at `u64::MAX`.
    #[inline]
    pub fn move_duration_ms(&self, from: u32, to: u32) -> u64 {
        u64::from(from.abs_diff(to)).saturating_mul(self.lift_speed_per_floor_ms)
    }
}

// ── MovementRun ───────────────────────────────────────────────────────────────

/// One call being served by one lift.
pub struct MovementRun {
    lift:             LiftId,
    from_floor:       u32,
    to_floor:         u32,
    move_duration_ms: u64,
    timing:           MovementTiming,
    phase:            MovementPhase,
    call_hooks:       Box<dyn LiftHooks>,
    /// Hook failures not yet collected by the simulation.
    hook_failures:    u32,
}

impl MovementRun {
    /// Commit `lift` to `call` and run until the first timed wait.
    ///
    /// `lift` must be idle.
    pub fn start(
        lift:   &mut Lift,
        call:   LiftCall,
        timing: MovementTiming,
        global: &mut dyn LiftHooks,
    ) -> (MovementRun, RunStep) {
        debug_assert!(lift.is_idle(), "{} dispatched while moving", lift.id);

        let from_floor = lift.current_floor;
        let to_floor = call.floor_number();
        let mut run = MovementRun {
            lift: lift.id,
            from_floor,
            to_floor,
            move_duration_ms: timing.move_duration_ms(from_floor, to_floor),
            timing,
            phase: MovementPhase::Assigned,
            call_hooks: call.into_hooks(),
            hook_failures: 0,
        };

        let step = match run.enter(MovementPhase::Assigned, lift, global) {
            Some(ms) => RunStep::Suspend(ms),
            None => run.advance(lift, global),
        };
        (run, step)
    }

    /// Continue after the previously requested wait has elapsed.
    pub fn resume(&mut self, lift: &mut Lift, global: &mut dyn LiftHooks) -> RunStep {
        debug_assert_eq!(lift.id, self.lift);
        self.advance(lift, global)
    }

    pub fn lift(&self) -> LiftId {
        self.lift
    }

    pub fn phase(&self) -> MovementPhase {
        self.phase
    }

    pub fn from_floor(&self) -> u32 {
        self.from_floor
    }

    pub fn to_floor(&self) -> u32 {
        self.to_floor
    }

    pub fn move_duration_ms(&self) -> u64 {
        self.move_duration_ms
    }

    /// Hook failures since the last call, resetting the counter.
    pub fn take_hook_failures(&mut self) -> u32 {
        std::mem::take(&mut self.hook_failures)
    }

    // ── Transition function ───────────────────────────────────────────────

    /// Enter successive phases until one requests a wait or the run ends.
    fn advance(&mut self, lift: &mut Lift, global: &mut dyn LiftHooks) -> RunStep {
        while let Some(next) = self.phase.next() {
            self.phase = next;
            if let Some(ms) = self.enter(next, lift, global) {
                return RunStep::Suspend(ms);
            }
        }
        RunStep::Finished
    }

    /// Perform the entry actions of `phase`.  Returns the wait that ends the
    /// phase, or `None` to move on immediately.
    fn enter(
        &mut self,
        phase:  MovementPhase,
        lift:   &mut Lift,
        global: &mut dyn LiftHooks,
    ) -> Option<u64> {
        debug!("{} {:?}: {} -> {}", self.lift, phase, self.from_floor, self.to_floor);
        match phase {
            MovementPhase::Assigned => {
                lift.is_moving = true;
                self.fire(
                    LiftEvent::MoveStart {
                        from_floor:  self.from_floor,
                        to_floor:    self.to_floor,
                        duration_ms: self.move_duration_ms,
                    },
                    lift,
                    global,
                );
                None
            }
            MovementPhase::Moving => {
                (self.from_floor != self.to_floor).then_some(self.move_duration_ms)
            }
            MovementPhase::Arrived => {
                lift.current_floor = self.to_floor;
                let duration_ms = self.timing.door_open_ms;
                self.fire(LiftEvent::DoorsOpen { duration_ms }, lift, global);
                Some(duration_ms)
            }
            MovementPhase::DoorsClosing => {
                let duration_ms = self.timing.door_close_ms;
                self.fire(LiftEvent::DoorsClose { duration_ms }, lift, global);
                Some(duration_ms)
            }
            MovementPhase::Idle => {
                lift.is_moving = false;
                self.fire(
                    LiftEvent::MoveEnd { from_floor: self.from_floor, to_floor: self.to_floor },
                    lift,
                    global,
                );
                None
            }
        }
    }

    /// Call hook first, then the simulation-wide hook.  A failing hook is
    /// logged and counted; the other hook and the run carry on regardless.
    fn fire(&mut self, event: LiftEvent, lift: &Lift, global: &mut dyn LiftHooks) {
        if let Err(e) = event.deliver(self.call_hooks.as_mut(), lift) {
            warn!("{} call {} hook: {e}", lift.id, event.name());
            self.hook_failures += 1;
        }
        if let Err(e) = event.deliver(global, lift) {
            warn!("{} global {} hook: {e}", lift.id, event.name());
            self.hook_failures += 1;
        }
    }
}
