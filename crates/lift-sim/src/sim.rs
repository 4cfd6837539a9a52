//! The `Simulation` struct and its scheduling loop.

use std::fmt;

use log::{debug, info, trace, warn};

use lift_core::{LiftId, SimClock, SimConfig, SimTime};
use lift_fleet::{CallQueue, Dispatcher, Lift, NearestIdle};
use lift_schedule::{Pacer, WakeQueue};

use crate::movement::{MovementRun, MovementTiming, RunStep};
use crate::{LiftCall, LiftHooks, SimError, SimResult};

// ── SimStatus ─────────────────────────────────────────────────────────────────

/// Lifecycle of the scheduling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimStatus {
    /// No pending work; the loop sleeps until the next call or `run()`.
    Idle,
    /// The loop is draining the call queue.
    Running,
    /// The loop has been halted and will not dispatch again unless `run()`
    /// is called.
    Stopped,
}

impl fmt::Display for SimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimStatus::Idle => "idle",
            SimStatus::Running => "running",
            SimStatus::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

// ── Wake-up tokens ────────────────────────────────────────────────────────────

/// Who resumes when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wakeup {
    LoopTick,
    Movement(LiftId),
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// A bank of lifts serving floor calls.
///
/// `Simulation<D>` owns the fleet, the call queue, every in-flight movement
/// run and the timer queue that multiplexes them on one thread of control:
///
/// 1. **Intake** — [`call_lift`][Self::call_lift] validates and enqueues a
///    call and wakes the loop if it was idle.
/// 2. **Loop tick** — every `loop_interval_ms` the loop peeks the head call
///    and asks the [`Dispatcher`] for an idle lift.  If one is found the call
///    is removed and a [`MovementRun`] starts; otherwise the call stays put
///    and the loop polls again.
/// 3. **Movement** — each run suspends on its move/door timers and resumes
///    when they are due, firing hooks at every phase boundary.
///
/// Time only passes when the caller drives it with [`step`][Self::step],
/// [`advance_by`][Self::advance_by], [`advance_to`][Self::advance_to] or
/// [`run_until_settled`][Self::run_until_settled].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<D: Dispatcher = NearestIdle> {
    config:     SimConfig,
    clock:      SimClock,
    lifts:      Vec<Lift>,
    queue:      CallQueue<LiftCall>,
    /// At most one run per lift, indexed by `LiftId`.
    runs:       Vec<Option<MovementRun>>,
    timers:     WakeQueue<Wakeup>,
    status:     SimStatus,
    /// `true` while a `LoopTick` is pending in `timers`.
    loop_armed: bool,
    hooks:      Box<dyn LiftHooks>,
    pacer:      Box<dyn Pacer>,
    dispatcher: D,

    hook_failures: u64,
    dispatched:    u64,
    completed:     u64,
}

impl<D: Dispatcher> Simulation<D> {
    pub(crate) fn assemble(
        config:     SimConfig,
        hooks:      Box<dyn LiftHooks>,
        pacer:      Box<dyn Pacer>,
        dispatcher: D,
    ) -> Self {
        let lifts = Lift::fleet(config.number_of_lifts);
        let runs = (0..lifts.len()).map(|_| None).collect();
        Self {
            config,
            clock: SimClock::new(),
            lifts,
            queue: CallQueue::new(),
            runs,
            timers: WakeQueue::new(),
            status: SimStatus::Idle,
            loop_armed: false,
            hooks,
            pacer,
            dispatcher,
            hook_failures: 0,
            dispatched: 0,
            completed: 0,
        }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    pub fn number_of_floors(&self) -> u32 {
        self.config.number_of_floors
    }

    pub fn number_of_lifts(&self) -> u32 {
        self.config.number_of_lifts
    }

    /// Snapshot of every lift, in creation order.
    pub fn lifts(&self) -> &[Lift] {
        &self.lifts
    }

    pub fn lift(&self, id: LiftId) -> Option<&Lift> {
        self.lifts.get(id.index())
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Instant of the next pending timer, if any.
    pub fn next_wakeup(&self) -> Option<SimTime> {
        self.timers.next_due()
    }

    /// Calls still waiting for a lift.
    pub fn pending_calls(&self) -> usize {
        self.queue.len()
    }

    /// Floors of the waiting calls, head first.
    pub fn queued_floors(&self) -> Vec<u32> {
        self.queue.iter().map(LiftCall::floor_number).collect()
    }

    /// Movement runs currently in flight.
    pub fn active_runs(&self) -> usize {
        self.runs.iter().filter(|r| r.is_some()).count()
    }

    /// Calls that have been committed to a lift.
    pub fn dispatched_calls(&self) -> u64 {
        self.dispatched
    }

    /// Calls whose lift has finished closing its doors.
    pub fn completed_calls(&self) -> u64 {
        self.completed
    }

    /// Hook invocations that returned an error.
    pub fn hook_failures(&self) -> u64 {
        self.hook_failures
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Submit a call.
    ///
    /// Fails with [`SimError::InvalidFloor`] when the floor does not exist;
    /// nothing is enqueued in that case.  An idle loop is woken.  After
    /// [`stop`][Self::stop] the call is still accepted but will not be
    /// served unless [`run`][Self::run] is called again.
    pub fn call_lift(&mut self, call: impl Into<LiftCall>) -> SimResult<()> {
        let call = call.into();
        let floor = call.floor_number();
        if !self.config.is_valid_floor(floor) {
            return Err(SimError::InvalidFloor {
                floor,
                number_of_floors: self.config.number_of_floors,
            });
        }

        self.queue.enqueue(call);
        debug!("call to floor {floor} queued ({} pending)", self.queue.len());

        match self.status {
            SimStatus::Idle => {
                self.set_status(SimStatus::Running);
                self.arm_loop(self.now());
            }
            SimStatus::Running => self.arm_loop(self.now()),
            SimStatus::Stopped => {
                warn!("call to floor {floor} queued after stop; it will not be served");
            }
        }
        Ok(())
    }

    /// Force the loop into `Running` and arm it, even with an empty queue.
    pub fn run(&mut self) {
        self.set_status(SimStatus::Running);
        self.arm_loop(self.now());
    }

    /// Halt dispatching.  Lifts already moving finish their runs and still
    /// fire every hook; queued calls stay queued.
    pub fn stop(&mut self) {
        self.set_status(SimStatus::Stopped);
    }

    // ── Driving time ──────────────────────────────────────────────────────

    /// Process the single next timer, moving the clock to its instant.
    ///
    /// Returns `false` when nothing is pending.
    pub fn step(&mut self) -> bool {
        let Some(at) = self.timers.next_due() else {
            return false;
        };
        self.process_until(at, true);
        true
    }

    /// Process every timer due within the next `ms` milliseconds, then move
    /// the clock to `now + ms`.
    pub fn advance_by(&mut self, ms: u64) {
        let target = self.now().offset(ms);
        self.advance_to(target);
    }

    /// Process every timer due at or before `target`, then move the clock to
    /// `target`.  Targets in the past only flush timers due now.
    pub fn advance_to(&mut self, target: SimTime) {
        let target = target.max(self.now());
        self.process_until(target, false);
        self.pacer.wait(self.now(), target);
        self.clock.advance_to(target);
    }

    /// Process timers until none remain and return the final instant.
    ///
    /// Every call is eventually served while the loop is running, so this
    /// returns once the queue is drained and every lift is idle, or once the
    /// loop is stopped and in-flight runs have finished.  A custom
    /// [`Dispatcher`] that never selects a lift keeps it polling forever.
    pub fn run_until_settled(&mut self) -> SimTime {
        while self.step() {}
        self.now()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Drain due timers.  With `single` only one is processed.
    fn process_until(&mut self, until: SimTime, single: bool) {
        while let Some((at, wakeup)) = self.timers.pop_due(until) {
            if at > self.now() {
                self.pacer.wait(self.now(), at);
                self.clock.advance_to(at);
            }
            match wakeup {
                Wakeup::LoopTick => self.loop_tick(),
                Wakeup::Movement(id) => self.resume_run(id),
            }
            if single {
                break;
            }
        }
    }

    fn set_status(&mut self, status: SimStatus) {
        if self.status != status {
            info!("[{}] simulation {} -> {}", self.clock, self.status, status);
            self.status = status;
        }
    }

    fn arm_loop(&mut self, at: SimTime) {
        if !self.loop_armed {
            self.timers.push(at, Wakeup::LoopTick);
            self.loop_armed = true;
        }
    }

    /// One drain attempt of the scheduling loop.
    fn loop_tick(&mut self) {
        self.loop_armed = false;

        if self.status == SimStatus::Stopped {
            debug!("[{}] loop tick after stop; exiting", self.clock);
            return;
        }

        let Some(floor) = self.queue.peek_head().map(LiftCall::floor_number) else {
            self.set_status(SimStatus::Idle);
            return;
        };
        self.set_status(SimStatus::Running);

        match self.dispatcher.select(&self.lifts, floor) {
            Some(id) if self.lifts.get(id.index()).is_some_and(Lift::is_idle) => {
                if let Some(call) = self.queue.remove_head() {
                    self.start_run(id, call);
                }
            }
            Some(id) => warn!(
                "[{}] dispatcher chose {id} for floor {floor} but it is busy or unknown; retrying",
                self.clock
            ),
            None => trace!("[{}] no idle lift for floor {floor}; retrying", self.clock),
        }

        let next = self.now().offset(self.config.loop_interval_ms);
        self.arm_loop(next);
    }

    /// `id` must name an idle lift.
    fn start_run(&mut self, id: LiftId, call: LiftCall) {
        debug!(
            "[{}] dispatching {id} from floor {} to floor {}",
            self.clock,
            self.lifts[id.index()].current_floor,
            call.floor_number()
        );
        self.dispatched += 1;

        let timing = MovementTiming::from(&self.config);
        let lift = &mut self.lifts[id.index()];
        let (mut run, step) = MovementRun::start(lift, call, timing, self.hooks.as_mut());
        self.hook_failures += u64::from(run.take_hook_failures());
        self.settle_step(id, run, step);
    }

    fn resume_run(&mut self, id: LiftId) {
        let Some(mut run) = self.runs[id.index()].take() else {
            warn!("[{}] wake-up for {id} without a run", self.clock);
            return;
        };
        let lift = &mut self.lifts[id.index()];
        let step = run.resume(lift, self.hooks.as_mut());
        self.hook_failures += u64::from(run.take_hook_failures());
        self.settle_step(id, run, step);
    }

    fn settle_step(&mut self, id: LiftId, run: MovementRun, step: RunStep) {
        match step {
            RunStep::Suspend(ms) => {
                self.timers.push(self.now().offset(ms), Wakeup::Movement(id));
                self.runs[id.index()] = Some(run);
            }
            RunStep::Finished => {
                self.completed += 1;
                debug!("[{}] {id} idle at floor {}", self.clock, run.to_floor());
            }
        }
    }
}
