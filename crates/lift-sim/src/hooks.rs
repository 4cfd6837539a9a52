//! Lifecycle hooks — the push channel through which a presentation layer
//! learns about lift movement.

use lift_fleet::Lift;

use crate::HookResult;

// ── LiftEvent ─────────────────────────────────────────────────────────────────

/// One phase boundary of a movement run, with its phase-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftEvent {
    MoveStart { from_floor: u32, to_floor: u32, duration_ms: u64 },
    DoorsOpen { duration_ms: u64 },
    DoorsClose { duration_ms: u64 },
    MoveEnd { from_floor: u32, to_floor: u32 },
}

impl LiftEvent {
    /// Invoke the matching method of `hooks`.
    pub fn deliver(self, hooks: &mut dyn LiftHooks, lift: &Lift) -> HookResult {
        match self {
            LiftEvent::MoveStart { from_floor, to_floor, duration_ms } => {
                hooks.on_lift_move_start(lift, from_floor, to_floor, duration_ms)
            }
            LiftEvent::DoorsOpen { duration_ms } => hooks.on_lift_doors_open(lift, duration_ms),
            LiftEvent::DoorsClose { duration_ms } => hooks.on_lift_doors_close(lift, duration_ms),
            LiftEvent::MoveEnd { from_floor, to_floor } => {
                hooks.on_lift_move_end(lift, from_floor, to_floor)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LiftEvent::MoveStart { .. } => "move_start",
            LiftEvent::DoorsOpen { .. } => "doors_open",
            LiftEvent::DoorsClose { .. } => "doors_close",
            LiftEvent::MoveEnd { .. } => "move_end",
        }
    }
}

// ── LiftHooks ─────────────────────────────────────────────────────────────────

/// Callbacks invoked by the movement state machine at each phase boundary.
///
/// Hooks are attached in two places: once on the simulation (fired for every
/// call) and optionally on each [`LiftCall`][crate::LiftCall].  For a given
/// phase the call's hook always runs before the simulation-wide one.
///
/// All methods default to doing nothing, so implementors only override what
/// they care about.  Durations let a renderer drive its own animation timing;
/// there is no way to poll a lift mid-animation.
///
/// # Example — door light
///
/// ```rust,ignore
/// struct DoorLight;
///
/// impl LiftHooks for DoorLight {
///     fn on_lift_doors_open(&mut self, lift: &Lift, _duration_ms: u64) -> HookResult {
///         println!("{} doors open at floor {}", lift.id, lift.current_floor);
///         Ok(())
///     }
/// }
/// ```
pub trait LiftHooks {
    /// The lift has been committed to a call and is leaving `from_floor`.
    /// `duration_ms` is zero when the lift is already at `to_floor`.
    fn on_lift_move_start(
        &mut self,
        _lift:        &Lift,
        _from_floor:  u32,
        _to_floor:    u32,
        _duration_ms: u64,
    ) -> HookResult {
        Ok(())
    }

    /// The lift has reached its floor and its doors start opening.
    fn on_lift_doors_open(&mut self, _lift: &Lift, _duration_ms: u64) -> HookResult {
        Ok(())
    }

    /// The doors start closing.
    fn on_lift_doors_close(&mut self, _lift: &Lift, _duration_ms: u64) -> HookResult {
        Ok(())
    }

    /// The doors are closed and the lift is idle again.
    fn on_lift_move_end(&mut self, _lift: &Lift, _from_floor: u32, _to_floor: u32) -> HookResult {
        Ok(())
    }
}

impl<H: LiftHooks + ?Sized> LiftHooks for Box<H> {
    fn on_lift_move_start(&mut self, lift: &Lift, from: u32, to: u32, duration_ms: u64) -> HookResult {
        (**self).on_lift_move_start(lift, from, to, duration_ms)
    }

    fn on_lift_doors_open(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        (**self).on_lift_doors_open(lift, duration_ms)
    }

    fn on_lift_doors_close(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        (**self).on_lift_doors_close(lift, duration_ms)
    }

    fn on_lift_move_end(&mut self, lift: &Lift, from: u32, to: u32) -> HookResult {
        (**self).on_lift_move_end(lift, from, to)
    }
}

/// Hooks that do nothing.  The default for calls submitted without hooks.
pub struct NoopHooks;

impl LiftHooks for NoopHooks {}

// ── Closure hooks ─────────────────────────────────────────────────────────────

type MoveFn = Box<dyn FnMut(&Lift, u32, u32, u64)>;
type DoorFn = Box<dyn FnMut(&Lift, u64)>;
type EndFn = Box<dyn FnMut(&Lift, u32, u32)>;

/// Hooks assembled from optional closures, for callers that only want one or
/// two callbacks on a single call.
///
/// ```rust,ignore
/// let call = LiftCall::new(7).with_hooks(
///     FnHooks::new().doors_open(|lift, _| println!("ding at {}", lift.current_floor)),
/// );
/// ```
#[derive(Default)]
pub struct FnHooks {
    move_start:  Option<MoveFn>,
    doors_open:  Option<DoorFn>,
    doors_close: Option<DoorFn>,
    move_end:    Option<EndFn>,
}

impl FnHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_start(mut self, f: impl FnMut(&Lift, u32, u32, u64) + 'static) -> Self {
        self.move_start = Some(Box::new(f));
        self
    }

    pub fn doors_open(mut self, f: impl FnMut(&Lift, u64) + 'static) -> Self {
        self.doors_open = Some(Box::new(f));
        self
    }

    pub fn doors_close(mut self, f: impl FnMut(&Lift, u64) + 'static) -> Self {
        self.doors_close = Some(Box::new(f));
        self
    }

    pub fn move_end(mut self, f: impl FnMut(&Lift, u32, u32) + 'static) -> Self {
        self.move_end = Some(Box::new(f));
        self
    }
}

impl LiftHooks for FnHooks {
    fn on_lift_move_start(&mut self, lift: &Lift, from: u32, to: u32, duration_ms: u64) -> HookResult {
        if let Some(f) = self.move_start.as_mut() {
            f(lift, from, to, duration_ms);
        }
        Ok(())
    }

    fn on_lift_doors_open(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        if let Some(f) = self.doors_open.as_mut() {
            f(lift, duration_ms);
        }
        Ok(())
    }

    fn on_lift_doors_close(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        if let Some(f) = self.doors_close.as_mut() {
            f(lift, duration_ms);
        }
        Ok(())
    }

    fn on_lift_move_end(&mut self, lift: &Lift, from: u32, to: u32) -> HookResult {
        if let Some(f) = self.move_end.as_mut() {
            f(lift, from, to);
        }
        Ok(())
    }
}

// ── Chained hooks ─────────────────────────────────────────────────────────────

/// Runs two hook sets in sequence.
///
/// The second set runs even when the first fails; the first failure is the
/// one reported.  Construct chains with `hooks_a.then(hooks_b)`.
pub struct ChainedHooks<A: LiftHooks, B: LiftHooks> {
    first:  A,
    second: B,
}

impl<A: LiftHooks, B: LiftHooks> ChainedHooks<A, B> {
    /// Split the chain back into its two halves.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: LiftHooks, B: LiftHooks> LiftHooks for ChainedHooks<A, B> {
    fn on_lift_move_start(&mut self, lift: &Lift, from: u32, to: u32, duration_ms: u64) -> HookResult {
        let first = self.first.on_lift_move_start(lift, from, to, duration_ms);
        let second = self.second.on_lift_move_start(lift, from, to, duration_ms);
        first.and(second)
    }

    fn on_lift_doors_open(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        let first = self.first.on_lift_doors_open(lift, duration_ms);
        let second = self.second.on_lift_doors_open(lift, duration_ms);
        first.and(second)
    }

    fn on_lift_doors_close(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        let first = self.first.on_lift_doors_close(lift, duration_ms);
        let second = self.second.on_lift_doors_close(lift, duration_ms);
        first.and(second)
    }

    fn on_lift_move_end(&mut self, lift: &Lift, from: u32, to: u32) -> HookResult {
        let first = self.first.on_lift_move_end(lift, from, to);
        let second = self.second.on_lift_move_end(lift, from, to);
        first.and(second)
    }
}

/// Extension trait that adds `.then(other)` to any `LiftHooks`.
pub trait LiftHooksExt: LiftHooks + Sized {
    fn then<B: LiftHooks>(self, other: B) -> ChainedHooks<Self, B> {
        ChainedHooks { first: self, second: other }
    }
}

impl<H: LiftHooks + Sized> LiftHooksExt for H {}
