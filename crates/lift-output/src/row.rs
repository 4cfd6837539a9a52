//! Plain data row written by output backends.

use lift_core::LiftId;
use lift_fleet::Lift;
use lift_sim::LiftEvent;

/// One lifecycle event as seen by a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    /// Position in the recorder's stream, starting at 0.
    pub seq:         u64,
    pub lift_id:     LiftId,
    /// `move_start`, `doors_open`, `doors_close` or `move_end`.
    pub event:       &'static str,
    /// The lift's floor when the hook fired.
    pub floor:       u32,
    /// Present for `move_start` and `move_end`.
    pub from_floor:  Option<u32>,
    pub to_floor:    Option<u32>,
    /// Present for `move_start` and both door events.
    pub duration_ms: Option<u64>,
}

impl EventRow {
    pub fn new(seq: u64, lift: &Lift, event: LiftEvent) -> Self {
        let (from_floor, to_floor, duration_ms) = match event {
            LiftEvent::MoveStart { from_floor, to_floor, duration_ms } => {
                (Some(from_floor), Some(to_floor), Some(duration_ms))
            }
            LiftEvent::DoorsOpen { duration_ms } | LiftEvent::DoorsClose { duration_ms } => {
                (None, None, Some(duration_ms))
            }
            LiftEvent::MoveEnd { from_floor, to_floor } => (Some(from_floor), Some(to_floor), None),
        };
        Self {
            seq,
            lift_id: lift.id,
            event: event.name(),
            floor: lift.current_floor,
            from_floor,
            to_floor,
            duration_ms,
        }
    }
}
