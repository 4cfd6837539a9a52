//! Dispatch trait and the default nearest-idle-lift implementation.
//!
//! # Pluggability
//!
//! The simulation asks a [`Dispatcher`] which lift should serve the call at
//! the head of the queue.  Applications can swap in another policy at compile
//! time; the default [`NearestIdle`] is a single greedy pass over the fleet.

use lift_core::LiftId;

use crate::Lift;

/// Chooses the lift that will serve a call to `floor`.
pub trait Dispatcher {
    /// Return the chosen lift, or `None` when no lift is eligible right now.
    ///
    /// Implementations must never return a lift whose `is_moving` flag is set:
    /// that exclusion is what guarantees one movement run per lift.
    fn select(&self, lifts: &[Lift], floor: u32) -> Option<LiftId>;
}

/// Pick the idle lift closest to the requested floor.
///
/// Moving lifts are skipped.  Among idle lifts the one with the strictly
/// smallest `|current_floor - floor|` wins, so on a tie the lift seen first
/// (the lower id, created earlier) is kept.  O(number_of_lifts) per call; no
/// look-ahead, reservation, or en-route pickup.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestIdle;

impl Dispatcher for NearestIdle {
    fn select(&self, lifts: &[Lift], floor: u32) -> Option<LiftId> {
        let mut best: Option<(u32, LiftId)> = None;
        for lift in lifts.iter().filter(|l| l.is_idle()) {
            let distance = lift.distance_to(floor);
            match best {
                Some((best_distance, _)) if distance >= best_distance => {}
                _ => best = Some((distance, lift.id)),
            }
        }
        best.map(|(_, id)| id)
    }
}
