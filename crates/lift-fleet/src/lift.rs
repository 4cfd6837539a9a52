//! Per-lift state.

use lift_core::{LiftId, DEFAULT_LIFT_FLOOR};

/// One elevator car.
///
/// Lifts are created once when the simulation is built and never destroyed.
/// `current_floor` and `is_moving` are written only by the movement state
/// machine serving that lift; everything else sees read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lift {
    pub id: LiftId,

    /// Always within `1..=number_of_floors`.
    pub current_floor: u32,

    /// `true` from the moment a call is accepted until the doors have
    /// finished closing.  Moving lifts are never dispatched.
    pub is_moving: bool,
}

impl Lift {
    /// An idle lift parked on the lowest floor.
    pub fn new(id: LiftId) -> Self {
        Self {
            id,
            current_floor: DEFAULT_LIFT_FLOOR,
            is_moving:     false,
        }
    }

    /// Build a fleet of `count` idle lifts with ids `0..count`.
    pub fn fleet(count: u32) -> Vec<Lift> {
        (0..count).map(|i| Lift::new(LiftId(i))).collect()
    }

    /// `true` when the lift can accept a new call.
    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.is_moving
    }

    /// Absolute number of floors between this lift and `floor`.
    #[inline]
    pub fn distance_to(&self, floor: u32) -> u32 {
        self.current_floor.abs_diff(floor)
    }
}
