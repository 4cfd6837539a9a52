//! Simulation configuration.
//!
//! Floor and lift counts are fixed for the lifetime of a simulation.  The
//! timing values fall back to the defaults below when an application does
//! not set them (a JSON config file may simply omit them).

use crate::{CoreError, CoreResult};

/// Time for a lift to travel one floor.
pub const DEFAULT_LIFT_SPEED_PER_FLOOR_MS: u64 = 2_000;
/// Time the doors stay in the opening phase.
pub const DEFAULT_DOOR_OPEN_MS: u64 = 2_500;
/// Time the doors stay in the closing phase.
pub const DEFAULT_DOOR_CLOSE_MS: u64 = 2_500;
/// Scheduling loop poll interval.
pub const DEFAULT_LOOP_INTERVAL_MS: u64 = 100;
/// Every lift starts on the lowest floor.
pub const DEFAULT_LIFT_FLOOR: u32 = 1;

/// Top-level simulation configuration.
///
/// Typically built in code by the application or loaded from a JSON file
/// (with the `serde` feature) and handed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Floors are numbered `1..=number_of_floors`.  Must be at least 1.
    pub number_of_floors: u32,

    /// Size of the fleet.  Must be at least 1.
    pub number_of_lifts: u32,

    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub lift_speed_per_floor_ms: u64,

    #[cfg_attr(feature = "serde", serde(default = "default_door_open"))]
    pub door_open_ms: u64,

    #[cfg_attr(feature = "serde", serde(default = "default_door_close"))]
    pub door_close_ms: u64,

    /// Delay between scheduling loop ticks.  Must be non-zero.
    #[cfg_attr(feature = "serde", serde(default = "default_loop_interval"))]
    pub loop_interval_ms: u64,
}

impl SimConfig {
    /// Configuration with the given building shape and default timings.
    pub fn new(number_of_floors: u32, number_of_lifts: u32) -> Self {
        Self {
            number_of_floors,
            number_of_lifts,
            ..Self::default()
        }
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.number_of_floors == 0 {
            return Err(CoreError::Config("number_of_floors must be at least 1".into()));
        }
        if self.number_of_lifts == 0 {
            return Err(CoreError::Config("number_of_lifts must be at least 1".into()));
        }
        if self.loop_interval_ms == 0 {
            return Err(CoreError::Config("loop_interval_ms must be non-zero".into()));
        }
        Ok(())
    }

    /// `true` if `floor` is a real floor of this building.
    #[inline]
    pub fn is_valid_floor(&self, floor: u32) -> bool {
        (1..=self.number_of_floors).contains(&floor)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            number_of_floors:        1,
            number_of_lifts:         1,
            lift_speed_per_floor_ms: DEFAULT_LIFT_SPEED_PER_FLOOR_MS,
            door_open_ms:            DEFAULT_DOOR_OPEN_MS,
            door_close_ms:           DEFAULT_DOOR_CLOSE_MS,
            loop_interval_ms:        DEFAULT_LOOP_INTERVAL_MS,
        }
    }
}

#[cfg(feature = "serde")]
fn default_speed() -> u64 {
    DEFAULT_LIFT_SPEED_PER_FLOOR_MS
}

#[cfg(feature = "serde")]
fn default_door_open() -> u64 {
    DEFAULT_DOOR_OPEN_MS
}

#[cfg(feature = "serde")]
fn default_door_close() -> u64 {
    DEFAULT_DOOR_CLOSE_MS
}

#[cfg(feature = "serde")]
fn default_loop_interval() -> u64 {
    DEFAULT_LOOP_INTERVAL_MS
}
