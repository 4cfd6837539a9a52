//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! Every other `lift-*` crate depends on this one.  It has no `lift-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `LiftId`                                          |
//! | [`time`]    | `SimTime`, `SimClock`                             |
//! | [`config`]  | `SimConfig` and the default timing constants      |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    SimConfig, DEFAULT_DOOR_CLOSE_MS, DEFAULT_DOOR_OPEN_MS, DEFAULT_LIFT_FLOOR,
    DEFAULT_LIFT_SPEED_PER_FLOOR_MS, DEFAULT_LOOP_INTERVAL_MS,
};
pub use error::{CoreError, CoreResult};
pub use ids::LiftId;
pub use time::{SimClock, SimTime};
