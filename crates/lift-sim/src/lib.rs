//! `lift-sim` — dispatch engine for a bank of lifts.
//!
//! # Data flow
//!
//! ```text
//! call_lift(call) ─▶ CallQueue ─▶ loop tick ─▶ Dispatcher ─▶ MovementRun
//!                        ▲            │ none idle                │
//!                        └── retry ◀──┘                          ▼
//!                                          hooks: move_start, doors_open,
//!                                                 doors_close, move_end
//! ```
//!
//! The scheduling loop and every in-flight movement run are suspend/resume
//! units multiplexed on one thread through a timer queue.  Their only shared
//! state is the fleet; a lift with `is_moving` set is never dispatched, so no
//! two runs ever touch the same lift.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::{LiftCall, SimBuilder, FnHooks};
//!
//! let mut sim = SimBuilder::new(10, 2).build()?;
//! sim.call_lift(LiftCall::new(6).with_hooks(
//!     FnHooks::new().doors_open(|lift, _| println!("{} arrived", lift.id)),
//! ))?;
//! sim.run_until_settled();
//! ```

pub mod builder;
pub mod call;
pub mod error;
pub mod hooks;
pub mod movement;
pub mod sim;


pub use builder::SimBuilder;
pub use call::LiftCall;
pub use error::{HookError, HookResult, SimError, SimResult};
pub use hooks::{ChainedHooks, FnHooks, LiftEvent, LiftHooks, LiftHooksExt, NoopHooks};
pub use movement::{MovementPhase, MovementRun, MovementTiming, RunStep};
pub use sim::{SimStatus, Simulation};

pub use lift_core::{LiftId, SimConfig, SimTime};
pub use lift_fleet::{Dispatcher, Lift, NearestIdle};
