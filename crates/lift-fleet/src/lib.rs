//! `lift-fleet` — the lift entities and the two structures that feed them.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`lift`]       | `Lift` — per-car floor and moving flag                 |
//! | [`queue`]      | `CallQueue<C>` — FIFO of pending calls                 |
//! | [`dispatcher`] | `Dispatcher` trait, `NearestIdle` greedy selection     |

pub mod dispatcher;
pub mod lift;
pub mod queue;


pub use dispatcher::{Dispatcher, NearestIdle};
pub use lift::Lift;
pub use queue::CallQueue;
