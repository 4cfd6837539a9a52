//! `lift-schedule` — the "wait N milliseconds, then resume" primitive.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`wake_queue`] | `WakeQueue<W>` (`BTreeMap<SimTime, VecDeque<W>>`)     |
//! | [`pacer`]      | `Pacer` trait, `VirtualPacer`, `WallClockPacer`       |
//!
//! # Suspension model
//!
//! A unit of work that wants to sleep registers a wake-up token at
//! `now + delay` and returns.  The simulation repeatedly pops the earliest
//! due token, moves the clock to its instant, and resumes the owner.  The
//! [`Pacer`] decides whether that jump in simulated time also costs real
//! time.

pub mod pacer;
pub mod wake_queue;

#[cfg(test)]
mod tests;

pub use pacer::{Pacer, VirtualPacer, WallClockPacer};
pub use wake_queue::WakeQueue;
