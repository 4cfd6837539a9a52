//! `lift-output` — lifecycle event recording for the lift dispatch simulator.
//!
//! | Writer         | Destination                               |
//! |----------------|-------------------------------------------|
//! | `MemoryWriter` | an in-memory `Vec<EventRow>`              |
//! | `CsvWriter`    | `lift_events.csv` in the chosen directory |
//!
//! Both implement [`EventWriter`] and are driven by [`EventRecorder`], which
//! implements `lift_sim::LiftHooks` and can be installed as the global hooks
//! or chained with others.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, EventRecorder};
//!
//! let recorder = EventRecorder::new(CsvWriter::new(Path::new("./output"))?);
//! let mut sim = SimBuilder::new(10, 3).hooks(recorder).build()?;
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{CsvWriter, EVENTS_FILE};
pub use error::{OutputError, OutputResult};
pub use recorder::{EventRecorder, SharedRecorder};
pub use row::EventRow;
pub use writer::{EventWriter, MemoryWriter};
