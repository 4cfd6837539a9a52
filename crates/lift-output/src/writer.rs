//! The `EventWriter` trait and the in-memory backend.

use crate::{EventRow, OutputResult};

/// Trait implemented by every event backend.
///
/// Errors are surfaced to [`EventRecorder`][crate::EventRecorder], which keeps
/// the first one for the caller to collect with `take_error`.
pub trait EventWriter {
    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Keeps every row in memory.  Never fails.
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    rows:     Vec<EventRow>,
    finished: bool,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_rows(self) -> Vec<EventRow> {
        self.rows
    }
}

impl EventWriter for MemoryWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.rows.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
