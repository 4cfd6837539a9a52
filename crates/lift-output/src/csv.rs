//! CSV output backend.
//!
//! Creates `lift_events.csv` in the configured output directory.  Optional
//! columns are left empty when an event does not carry them.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// File name written inside the output directory.
pub const EVENTS_FILE: &str = "lift_events.csv";

/// Writes lifecycle events to a single CSV file.
pub struct CsvWriter {
    events:   Writer<File>,
    rows:     u64,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `lift_events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record([
            "seq",
            "lift_id",
            "event",
            "floor",
            "from_floor",
            "to_floor",
            "duration_ms",
        ])?;
        Ok(Self { events, rows: 0, finished: false })
    }

    /// Rows written so far, excluding the header.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl EventWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.seq.to_string(),
            row.lift_id.0.to_string(),
            row.event.to_owned(),
            row.floor.to_string(),
            opt(row.from_floor),
            opt(row.to_floor),
            opt(row.duration_ms),
        ])?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        log::debug!("{EVENTS_FILE}: {} rows flushed", self.rows);
        Ok(())
    }
}
