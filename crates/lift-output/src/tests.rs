//! Integration tests for lift-output.

use std::io;

use lift_core::LiftId;
use lift_fleet::Lift;
use lift_sim::{LiftCall, LiftEvent, LiftHooks, LiftHooksExt, SimBuilder, Simulation};

use crate::{EventRecorder, EventRow, EventWriter, MemoryWriter, OutputError, OutputResult};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn quick_sim(floors: u32, lifts: u32, hooks: impl LiftHooks + 'static) -> Simulation {
    SimBuilder::new(floors, lifts)
        .lift_speed_per_floor_ms(1_000)
        .door_open_ms(500)
        .door_close_ms(500)
        .hooks(hooks)
        .build()
        .unwrap()
}

/// Accepts `ok_rows` rows, then fails every write.
struct FlakyWriter {
    ok_rows: usize,
    written: usize,
}

impl EventWriter for FlakyWriter {
    fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
        if self.written >= self.ok_rows {
            return Err(OutputError::Io(io::Error::other("disk full")));
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

// ── EventRow ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn move_start_carries_floors_and_duration() {
        let lift = Lift { id: LiftId(2), current_floor: 4, is_moving: true };
        let row = EventRow::new(7, &lift, LiftEvent::MoveStart { from_floor: 4, to_floor: 1, duration_ms: 6_000 });
        assert_eq!(
            row,
            EventRow {
                seq:         7,
                lift_id:     LiftId(2),
                event:       "move_start",
                floor:       4,
                from_floor:  Some(4),
                to_floor:    Some(1),
                duration_ms: Some(6_000),
            }
        );
    }

    #[test]
    fn door_rows_have_no_floors() {
        let lift = Lift::new(LiftId(0));
        let row = EventRow::new(0, &lift, LiftEvent::DoorsClose { duration_ms: 900 });
        assert_eq!(row.event, "doors_close");
        assert_eq!((row.from_floor, row.to_floor, row.duration_ms), (None, None, Some(900)));
    }

    #[test]
    fn move_end_has_no_duration() {
        let lift = Lift::new(LiftId(0));
        let row = EventRow::new(3, &lift, LiftEvent::MoveEnd { from_floor: 1, to_floor: 1 });
        assert_eq!(row.duration_ms, None);
        assert_eq!(row.to_floor, Some(1));
    }
}

// ── EventRecorder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod recorder_tests {
    use super::*;

    #[test]
    fn records_full_lifecycle_in_order() {
        let recorder = EventRecorder::new(MemoryWriter::new()).shared();
        let mut sim = quick_sim(3, 1, recorder.clone());
        sim.call_lift(LiftCall::new(3)).unwrap();
        sim.run_until_settled();
        drop(sim);

        let recorder = recorder.try_unwrap().ok().unwrap();
        assert_eq!(recorder.recorded(), 4);
        let rows = recorder.into_writer().into_rows();
        let summary: Vec<(u64, &str, u32)> = rows.iter().map(|r| (r.seq, r.event, r.floor)).collect();
        assert_eq!(
            summary,
            vec![(0, "move_start", 1), (1, "doors_open", 3), (2, "doors_close", 3), (3, "move_end", 3)]
        );
        assert_eq!(rows[0].duration_ms, Some(2_000));
        assert_eq!(rows[1].duration_ms, Some(500));
    }

    #[test]
    fn rows_tag_the_serving_lift() {
        let recorder = EventRecorder::new(MemoryWriter::new()).shared();
        let mut sim = quick_sim(4, 2, recorder.clone());
        sim.call_lift(LiftCall::new(4)).unwrap();
        sim.call_lift(LiftCall::new(2)).unwrap();
        sim.run_until_settled();

        let starts: Vec<(LiftId, Option<u32>)> = recorder.with(|r| {
            r.writer()
                .rows()
                .iter()
                .filter(|row| row.event == "move_start")
                .map(|row| (row.lift_id, row.to_floor))
                .collect()
        });
        assert_eq!(starts, vec![(LiftId(0), Some(4)), (LiftId(1), Some(2))]);
    }

    #[test]
    fn write_errors_are_stored_not_raised() {
        let recorder = EventRecorder::new(FlakyWriter { ok_rows: 2, written: 0 }).shared();
        let mut sim = quick_sim(3, 1, recorder.clone());
        sim.call_lift(LiftCall::new(2)).unwrap();
        sim.run_until_settled();

        assert_eq!(sim.hook_failures(), 0, "writer errors are not hook failures");
        assert_eq!(sim.completed_calls(), 1);
        assert_eq!(recorder.with(|r| r.recorded()), 4);
        assert!(matches!(recorder.take_error(), Some(OutputError::Io(_))));
        assert!(recorder.take_error().is_none(), "only the first error is kept");
    }

    #[test]
    fn finish_reports_stored_error() {
        let mut recorder = EventRecorder::new(FlakyWriter { ok_rows: 0, written: 0 });
        let lift = Lift::new(LiftId(0));
        recorder.on_lift_doors_open(&lift, 10).unwrap();
        assert!(recorder.finish().is_err());
        assert!(recorder.finish().is_ok());
    }

    #[test]
    fn recorder_chains_with_other_hooks() {
        let first = EventRecorder::new(MemoryWriter::new()).shared();
        let second = EventRecorder::new(MemoryWriter::new()).shared();
        let mut sim = quick_sim(2, 1, first.clone().then(second.clone()));
        sim.call_lift(LiftCall::new(2)).unwrap();
        sim.run_until_settled();

        let a = first.with(|r| r.writer().rows().to_vec());
        let b = second.with(|r| r.writer().rows().to_vec());
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn memory_writer_finish_marks_finished() {
        let recorder = EventRecorder::new(MemoryWriter::new()).shared();
        recorder.finish().unwrap();
        assert!(recorder.with(|r| r.writer().is_finished()));
    }
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvWriter, EVENTS_FILE};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_records(dir: &TempDir) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("lift_events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["seq", "lift_id", "event", "floor", "from_floor", "to_floor", "duration_ms"]
        );
    }

    #[test]
    fn csv_leaves_absent_columns_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let lift = Lift { id: LiftId(1), current_floor: 5, is_moving: true };
        w.write_event(&EventRow::new(0, &lift, LiftEvent::DoorsOpen { duration_ms: 2_500 })).unwrap();
        w.finish().unwrap();
        assert_eq!(w.rows_written(), 1);

        let rows = read_records(&dir);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "1"); // lift_id
        assert_eq!(&rows[0][2], "doors_open");
        assert_eq!(&rows[0][3], "5"); // floor
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[0][5], "");
        assert_eq!(&rows[0][6], "2500");
    }

    #[test]
    fn csv_records_a_whole_run() {
        let dir = tmp();
        let recorder = EventRecorder::new(CsvWriter::new(dir.path()).unwrap()).shared();
        let mut sim = quick_sim(5, 2, recorder.clone());
        for floor in [5, 3, 1] {
            sim.call_lift(LiftCall::new(floor)).unwrap();
        }
        sim.run_until_settled();
        recorder.finish().unwrap();

        let rows = read_records(&dir);
        assert_eq!(rows.len(), 12);
        let seqs: Vec<u64> = rows.iter().map(|r| r[0].parse().unwrap()).collect();
        assert_eq!(seqs, (0..12).collect::<Vec<u64>>());
        let ends = rows.iter().filter(|r| &r[2] == "move_end").count();
        assert_eq!(ends, 3);
    }

    #[test]
    fn csv_finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_io_or_csv_error() {
        let dir = tmp();
        let missing = dir.path().join("nope");
        let err = CsvWriter::new(&missing).err().unwrap();
        assert!(matches!(err, OutputError::Csv(_) | OutputError::Io(_)));
    }
}
