//! `EventRecorder<W>` — bridges `LiftHooks` to an `EventWriter`.

use std::cell::RefCell;
use std::rc::Rc;

use lift_fleet::Lift;
use lift_sim::{HookResult, LiftEvent, LiftHooks};

use crate::row::EventRow;
use crate::writer::EventWriter;
use crate::{OutputError, OutputResult};

/// A [`LiftHooks`] implementation that turns every lifecycle event into an
/// [`EventRow`] and hands it to an [`EventWriter`] backend.
///
/// Write errors are stored rather than reported as hook failures, so a full
/// disk never shows up as a lift fault.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct EventRecorder<W: EventWriter> {
    writer:     W,
    next_seq:   u64,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, next_seq: 0, last_error: None }
    }

    /// Events recorded so far.
    pub fn recorded(&self) -> u64 {
        self.next_seq
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Any earlier stored error is returned first.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => result,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Wrap in a cloneable handle so the recorder can be installed as hooks
    /// and still be read afterwards.
    pub fn shared(self) -> SharedRecorder<W> {
        SharedRecorder(Rc::new(RefCell::new(self)))
    }

    fn record(&mut self, lift: &Lift, event: LiftEvent) -> HookResult {
        let row = EventRow::new(self.next_seq, lift, event);
        self.next_seq += 1;
        if let Err(e) = self.writer.write_event(&row) {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("event {} not written: {e}", row.seq);
                self.last_error = Some(e);
            }
        }
        Ok(())
    }
}

impl<W: EventWriter> LiftHooks for EventRecorder<W> {
    fn on_lift_move_start(&mut self, lift: &Lift, from: u32, to: u32, duration_ms: u64) -> HookResult {
        self.record(lift, LiftEvent::MoveStart { from_floor: from, to_floor: to, duration_ms })
    }

    fn on_lift_doors_open(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        self.record(lift, LiftEvent::DoorsOpen { duration_ms })
    }

    fn on_lift_doors_close(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        self.record(lift, LiftEvent::DoorsClose { duration_ms })
    }

    fn on_lift_move_end(&mut self, lift: &Lift, from: u32, to: u32) -> HookResult {
        self.record(lift, LiftEvent::MoveEnd { from_floor: from, to_floor: to })
    }
}

// ── SharedRecorder ────────────────────────────────────────────────────────────

/// Cloneable handle to an [`EventRecorder`].
///
/// The simulation owns its hooks, so install one clone with
/// `SimBuilder::hooks` and keep another to read the recorder back.
pub struct SharedRecorder<W: EventWriter>(Rc<RefCell<EventRecorder<W>>>);

impl<W: EventWriter> Clone for SharedRecorder<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W: EventWriter> SharedRecorder<W> {
    /// Run `f` against the recorder.
    pub fn with<R>(&self, f: impl FnOnce(&mut EventRecorder<W>) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    pub fn take_error(&self) -> Option<OutputError> {
        self.with(EventRecorder::take_error)
    }

    pub fn finish(&self) -> OutputResult<()> {
        self.with(EventRecorder::finish)
    }

    /// Recover the recorder once every other handle has been dropped.
    pub fn try_unwrap(self) -> Result<EventRecorder<W>, Self> {
        Rc::try_unwrap(self.0).map(RefCell::into_inner).map_err(Self)
    }
}

impl<W: EventWriter> LiftHooks for SharedRecorder<W> {
    fn on_lift_move_start(&mut self, lift: &Lift, from: u32, to: u32, duration_ms: u64) -> HookResult {
        self.0.borrow_mut().on_lift_move_start(lift, from, to, duration_ms)
    }

    fn on_lift_doors_open(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        self.0.borrow_mut().on_lift_doors_open(lift, duration_ms)
    }

    fn on_lift_doors_close(&mut self, lift: &Lift, duration_ms: u64) -> HookResult {
        self.0.borrow_mut().on_lift_doors_close(lift, duration_ms)
    }

    fn on_lift_move_end(&mut self, lift: &Lift, from: u32, to: u32) -> HookResult {
        self.0.borrow_mut().on_lift_move_end(lift, from, to)
    }
}
