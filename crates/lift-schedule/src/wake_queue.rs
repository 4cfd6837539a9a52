//! `WakeQueue` — sparse timer queue keyed by simulated instant.
//!
//! Each suspended unit of work (the scheduling loop, or one lift's movement
//! run) registers the instant at which it must resume.  The simulation drains
//! entries strictly in time order; entries sharing an instant come out in the
//! order they were pushed.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! pending instants.  With one loop timer plus at most one timer per lift, W
//! stays tiny.

use std::collections::{BTreeMap, VecDeque};

use lift_core::SimTime;

/// A priority queue mapping simulated instants → tokens due at that instant.
pub struct WakeQueue<W> {
    inner: BTreeMap<SimTime, VecDeque<W>>,
    /// Cached total token count for O(1) `len()`.
    total: usize,
}

impl<W> Default for WakeQueue<W> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<W> WakeQueue<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `token` to resume at `at`.
    pub fn push(&mut self, at: SimTime, token: W) {
        self.inner.entry(at).or_default().push_back(token);
        self.total += 1;
    }

    /// Remove and return the earliest token due at or before `until`.
    ///
    /// Returns `None` when nothing is due yet.
    pub fn pop_due(&mut self, until: SimTime) -> Option<(SimTime, W)> {
        let mut entry = self.inner.first_entry()?;
        let at = *entry.key();
        if at > until {
            return None;
        }
        let token = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.total -= 1;
        Some((at, token))
    }

    /// Remove and return the earliest token regardless of its instant.
    pub fn pop_next(&mut self) -> Option<(SimTime, W)> {
        let next = self.next_due()?;
        self.pop_due(next)
    }

    /// The earliest instant with at least one queued token, or `None` if empty.
    pub fn next_due(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued tokens across all instants.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct instants that have at least one queued token.
    pub fn instant_count(&self) -> usize {
        self.inner.len()
    }
}
