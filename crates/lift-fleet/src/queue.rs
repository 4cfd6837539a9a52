//! `CallQueue` — FIFO of calls waiting for a lift.
//!
//! No re-ordering, no priority and no de-duplication: the same floor may be
//! queued any number of times.  Floor validation happens before a call gets
//! here.

use std::collections::VecDeque;

/// Ordered collection of pending calls.
#[derive(Debug)]
pub struct CallQueue<C> {
    calls: VecDeque<C>,
}

impl<C> Default for CallQueue<C> {
    fn default() -> Self {
        Self { calls: VecDeque::new() }
    }
}

impl<C> CallQueue<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `call` to the tail.
    pub fn enqueue(&mut self, call: C) {
        self.calls.push_back(call);
    }

    /// The oldest pending call, without removing it.
    pub fn peek_head(&self) -> Option<&C> {
        self.calls.front()
    }

    /// Remove the oldest pending call once a lift has been committed to it.
    pub fn remove_head(&mut self) -> Option<C> {
        self.calls.pop_front()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Pending calls, head first.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.calls.iter()
    }
}
