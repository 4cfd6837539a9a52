//! A pending request for a lift.

use std::fmt;

use crate::{LiftHooks, NoopHooks};

/// A request to send some lift to `floor_number`, with optional hooks that
/// fire only for this call.
///
/// Calls are immutable once submitted.
pub struct LiftCall {
    floor_number: u32,
    hooks:        Box<dyn LiftHooks>,
}

impl LiftCall {
    pub fn new(floor_number: u32) -> Self {
        Self {
            floor_number,
            hooks: Box::new(NoopHooks),
        }
    }

    /// Attach hooks that fire for this call before the simulation-wide ones.
    pub fn with_hooks(mut self, hooks: impl LiftHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    #[inline]
    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub(crate) fn into_hooks(self) -> Box<dyn LiftHooks> {
        self.hooks
    }
}

impl From<u32> for LiftCall {
    fn from(floor_number: u32) -> Self {
        LiftCall::new(floor_number)
    }
}

impl fmt::Debug for LiftCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiftCall")
            .field("floor_number", &self.floor_number)
            .finish_non_exhaustive()
    }
}
