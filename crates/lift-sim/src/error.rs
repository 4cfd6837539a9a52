use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("floor {floor} is outside 1..={number_of_floors}")]
    InvalidFloor { floor: u32, number_of_floors: u32 },
}

pub type SimResult<T> = Result<T, SimError>;

/// Failure reported by a lifecycle hook.
///
/// Hook failures never stop a lift: the simulation logs them, counts them,
/// and carries on with the remaining hooks and phases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("lifecycle hook failed: {0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type HookResult = Result<(), HookError>;
