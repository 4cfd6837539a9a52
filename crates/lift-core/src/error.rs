//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating core configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
