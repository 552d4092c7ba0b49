//! Core error type.

use thiserror::Error;

/// Errors produced by `ao-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown output key {0:?}")]
    UnknownKey(String),

    #[error("output request {0:?} is not of the form key=value")]
    BadRequest(String),
}

/// Shorthand result type for `ao-core`.
pub type CoreResult<T> = Result<T, CoreError>;
