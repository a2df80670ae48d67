//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `StError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The error type for `st-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum StError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `st-core`.
pub type StResult<T> = Result<T, StError>;
