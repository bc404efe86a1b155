//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`GridError`, `RouteError`, …) and
//! `sr-eval` folds them together with `#[from]` conversions.

use thiserror::Error;

/// Errors raised by `sr-core` parsing and configuration helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `sr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
