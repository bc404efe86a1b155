//! Grid and facility error types.

use thiserror::Error;

/// Errors produced while building a grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid spec: {0}")]
    InvalidSpec(String),
}

pub type GridResult<T> = Result<T, GridError>;

/// Errors produced by facility services and directories.
///
/// Callers scoring a whole grid or route treat these as "zero facilities
/// here" and carry on; they are never fatal to an evaluation.
#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("facility query failed: {0}")]
    Query(String),

    #[error("facility directory HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("facility CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("facility parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FacilityResult<T> = Result<T, FacilityError>;
