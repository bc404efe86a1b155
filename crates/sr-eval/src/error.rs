//! Engine-level error type.

use sr_core::CoreError;
use sr_grid::GridError;
use sr_route::RouteError;
use thiserror::Error;

/// Errors surfaced to the caller of a whole evaluation cycle.
///
/// Per-attempt routing failures and per-sample facility failures never reach
/// this level; they are logged and skipped where they happen.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    /// Origin or destination text could not be resolved.
    #[error("geocoding failed: {0}")]
    Geocode(String),

    /// Every route synthesis attempt failed.
    #[error("no routes found between origin and destination")]
    NoRoutesFound,

    #[error("routing error: {0}")]
    Route(RouteError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RouteError> for EngineError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::Geocode(msg) => EngineError::Geocode(msg),
            RouteError::NoRoutesFound => EngineError::NoRoutesFound,
            other => EngineError::Route(other),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
