//! Routing error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Place text could not be resolved.  Fatal for the request.
    #[error("geocoding failed: {0}")]
    Geocode(String),

    /// A single directions request failed.  The synthesizer skips it.
    #[error("routing provider failed: {0}")]
    Provider(String),

    /// Every synthesis attempt failed.
    #[error("no routes found")]
    NoRoutesFound,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
