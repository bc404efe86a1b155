//! Place-text resolution.

use sr_core::Coordinate;

use crate::{RouteError, RouteResult};

/// Resolves user-entered place text to a coordinate.
pub trait Geocoder: Send + Sync {
    /// Free-text lookup (no literal handling).
    fn lookup(&self, text: &str) -> RouteResult<Coordinate>;

    /// Accept a `"lat,lon"` literal first, otherwise [`lookup`](Self::lookup).
    fn resolve(&self, text: &str) -> RouteResult<Coordinate> {
        match parse_lat_lon(text) {
            Some(at) => Ok(at),
            None => self.lookup(text),
        }
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn lookup(&self, text: &str) -> RouteResult<Coordinate> {
        (**self).lookup(text)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn lookup(&self, text: &str) -> RouteResult<Coordinate> {
        (**self).lookup(text)
    }
}

/// Parse `"lat,lon"` (whitespace allowed around either number).
///
/// Returns `None` for anything else, including out-of-range values.
pub fn parse_lat_lon(text: &str) -> Option<Coordinate> {
    let (lat, lon) = text.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    let at = Coordinate::from_lat_lon(lat, lon);
    (at.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0).then_some(at)
}

/// Geocoder that only understands coordinate literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralGeocoder;

impl Geocoder for LiteralGeocoder {
    fn lookup(&self, text: &str) -> RouteResult<Coordinate> {
        Err(RouteError::Geocode(format!("place {text:?} not found (expected \"lat,lon\")")))
    }
}
