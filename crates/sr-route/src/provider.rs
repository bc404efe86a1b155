//! Routing provider capability.

use sr_core::{Coordinate, TravelMode};

use crate::{RouteCandidate, RouteResult};

/// A directions backend.
///
/// `coords` is the full ordered list: origin, any waypoints, destination.
/// Implementations must be usable from several threads; the HTTP adapters
/// hold a blocking client with a per-call timeout.
pub trait RoutingProvider: Send + Sync {
    fn directions(&self, coords: &[Coordinate], mode: TravelMode) -> RouteResult<RouteCandidate>;
}

impl<P: RoutingProvider + ?Sized> RoutingProvider for Box<P> {
    fn directions(&self, coords: &[Coordinate], mode: TravelMode) -> RouteResult<RouteCandidate> {
        (**self).directions(coords, mode)
    }
}

impl<P: RoutingProvider + ?Sized> RoutingProvider for &P {
    fn directions(&self, coords: &[Coordinate], mode: TravelMode) -> RouteResult<RouteCandidate> {
        (**self).directions(coords, mode)
    }
}
