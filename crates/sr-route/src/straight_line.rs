//! Straight-line routing (fallback when no routing backend is reachable).
//!
//! Joins the requested coordinates with straight legs in degree space and
//! estimates the duration from the mode's typical speed.  Less accurate
//! than a road network but always available, and waypoint detours still
//! produce distinct distances.

use sr_core::{Coordinate, TravelMode};

use crate::{Polyline, RouteCandidate, RouteError, RouteResult, RoutingProvider};

#[derive(Debug, Clone)]
pub struct StraightLineRouter {
    /// Interpolated segments per leg.
    pub points_per_leg: usize,
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self { points_per_leg: 16 }
    }
}

impl StraightLineRouter {
    pub fn new(points_per_leg: usize) -> Self {
        Self { points_per_leg: points_per_leg.max(1) }
    }
}

impl RoutingProvider for StraightLineRouter {
    fn directions(&self, coords: &[Coordinate], mode: TravelMode) -> RouteResult<RouteCandidate> {
        if coords.len() < 2 {
            return Err(RouteError::Provider(format!(
                "need at least 2 coordinates, got {}",
                coords.len()
            )));
        }
        if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(RouteError::Provider(format!("non-finite coordinate {bad:?}")));
        }

        let n = self.points_per_leg.max(1);
        let mut points = Vec::with_capacity((coords.len() - 1) * n + 1);
        points.push(coords[0]);
        for leg in coords.windows(2) {
            let (a, b) = (leg[0], leg[1]);
            for i in 1..=n {
                let t = i as f64 / n as f64;
                points.push(Coordinate::new(
                    a.lon + (b.lon - a.lon) * t,
                    a.lat + (b.lat - a.lat) * t,
                ));
            }
        }

        let polyline = Polyline::new(points);
        let distance_m = polyline.length_m();
        Ok(RouteCandidate::new(polyline, distance_m, distance_m / mode.speed_mps()))
    }
}
