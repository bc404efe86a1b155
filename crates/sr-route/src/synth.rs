//! Waypoint-perturbation route synthesis.
//!
//! # Algorithm
//!
//! 1. **Wave one.**  A direct request, then `max_routes − 1` requests that
//!    each inject one waypoint beside the origin, alternating east and west
//!    and stepping further out every pair.  A success is accepted when its
//!    distance differs from every accepted candidate by at least
//!    `dedup_threshold_m`; the first success is always accepted.
//! 2. **Wave two.**  Only while short of `max_routes`: waypoints north-east,
//!    north-west and north of the corridor midpoint, checked against
//!    `second_wave_threshold_m`.
//! 3. **Fallback.**  If nothing was accepted, one more direct request whose
//!    result is taken unconditionally.
//!
//! Waypoint offsets scale with [`TravelMode::waypoint_offset_deg`].  A
//! failed attempt is logged and skipped; only a synthesis in which every
//! attempt failed returns [`RouteError::NoRoutesFound`].

use sr_core::{Coordinate, TravelMode};

use crate::{RouteCandidate, RouteError, RouteResult, RoutingProvider};

/// Latitude share of the origin offset in wave one.
const WAVE_ONE_LAT_FACTOR: f64 = 0.6;

/// Longitude multiple of the offset for the north-east/north-west midpoint
/// waypoints, and latitude multiple for the north one.
const WAVE_TWO_SPREAD: f64 = 1.6;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynthesisConfig {
    pub max_routes:              usize,
    pub dedup_threshold_m:       f64,
    pub second_wave_threshold_m: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_routes:              3,
            dedup_threshold_m:       50.0,
            second_wave_threshold_m: 100.0,
        }
    }
}

/// Generates up to `max_routes` distinct candidates from one provider.
pub struct RouteSynthesizer<'a, P: ?Sized> {
    provider: &'a P,
    config:   SynthesisConfig,
}

impl<'a, P: RoutingProvider + ?Sized> RouteSynthesizer<'a, P> {
    pub fn new(provider: &'a P, config: SynthesisConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Waypoint for wave-one attempt `i` (`i ≥ 1`).
    pub fn origin_waypoint(origin: Coordinate, i: usize, mode: TravelMode) -> Coordinate {
        let off = mode.waypoint_offset_deg();
        let k = i.div_ceil(2) as f64;
        let sign = if i % 2 == 1 { 1.0 } else { -1.0 };
        origin.offset(sign * k * off, WAVE_ONE_LAT_FACTOR * k * off)
    }

    /// The three wave-two waypoints around the corridor midpoint.
    pub fn midpoint_waypoints(
        origin:      Coordinate,
        destination: Coordinate,
        mode:        TravelMode,
    ) -> [Coordinate; 3] {
        let off = mode.waypoint_offset_deg();
        let mid = origin.midpoint(destination);
        [
            mid.offset(WAVE_TWO_SPREAD * off, off),
            mid.offset(-WAVE_TWO_SPREAD * off, off),
            mid.offset(0.0, WAVE_TWO_SPREAD * off),
        ]
    }

    pub fn synthesize(
        &self,
        origin:      Coordinate,
        destination: Coordinate,
        mode:        TravelMode,
    ) -> RouteResult<Vec<RouteCandidate>> {
        let max_routes = self.config.max_routes.max(1);
        let mut accepted: Vec<RouteCandidate> = Vec::with_capacity(max_routes);

        // ── Wave one ──────────────────────────────────────────────────────
        for i in 0..max_routes {
            let waypoint = (i > 0).then(|| Self::origin_waypoint(origin, i, mode));
            if let Some(candidate) = self.attempt(origin, waypoint, destination, mode) {
                if accepted.is_empty()
                    || is_distinct(&accepted, &candidate, self.config.dedup_threshold_m)
                {
                    accepted.push(candidate);
                } else {
                    tracing::debug!(
                        attempt = i,
                        distance_m = candidate.distance_m,
                        "route too similar to an accepted one; skipped"
                    );
                }
            }
        }

        // ── Wave two ──────────────────────────────────────────────────────
        if accepted.len() < max_routes {
            for waypoint in Self::midpoint_waypoints(origin, destination, mode) {
                if accepted.len() >= max_routes {
                    break;
                }
                if let Some(candidate) = self.attempt(origin, Some(waypoint), destination, mode) {
                    if is_distinct(&accepted, &candidate, self.config.second_wave_threshold_m) {
                        accepted.push(candidate);
                    } else {
                        tracing::debug!(
                            distance_m = candidate.distance_m,
                            "midpoint route too similar; skipped"
                        );
                    }
                }
            }
        }

        // ── Fallback ──────────────────────────────────────────────────────
        if accepted.is_empty() {
            if let Some(candidate) = self.attempt(origin, None, destination, mode) {
                accepted.push(candidate);
            }
        }

        if accepted.is_empty() {
            return Err(RouteError::NoRoutesFound);
        }
        accepted.truncate(max_routes);
        tracing::debug!(routes = accepted.len(), %mode, "route synthesis complete");
        Ok(accepted)
    }

    fn attempt(
        &self,
        origin:      Coordinate,
        waypoint:    Option<Coordinate>,
        destination: Coordinate,
        mode:        TravelMode,
    ) -> Option<RouteCandidate> {
        let coords: Vec<Coordinate> =
            std::iter::once(origin).chain(waypoint).chain([destination]).collect();
        match self.provider.directions(&coords, mode) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                match waypoint {
                    Some(w) => tracing::warn!("route via {w} failed: {e}"),
                    None => tracing::warn!("direct route failed: {e}"),
                }
                None
            }
        }
    }
}

fn is_distinct(accepted: &[RouteCandidate], candidate: &RouteCandidate, threshold_m: f64) -> bool {
    accepted
        .iter()
        .all(|a| (a.distance_m - candidate.distance_m).abs() >= threshold_m)
}
