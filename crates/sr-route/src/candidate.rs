//! Route geometry and candidates.

use sr_core::Coordinate;

/// A route geometry as an ordered list of coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polyline(Vec<Coordinate>);

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    /// Haversine length along the vertices, metres.
    pub fn length_m(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance_m(w[1])).sum()
    }

    /// At most `cap` indices spread evenly over the whole polyline.
    ///
    /// Index `i` is `round(i·(len−1)/(cap−1))`, so the first and last
    /// vertices are always sampled.  A polyline of `cap` points or fewer is
    /// sampled at every vertex.
    pub fn sample_indices(&self, cap: usize) -> Vec<usize> {
        let len = self.0.len();
        if cap == 0 || len == 0 {
            return Vec::new();
        }
        if len <= cap {
            return (0..len).collect();
        }
        if cap == 1 {
            return vec![0];
        }
        let span = (len - 1) as f64 / (cap - 1) as f64;
        (0..cap).map(|i| (i as f64 * span).round() as usize).collect()
    }

    /// The points at [`sample_indices`](Self::sample_indices).
    pub fn sample_evenly(&self, cap: usize) -> Vec<Coordinate> {
        self.sample_indices(cap).into_iter().map(|i| self.0[i]).collect()
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self(points)
    }
}

/// One route returned by a provider.  Read-only once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCandidate {
    pub polyline:   Polyline,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteCandidate {
    pub fn new(polyline: Polyline, distance_m: f64, duration_s: f64) -> Self {
        Self { polyline, distance_m, duration_s }
    }

    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    #[inline]
    pub fn duration_min(&self) -> f64 {
        self.duration_s / 60.0
    }

    /// Route length for density scoring: the reported distance, or the
    /// polyline length when the provider reported none.
    pub fn effective_length_m(&self) -> f64 {
        if self.distance_m > 0.0 { self.distance_m } else { self.polyline.length_m() }
    }
}
