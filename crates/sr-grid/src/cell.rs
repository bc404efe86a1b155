//! A single hexagonal cell.

use sr_core::{Coordinate, FacilityCounts, hexagon_vertices, point_in_polygon};

/// One hexagon of a [`HexGrid`](crate::HexGrid).
///
/// Created unscored by the grid builder, assigned exactly once by
/// [`FacilityScorer`](crate::FacilityScorer), read-only afterwards.  Use
/// [`HexCell::scored`] to build an already-scored cell directly (fixtures,
/// replayed tilings).
#[derive(Clone, Debug, PartialEq)]
pub struct HexCell {
    center:          Coordinate,
    vertices:        [Coordinate; 6],
    facility_counts: FacilityCounts,
    safety_score:    f64,
    assigned:        bool,
}

impl HexCell {
    /// An unscored regular hexagon of vertex radius `radius_lat` degrees.
    pub fn new(center: Coordinate, radius_lat: f64) -> Self {
        Self {
            center,
            vertices:        hexagon_vertices(center, radius_lat, radius_lat),
            facility_counts: FacilityCounts::new(),
            safety_score:    0.0,
            assigned:        false,
        }
    }

    /// A cell that already carries its counts and score.
    pub fn scored(center: Coordinate, radius_lat: f64, counts: FacilityCounts, score: f64) -> Self {
        let mut cell = Self::new(center, radius_lat);
        cell.assign(counts, score);
        cell
    }

    /// Record the scorer's result.  Only the first call has an effect.
    pub(crate) fn assign(&mut self, counts: FacilityCounts, score: f64) {
        debug_assert!(!self.assigned, "hex cell scored twice");
        if self.assigned {
            return;
        }
        self.facility_counts = counts;
        self.safety_score = score;
        self.assigned = true;
    }

    #[inline]
    pub fn center(&self) -> Coordinate {
        self.center
    }

    #[inline]
    pub fn vertices(&self) -> &[Coordinate; 6] {
        &self.vertices
    }

    #[inline]
    pub fn facility_counts(&self) -> &FacilityCounts {
        &self.facility_counts
    }

    #[inline]
    pub fn safety_score(&self) -> f64 {
        self.safety_score
    }

    /// `true` once the scorer has visited this cell.
    #[inline]
    pub fn is_scored(&self) -> bool {
        self.assigned
    }

    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Ground distance from the centre to a vertex, metres.
    pub fn circumradius_m(&self) -> f64 {
        self.center.distance_m(self.vertices[0])
    }

    /// Degree-space bounding box as `([min_lon, min_lat], [max_lon, max_lat])`.
    pub fn bbox(&self) -> ([f64; 2], [f64; 2]) {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for v in &self.vertices {
            min[0] = min[0].min(v.lon);
            min[1] = min[1].min(v.lat);
            max[0] = max[0].max(v.lon);
            max[1] = max[1].max(v.lat);
        }
        (min, max)
    }
}
