//! Simulated facility distribution.
//!
//! A stand-in for missing live data: every kind is present with a small
//! probability, boosted near known urban centres and near the corridor
//! endpoints.  The draw is seeded per query location (see
//! [`sr_core::rng`]) so a given seed always produces the same tiling.

use sr_core::{Coordinate, FacilityCounts, FacilityKind, FacilityRng, WeightTable};

use crate::{FacilityResult, FacilityService};

// ── Config ────────────────────────────────────────────────────────────────────

/// A named town whose surroundings get more facilities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrbanAnchor {
    pub name:            String,
    pub center:          Coordinate,
    /// Half side of the square (degrees) treated as urban.
    pub half_extent_deg: f64,
    pub factor:          f64,
}

impl UrbanAnchor {
    pub fn new(
        name:            impl Into<String>,
        center:          Coordinate,
        half_extent_deg: f64,
        factor:          f64,
    ) -> Self {
        Self { name: name.into(), center, half_extent_deg, factor }
    }

    #[inline]
    pub fn covers(&self, at: Coordinate) -> bool {
        (at.lat - self.center.lat).abs() < self.half_extent_deg
            && (at.lon - self.center.lon).abs() < self.half_extent_deg
    }
}

/// Tuning for [`SimulatedFacilities`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Run seed.  Same seed, same facilities.
    pub seed:                   u64,
    /// Kinds that may be drawn.
    pub kinds:                  Vec<FacilityKind>,
    /// Presence probability of a point of interest before the urban boost.
    pub facility_probability:   f64,
    /// Presence probability of an area descriptor before the urban boost.
    pub area_probability:       f64,
    /// Counts are drawn from `1..=max` when present.
    pub facility_count_max:     u32,
    pub area_count_max:         u32,
    /// Degree distance to a corridor endpoint that counts as "on the route".
    pub corridor_proximity_deg: f64,
    pub corridor_factor:        f64,
    pub anchors:                Vec<UrbanAnchor>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed:                   0x5afe_0001,
            kinds:                  WeightTable::grid_default().iter().map(|(k, _)| k).collect(),
            facility_probability:   0.08,
            area_probability:       0.3,
            facility_count_max:     2,
            area_count_max:         3,
            corridor_proximity_deg: 0.05,
            corridor_factor:        2.5,
            anchors: vec![
                UrbanAnchor::new("Nadiad", Coordinate::from_lat_lon(22.70, 72.87), 0.1, 2.5),
                UrbanAnchor::new("Anand",  Coordinate::from_lat_lon(22.56, 72.93), 0.1, 2.5),
            ],
        }
    }
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Seeded random facility source for one corridor.
pub struct SimulatedFacilities {
    config:   SimulationConfig,
    corridor: Vec<Coordinate>,
}

impl SimulatedFacilities {
    /// `corridor` lists the points (typically origin and destination) near
    /// which cells count as urban.
    pub fn new(config: SimulationConfig, corridor: Vec<Coordinate>) -> Self {
        Self { config, corridor }
    }

    /// Density multiplier at `at`, never below 1.0.
    pub fn urban_factor(&self, at: Coordinate) -> f64 {
        let anchor = self
            .config
            .anchors
            .iter()
            .filter(|a| a.covers(at))
            .map(|a| a.factor)
            .fold(1.0_f64, f64::max);

        let near_corridor = self
            .corridor
            .iter()
            .any(|&p| p.degree_distance(at) < self.config.corridor_proximity_deg);

        if near_corridor { anchor.max(self.config.corridor_factor) } else { anchor }
    }

    fn base_probability(&self, kind: FacilityKind) -> f64 {
        if kind.is_area_descriptor() {
            self.config.area_probability
        } else {
            self.config.facility_probability
        }
    }

    /// Draw counts at `at`.  Pure function of (seed, location, config).
    pub fn draw(&self, at: Coordinate) -> FacilityCounts {
        let mut rng = FacilityRng::for_location(self.config.seed, at);
        let urban = self.urban_factor(at);
        let mut counts = FacilityCounts::new();

        for &kind in &self.config.kinds {
            if rng.gen_bool(self.base_probability(kind) * urban) {
                let max = if kind.is_area_descriptor() {
                    self.config.area_count_max
                } else {
                    self.config.facility_count_max
                };
                counts.add(kind, rng.gen_range(1..=max.max(1)));
            }
        }
        counts
    }
}

impl FacilityService for SimulatedFacilities {
    /// The simulated density is per cell, so `radius_m` is ignored.
    fn query_facilities(
        &self,
        center:    Coordinate,
        _radius_m: f64,
    ) -> FacilityResult<FacilityCounts> {
        Ok(self.draw(center))
    }
}
