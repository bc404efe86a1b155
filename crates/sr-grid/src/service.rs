//! Facility capability traits.
//!
//! # Pluggability
//!
//! Scoring talks to facilities through [`FacilityService`], so the engine can
//! run against simulated data, a live directory, or a test double without
//! changing the scorer.  Live sources implement the lower-level
//! [`FacilityDirectory`] (individual records with stable ids) and are wrapped
//! in [`LiveFacilities`](crate::LiveFacilities) to get deduplicated counts.
//!
//! # Thread safety
//!
//! Both traits require `Send + Sync` so a directory can be queried from the
//! bounded worker pool used for per-sample live surveys.

use sr_core::{Coordinate, FacilityCounts, FacilityKind};

use crate::FacilityResult;

/// Anything that can tally facilities around a point.
pub trait FacilityService: Send + Sync {
    /// Count facilities per kind within `radius_m` metres of `center`.
    fn query_facilities(&self, center: Coordinate, radius_m: f64) -> FacilityResult<FacilityCounts>;
}

impl<S: FacilityService + ?Sized> FacilityService for Box<S> {
    fn query_facilities(
        &self,
        center:   Coordinate,
        radius_m: f64,
    ) -> FacilityResult<FacilityCounts> {
        (**self).query_facilities(center, radius_m)
    }
}

impl<S: FacilityService + ?Sized> FacilityService for &S {
    fn query_facilities(
        &self,
        center:   Coordinate,
        radius_m: f64,
    ) -> FacilityResult<FacilityCounts> {
        (**self).query_facilities(center, radius_m)
    }
}

/// One facility returned by a directory.
#[derive(Clone, Debug, PartialEq)]
pub struct FacilityRecord {
    /// Stable identifier, unique within the directory.  Used to avoid
    /// counting the same place twice when search circles overlap.
    pub id:       String,
    pub kind:     FacilityKind,
    pub location: Coordinate,
}

/// External places/amenities source (live strategy only).
pub trait FacilityDirectory: Send + Sync {
    /// Records of any of `kinds` within `radius_m` metres of `center`.
    fn nearby(
        &self,
        center:   Coordinate,
        radius_m: f64,
        kinds:    &[FacilityKind],
    ) -> FacilityResult<Vec<FacilityRecord>>;
}

impl<D: FacilityDirectory + ?Sized> FacilityDirectory for Box<D> {
    fn nearby(
        &self,
        center:   Coordinate,
        radius_m: f64,
        kinds:    &[FacilityKind],
    ) -> FacilityResult<Vec<FacilityRecord>> {
        (**self).nearby(center, radius_m, kinds)
    }
}

impl<D: FacilityDirectory + ?Sized> FacilityDirectory for &D {
    fn nearby(
        &self,
        center:   Coordinate,
        radius_m: f64,
        kinds:    &[FacilityKind],
    ) -> FacilityResult<Vec<FacilityRecord>> {
        (**self).nearby(center, radius_m, kinds)
    }
}
