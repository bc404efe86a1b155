//! Facility kinds and per-kind tallies.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, WeightTable};

/// A category of public place that contributes to a safety score.
///
/// The last four variants are *area descriptors* (lighting, footfall, land
/// use) rather than points of interest.  Only the simulated strategy
/// produces them; live directories report points of interest only.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FacilityKind {
    Police,
    Hospital,
    FireStation,
    School,
    College,
    University,
    Bank,
    Atm,
    Pharmacy,
    Library,
    BusStop,
    TrainStation,
    MetroStation,
    PlaceOfWorship,
    Park,
    Hotel,
    GovernmentOffice,
    ShoppingMall,
    Restaurant,
    WellLitArea,
    HighTraffic,
    ResidentialArea,
    CommercialArea,
}

impl FacilityKind {
    /// Every kind, in declaration order.
    pub const ALL: [FacilityKind; 23] = [
        FacilityKind::Police,
        FacilityKind::Hospital,
        FacilityKind::FireStation,
        FacilityKind::School,
        FacilityKind::College,
        FacilityKind::University,
        FacilityKind::Bank,
        FacilityKind::Atm,
        FacilityKind::Pharmacy,
        FacilityKind::Library,
        FacilityKind::BusStop,
        FacilityKind::TrainStation,
        FacilityKind::MetroStation,
        FacilityKind::PlaceOfWorship,
        FacilityKind::Park,
        FacilityKind::Hotel,
        FacilityKind::GovernmentOffice,
        FacilityKind::ShoppingMall,
        FacilityKind::Restaurant,
        FacilityKind::WellLitArea,
        FacilityKind::HighTraffic,
        FacilityKind::ResidentialArea,
        FacilityKind::CommercialArea,
    ];

    /// Stable snake_case name, used in CSV files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            FacilityKind::Police           => "police",
            FacilityKind::Hospital         => "hospital",
            FacilityKind::FireStation      => "fire_station",
            FacilityKind::School           => "school",
            FacilityKind::College          => "college",
            FacilityKind::University       => "university",
            FacilityKind::Bank             => "bank",
            FacilityKind::Atm              => "atm",
            FacilityKind::Pharmacy         => "pharmacy",
            FacilityKind::Library          => "library",
            FacilityKind::BusStop          => "bus_stop",
            FacilityKind::TrainStation     => "train_station",
            FacilityKind::MetroStation     => "metro_station",
            FacilityKind::PlaceOfWorship   => "place_of_worship",
            FacilityKind::Park             => "park",
            FacilityKind::Hotel            => "hotel",
            FacilityKind::GovernmentOffice => "government_office",
            FacilityKind::ShoppingMall     => "shopping_mall",
            FacilityKind::Restaurant       => "restaurant",
            FacilityKind::WellLitArea      => "well_lit_area",
            FacilityKind::HighTraffic      => "high_traffic",
            FacilityKind::ResidentialArea  => "residential_area",
            FacilityKind::CommercialArea   => "commercial_area",
        }
    }

    /// `true` for lighting/footfall/land-use descriptors.
    #[inline]
    pub fn is_area_descriptor(self) -> bool {
        matches!(
            self,
            FacilityKind::WellLitArea
                | FacilityKind::HighTraffic
                | FacilityKind::ResidentialArea
                | FacilityKind::CommercialArea
        )
    }

    /// Points of interest a live directory can be asked about.
    pub fn points_of_interest() -> impl Iterator<Item = FacilityKind> {
        Self::ALL.into_iter().filter(|k| !k.is_area_descriptor())
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FacilityKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::Parse(format!("unknown facility kind {s:?}")))
    }
}

// ── FacilityCounts ────────────────────────────────────────────────────────────

/// Non-negative count per [`FacilityKind`].
///
/// Backed by a `BTreeMap` so iteration order (and therefore anything derived
/// from it, such as reasoning text or JSON output) is deterministic.  Kinds
/// with a zero count are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FacilityCounts(BTreeMap<FacilityKind, u32>);

impl FacilityCounts {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Count for `kind` (zero when absent).
    #[inline]
    pub fn get(&self, kind: FacilityKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    /// Sum of the counts of several kinds.
    pub fn sum_of(&self, kinds: &[FacilityKind]) -> u32 {
        kinds.iter().map(|&k| self.get(k)).sum()
    }

    /// Add `n` to the tally for `kind`.
    pub fn add(&mut self, kind: FacilityKind, n: u32) {
        if n > 0 {
            *self.0.entry(kind).or_insert(0) += n;
        }
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &FacilityCounts) {
        for (&kind, &n) in &other.0 {
            self.add(kind, n);
        }
    }

    /// Total number of facilities across all kinds.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// `Σ count · weight` under `weights`.
    pub fn weighted_sum(&self, weights: &WeightTable) -> f64 {
        self.0
            .iter()
            .map(|(&kind, &n)| n as f64 * weights.weight(kind) as f64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-zero entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (FacilityKind, u32)> + '_ {
        self.0.iter().map(|(&k, &n)| (k, n))
    }
}

impl FromIterator<(FacilityKind, u32)> for FacilityCounts {
    fn from_iter<I: IntoIterator<Item = (FacilityKind, u32)>>(iter: I) -> Self {
        let mut counts = FacilityCounts::new();
        for (kind, n) in iter {
            counts.add(kind, n);
        }
        counts
    }
}
