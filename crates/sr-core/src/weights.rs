//! Immutable per-kind weights.

use std::collections::BTreeMap;

use crate::FacilityKind;

/// Weight assumed for a kind the table does not mention.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Mapping [`FacilityKind`] → non-negative integer weight.
///
/// Built once (from a preset, a list of pairs, or a config file) and then
/// only read; there are no mutators.  Share it by reference or clone it into
/// each component at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeightTable(BTreeMap<FacilityKind, u32>);

impl WeightTable {
    /// Weights used for hex-cell scoring on the 0–100 scale.
    pub fn grid_default() -> Self {
        use FacilityKind::*;
        Self::from_pairs([
            (Police,           15),
            (Hospital,         12),
            (FireStation,      10),
            (School,            8),
            (College,           6),
            (Bank,              5),
            (GovernmentOffice,  4),
            (ShoppingMall,      3),
            (Restaurant,        2),
            (BusStop,           2),
            (MetroStation,      4),
            (WellLitArea,       3),
            (HighTraffic,       2),
            (ResidentialArea,   1),
            (CommercialArea,    2),
        ])
    }

    /// Weights used when counting points of interest from a live directory.
    pub fn directory_default() -> Self {
        use FacilityKind::*;
        Self::from_pairs([
            (Police,         10),
            (Hospital,        8),
            (FireStation,     7),
            (School,          5),
            (College,         5),
            (University,      5),
            (Bank,            3),
            (Atm,             2),
            (Pharmacy,        4),
            (Library,         3),
            (BusStop,         3),
            (TrainStation,    4),
            (MetroStation,    4),
            (PlaceOfWorship,  2),
            (Park,            2),
            (Hotel,           1),
        ])
    }

    pub fn from_pairs<I: IntoIterator<Item = (FacilityKind, u32)>>(pairs: I) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Weight of `kind`, [`DEFAULT_WEIGHT`] when the table is silent.
    #[inline]
    pub fn weight(&self, kind: FacilityKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacilityKind, u32)> + '_ {
        self.0.iter().map(|(&k, &w)| (k, w))
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::grid_default()
    }
}
