//! `sr-core` — foundational types for the safe-route scoring workspace.
//!
//! This crate is a dependency of every other `sr-*` crate.  It has no `sr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`geo`]        | `Coordinate`, haversine distance                       |
//! | [`geometry`]   | hexagon vertices, point-in-polygon, km → degrees       |
//! | [`facility`]   | `FacilityKind`, `FacilityCounts`                       |
//! | [`weights`]    | `WeightTable` presets                                  |
//! | [`scale`]      | `ScoreScale` (0–100 / 0–10)                            |
//! | [`mode`]       | `TravelMode` and its per-mode tuning                   |
//! | [`rng`]        | `FacilityRng` (seeded, per query location)             |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod facility;
pub mod geo;
pub mod geometry;
pub mod mode;
pub mod rng;
pub mod scale;
pub mod weights;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use facility::{FacilityCounts, FacilityKind};
pub use geo::Coordinate;
pub use geometry::{
    DegreeDelta, KM_PER_DEGREE, hexagon_vertices, is_simple_polygon, km_to_degrees,
    point_in_polygon,
};
pub use mode::TravelMode;
pub use rng::FacilityRng;
pub use scale::ScoreScale;
pub use weights::WeightTable;
