//! `sr-grid` — hexagonal tiling, facility services and cell scoring.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`cell`]          | `HexCell`                                                 |
//! | [`grid`]          | `HexGrid` (cells + R-tree), `GridSpec`, `build_grid`      |
//! | [`service`]       | `FacilityService`, `FacilityDirectory`, `FacilityRecord`  |
//! | [`simulated`]     | `SimulatedFacilities`, `SimulationConfig`, `UrbanAnchor`  |
//! | [`live`]          | `LiveFacilities` (directory-backed, deduplicating)        |
//! | [`overpass`]      | `OverpassDirectory` (OpenStreetMap Overpass HTTP API)     |
//! | [`csv_directory`] | `CsvFacilityDirectory` (offline `id,kind,lat,lon` file)   |
//! | [`scorer`]        | `FacilityScorer`                                          |
//! | [`error`]         | `GridError`, `FacilityError`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config types.           |

pub mod cell;
pub mod csv_directory;
pub mod error;
pub mod grid;
pub mod live;
pub mod overpass;
pub mod scorer;
pub mod service;
pub mod simulated;


pub use cell::HexCell;
pub use csv_directory::CsvFacilityDirectory;
pub use error::{FacilityError, FacilityResult, GridError, GridResult};
pub use grid::{GridSpec, HexGrid, build_grid};
pub use live::{LiveFacilities, Survey};
pub use overpass::{OverpassConfig, OverpassDirectory};
pub use scorer::{FacilityScorer, ScoringSummary};
pub use service::{FacilityDirectory, FacilityRecord, FacilityService};
pub use simulated::{SimulatedFacilities, SimulationConfig, UrbanAnchor};
