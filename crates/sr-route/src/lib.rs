//! `sr-route` — candidate routes between two points.
//!
//! The engine never talks to a routing backend directly; it goes through
//! [`RoutingProvider`] and [`Geocoder`], so the HTTP adapters here can be
//! swapped for the offline [`StraightLineRouter`] or a test double.
//!
//! # Crate layout
//!
//! | Module             | Contents                                               |
//! |--------------------|--------------------------------------------------------|
//! | [`candidate`]      | `Polyline`, `RouteCandidate`                           |
//! | [`provider`]       | `RoutingProvider` trait                                |
//! | [`geocode`]        | `Geocoder` trait, `LiteralGeocoder`, `parse_lat_lon`   |
//! | [`ors`]            | `OrsClient` (OpenRouteService directions + Pelias)     |
//! | [`osrm`]           | `OsrmClient` (OSRM `/route/v1`)                        |
//! | [`straight_line`]  | `StraightLineRouter` (offline fallback)                |
//! | [`synth`]          | `RouteSynthesizer`, `SynthesisConfig`                  |
//! | [`error`]          | `RouteError`, `RouteResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on candidates and config.  |

pub mod candidate;
pub mod error;
pub mod geocode;
pub mod ors;
pub mod osrm;
pub mod provider;
pub mod straight_line;
pub mod synth;


pub use candidate::{Polyline, RouteCandidate};
pub use error::{RouteError, RouteResult};
pub use geocode::{Geocoder, LiteralGeocoder, parse_lat_lon};
pub use ors::{OrsClient, OrsConfig};
pub use osrm::{OsrmClient, OsrmConfig};
pub use provider::RoutingProvider;
pub use straight_line::StraightLineRouter;
pub use synth::{RouteSynthesizer, SynthesisConfig};
