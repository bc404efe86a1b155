//! Geographic coordinate type.
//!
//! `Coordinate` is stored `(lon, lat)` in double precision, the same order
//! routing providers use on the wire (GeoJSON).  Corridor-scale degree math
//! in [`crate::geometry`] treats longitude as the x axis and latitude as y.

use std::fmt;

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Construct from the human-facing `lat, lon` order.
    #[inline]
    pub const fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Plain Euclidean distance in degree space.  This is what the grid trim
    /// and the simulated urban-proximity test compare against.
    #[inline]
    pub fn degree_distance(self, other: Coordinate) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }

    /// Midpoint in degree space (adequate for corridors of a few km).
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.lon + other.lon) * 0.5, (self.lat + other.lat) * 0.5)
    }

    /// Shift by the given degree offsets.
    #[inline]
    pub fn offset(self, d_lon: f64, d_lat: f64) -> Coordinate {
        Coordinate::new(self.lon + d_lon, self.lat + d_lat)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl fmt::Display for Coordinate {
    /// Formats as `lat,lon`, the literal form accepted by geocoders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}
