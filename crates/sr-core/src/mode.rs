//! Travel mode shared by routing, sampling and reasoning.
//!
//! Each mode carries the tuning the engine applies to it: how far synthetic
//! waypoints are pushed off the corridor, how wide the live facility search
//! is around each sample, and how many samples a live evaluation takes.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// How the traveller moves along the corridor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TravelMode {
    /// Human-readable label, also used in reasoning text.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
        }
    }

    /// Lateral waypoint offset in degrees.  Pedestrian and cycling offsets
    /// are smaller so detours stay walkable.
    pub fn waypoint_offset_deg(self) -> f64 {
        match self {
            TravelMode::Driving => 0.005,
            TravelMode::Walking => 0.002,
            TravelMode::Cycling => 0.003,
        }
    }

    /// Facility search radius around each live sample point, metres.
    pub fn search_radius_m(self) -> f64 {
        match self {
            TravelMode::Driving => 400.0,
            TravelMode::Walking => 200.0,
            TravelMode::Cycling => 300.0,
        }
    }

    /// Sample cap for live evaluation (each sample costs one directory query).
    pub fn live_sample_cap(self) -> usize {
        match self {
            TravelMode::Driving => 25,
            TravelMode::Walking => 15,
            TravelMode::Cycling => 20,
        }
    }

    /// Assumed average speed, used by offline providers to fake durations.
    pub fn speed_mps(self) -> f64 {
        match self {
            TravelMode::Driving => 11.1, // ≈ 40 km/h urban
            TravelMode::Walking => 1.4,
            TravelMode::Cycling => 4.2,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" | "car" | "drive" => Ok(TravelMode::Driving),
            "walking" | "walk" | "foot" => Ok(TravelMode::Walking),
            "cycling" | "bike" | "bicycle" => Ok(TravelMode::Cycling),
            other => Err(CoreError::Parse(format!(
                "unknown travel mode {other:?}: expected driving, walking or cycling"
            ))),
        }
    }
}
