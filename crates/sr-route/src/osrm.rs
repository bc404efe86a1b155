//! OSRM HTTP adapter for route geometries.

use std::time::Duration;

use serde::Deserialize;
use sr_core::{Coordinate, TravelMode};

use crate::{Polyline, RouteCandidate, RouteError, RouteResult, RoutingProvider};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url:     String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url:     "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

pub fn osrm_profile(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "driving",
        TravelMode::Walking => "foot",
        TravelMode::Cycling => "bike",
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code:   String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Decode a `/route/v1` body requested with `geometries=geojson`.
pub fn parse_route(body: &str) -> RouteResult<RouteCandidate> {
    let response: OsrmRouteResponse =
        serde_json::from_str(body).map_err(|e| RouteError::InvalidResponse(e.to_string()))?;
    if response.code != "Ok" {
        return Err(RouteError::Provider(format!("OSRM returned code {}", response.code)));
    }
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::Provider("OSRM returned no routes".into()))?;

    let polyline = Polyline::new(
        route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coordinate::new(lon, lat))
            .collect(),
    );
    Ok(RouteCandidate::new(polyline, route.distance, route.duration))
}

impl RoutingProvider for OsrmClient {
    fn directions(&self, coords: &[Coordinate], mode: TravelMode) -> RouteResult<RouteCandidate> {
        if coords.len() < 2 {
            return Err(RouteError::Provider(format!(
                "need at least 2 coordinates, got {}",
                coords.len()
            )));
        }

        let path = coords
            .iter()
            .map(|c| format!("{:.6},{:.6}", c.lon, c.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url,
            osrm_profile(mode),
            path
        );

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| RouteError::Provider(e.to_string()))?;

        parse_route(&body)
    }
}
