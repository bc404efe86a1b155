//! OpenRouteService adapter: GeoJSON directions and Pelias geocoding.

use std::time::Duration;

use serde::Deserialize;
use sr_core::{Coordinate, TravelMode};

use crate::{Geocoder, Polyline, RouteCandidate, RouteError, RouteResult, RoutingProvider};

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url:     String,
    pub api_key:      String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url:     "https://api.openrouteservice.org".to_string(),
            api_key:      String::new(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

/// ORS profile name for a travel mode.
pub fn ors_profile(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "driving-car",
        TravelMode::Walking => "foot-walking",
        TravelMode::Cycling => "cycling-regular",
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FeatureCollection<P> {
    #[serde(default = "Vec::new")]
    features: Vec<Feature<P>>,
}

#[derive(Debug, Deserialize)]
struct Feature<P> {
    geometry:   P,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct Point {
    coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    summary: Summary,
}

/// ORS omits zero-valued summary fields.
#[derive(Debug, Default, Deserialize)]
struct Summary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

/// Decode a `/v2/directions/{profile}/geojson` body.
pub fn parse_directions(body: &str) -> RouteResult<RouteCandidate> {
    let collection: FeatureCollection<LineString> =
        serde_json::from_str(body).map_err(|e| RouteError::InvalidResponse(e.to_string()))?;
    let feature = collection
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::Provider("directions response has no features".into()))?;

    let polyline: Polyline = feature
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| Coordinate::new(lon, lat))
        .collect::<Vec<_>>()
        .into();
    let summary = feature.properties.summary;
    Ok(RouteCandidate::new(polyline, summary.distance, summary.duration))
}

/// Decode a `/geocode/search` body into the first match.
pub fn parse_geocode(body: &str, text: &str) -> RouteResult<Coordinate> {
    let collection: FeatureCollection<Point> =
        serde_json::from_str(body).map_err(|e| RouteError::InvalidResponse(e.to_string()))?;
    collection
        .features
        .first()
        .map(|f| Coordinate::new(f.geometry.coordinates[0], f.geometry.coordinates[1]))
        .ok_or_else(|| RouteError::Geocode(format!("place {text:?} not found")))
}

// ── Capabilities ──────────────────────────────────────────────────────────────

impl RoutingProvider for OrsClient {
    fn directions(&self, coords: &[Coordinate], mode: TravelMode) -> RouteResult<RouteCandidate> {
        if coords.len() < 2 {
            return Err(RouteError::Provider(format!(
                "need at least 2 coordinates, got {}",
                coords.len()
            )));
        }
        let url = format!("{}/v2/directions/{}/geojson", self.config.base_url, ors_profile(mode));
        let body = serde_json::json!({
            "coordinates": coords.iter().map(|c| [c.lon, c.lat]).collect::<Vec<_>>(),
        });

        let text = self
            .client
            .post(url)
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| RouteError::Provider(e.to_string()))?;

        parse_directions(&text)
    }
}

impl Geocoder for OrsClient {
    fn lookup(&self, text: &str) -> RouteResult<Coordinate> {
        let url = format!("{}/geocode/search", self.config.base_url);
        let body = self
            .client
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str()), ("text", text), ("size", "1")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())?;

        parse_geocode(&body, text)
    }
}
