//! OpenStreetMap Overpass adapter for the live strategy.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

use serde::Deserialize;
use sr_core::{Coordinate, FacilityKind};

use crate::{FacilityDirectory, FacilityError, FacilityRecord, FacilityResult};

#[derive(Debug, Clone)]
pub struct OverpassConfig {
    pub endpoint:     String,
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            endpoint:     "https://overpass-api.de/api/interpreter".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Facility directory backed by an Overpass interpreter.
#[derive(Debug, Clone)]
pub struct OverpassDirectory {
    config: OverpassConfig,
    client: reqwest::blocking::Client,
}

impl OverpassDirectory {
    pub fn new(config: OverpassConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

// ── Tag mapping ───────────────────────────────────────────────────────────────

/// OSM `key=value` tag that identifies each point-of-interest kind.
/// Area descriptors have no tag and are never queried.
pub fn osm_tag(kind: FacilityKind) -> Option<(&'static str, &'static str)> {
    use FacilityKind::*;
    Some(match kind {
        Police           => ("amenity", "police"),
        Hospital         => ("amenity", "hospital"),
        FireStation      => ("amenity", "fire_station"),
        School           => ("amenity", "school"),
        College          => ("amenity", "college"),
        University       => ("amenity", "university"),
        Bank             => ("amenity", "bank"),
        Atm              => ("amenity", "atm"),
        Pharmacy         => ("amenity", "pharmacy"),
        Library          => ("amenity", "library"),
        PlaceOfWorship   => ("amenity", "place_of_worship"),
        Restaurant       => ("amenity", "restaurant"),
        BusStop          => ("highway", "bus_stop"),
        TrainStation     => ("railway", "station"),
        MetroStation     => ("railway", "subway_entrance"),
        Park             => ("leisure", "park"),
        Hotel            => ("tourism", "hotel"),
        GovernmentOffice => ("office", "government"),
        ShoppingMall     => ("shop", "mall"),
        WellLitArea | HighTraffic | ResidentialArea | CommercialArea => return None,
    })
}

/// Map an element's tags back to a kind, restricted to `kinds`.
///
/// A `railway=station` tagged `station=subway` is a metro station.
pub fn classify_tags(
    tags:  &BTreeMap<String, String>,
    kinds: &[FacilityKind],
) -> Option<FacilityKind> {
    if tags.get("railway").map(String::as_str) == Some("station")
        && tags.get("station").map(String::as_str) == Some("subway")
        && kinds.contains(&FacilityKind::MetroStation)
    {
        return Some(FacilityKind::MetroStation);
    }
    kinds.iter().copied().find(|&kind| {
        osm_tag(kind).is_some_and(|(key, value)| tags.get(key).map(String::as_str) == Some(value))
    })
}

/// Overpass QL selecting every tagged kind within `radius_m` of `center`.
pub fn build_query(
    center:       Coordinate,
    radius_m:     f64,
    kinds:        &[FacilityKind],
    timeout_secs: u64,
) -> String {
    let mut q = format!("[out:json][timeout:{timeout_secs}];(");
    let mut by_key: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for tag in kinds.iter().filter_map(|&k| osm_tag(k)) {
        by_key.entry(tag.0).or_default().push(tag.1);
    }
    for (key, values) in by_key {
        let _ = write!(
            q,
            "nwr[\"{key}\"~\"^({})$\"](around:{:.0},{:.6},{:.6});",
            values.join("|"),
            radius_m.max(1.0),
            center.lat,
            center.lon,
        );
    }
    q.push_str(");out center tags;");
    q
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    kind:   String,
    id:     u64,
    lat:    Option<f64>,
    lon:    Option<f64>,
    center: Option<LatLon>,
    #[serde(default)]
    tags:   BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

/// Decode an interpreter response body into records of `kinds`.
/// Elements without a position or a recognised tag are skipped.
pub fn parse_response(body: &str, kinds: &[FacilityKind]) -> FacilityResult<Vec<FacilityRecord>> {
    let response: OverpassResponse =
        serde_json::from_str(body)
            .map_err(|e| FacilityError::Parse(format!("overpass response: {e}")))?;

    Ok(response
        .elements
        .into_iter()
        .filter_map(|el| {
            let location = match (el.lat, el.lon, &el.center) {
                (Some(lat), Some(lon), _) => Coordinate::from_lat_lon(lat, lon),
                (_, _, Some(c)) => Coordinate::from_lat_lon(c.lat, c.lon),
                _ => return None,
            };
            let kind = classify_tags(&el.tags, kinds)?;
            Some(FacilityRecord { id: format!("{}/{}", el.kind, el.id), kind, location })
        })
        .collect())
}

impl FacilityDirectory for OverpassDirectory {
    fn nearby(
        &self,
        center:   Coordinate,
        radius_m: f64,
        kinds:    &[FacilityKind],
    ) -> FacilityResult<Vec<FacilityRecord>> {
        if kinds.iter().all(|&k| osm_tag(k).is_none()) {
            return Ok(Vec::new());
        }
        let query = build_query(center, radius_m, kinds, self.config.timeout_secs);
        let body = self
            .client
            .post(&self.config.endpoint)
            .form(&[("data", query.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())?;

        parse_response(&body, kinds)
    }
}
