//! Offline facility directory loaded from CSV.
//!
//! # CSV format
//!
//! One row per facility.  `kind` takes the snake_case names of
//! [`FacilityKind`] (`police`, `bus_stop`, ...).
//!
//! ```csv
//! id,kind,lat,lon
//! p1,police,23.0100,72.5200
//! h7,hospital,23.0150,72.5310
//! ```
//!
//! Ids must be unique; they are what the live strategy deduplicates on.

use std::io::Read;
use std::path::Path;

use rstar::{AABB, RTree, RTreeObject};
use serde::Deserialize;
use sr_core::{Coordinate, FacilityKind, km_to_degrees};

use crate::{FacilityDirectory, FacilityError, FacilityRecord, FacilityResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityRow {
    id:   String,
    kind: String,
    lat:  f64,
    lon:  f64,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

struct RecordEntry {
    point: [f64; 2],
    idx:   usize,
}

impl RTreeObject for RecordEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── Directory ─────────────────────────────────────────────────────────────────

/// In-memory directory with a point index over `(lon, lat)`.
pub struct CsvFacilityDirectory {
    records: Vec<FacilityRecord>,
    index:   RTree<RecordEntry>,
}

impl CsvFacilityDirectory {
    /// Build from already-parsed records.
    pub fn from_records(records: Vec<FacilityRecord>) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .map(|(idx, r)| RecordEntry { point: [r.location.lon, r.location.lat], idx })
            .collect();
        Self { records, index: RTree::bulk_load(entries) }
    }

    /// Load from a CSV file.
    pub fn from_path(path: &Path) -> FacilityResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Like [`from_path`](Self::from_path) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> FacilityResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize::<FacilityRow>() {
            let row = result?;
            let kind: FacilityKind = row
                .kind
                .parse()
                .map_err(|e| FacilityError::Parse(format!("facility {:?}: {e}", row.id)))?;
            let location = Coordinate::from_lat_lon(row.lat, row.lon);
            if !location.is_finite() {
                return Err(FacilityError::Parse(format!(
                    "facility {:?} has a non-finite position",
                    row.id
                )));
            }
            records.push(FacilityRecord { id: row.id, kind, location });
        }

        tracing::debug!(records = records.len(), "loaded facility directory");
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }
}

impl FacilityDirectory for CsvFacilityDirectory {
    /// Results come back in file order.
    fn nearby(
        &self,
        center:   Coordinate,
        radius_m: f64,
        kinds:    &[FacilityKind],
    ) -> FacilityResult<Vec<FacilityRecord>> {
        let reach = km_to_degrees(radius_m / 1000.0, center.lat);
        let window = AABB::from_corners(
            [center.lon - reach.d_lon, center.lat - reach.d_lat],
            [center.lon + reach.d_lon, center.lat + reach.d_lat],
        );

        let mut hits: Vec<usize> = self
            .index
            .locate_in_envelope_intersecting(&window)
            .map(|entry| entry.idx)
            .filter(|&idx| {
                let r = &self.records[idx];
                kinds.contains(&r.kind) && r.location.distance_m(center) <= radius_m
            })
            .collect();
        hits.sort_unstable();

        Ok(hits.into_iter().map(|idx| self.records[idx].clone()).collect())
    }
}
