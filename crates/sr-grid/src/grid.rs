//! Hex grid construction and point location.
//!
//! # Layout
//!
//! Cells are laid on a rectangular row/column lattice spanning `2·radius` on
//! each axis with a step of `hex_size`, both converted to degrees at the
//! centre latitude.  A lattice point is kept when its Euclidean degree
//! distance to the centre is at most `radius_lat`.  Because longitude degrees
//! are stretched away from the equator that trim is an ellipse on the ground
//! rather than a circle.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over each cell's bounding box narrows
//! [`HexGrid::locate`] to a handful of candidates.  Among candidates whose
//! polygon contains the point the lowest cell index wins, which is exactly
//! what a front-to-back linear scan would return.

use rstar::{AABB, RTree, RTreeObject};

use sr_core::{Coordinate, km_to_degrees};

use crate::{GridError, GridResult, HexCell};

/// Lattice points beyond this are treated as a misconfiguration.
const MAX_LATTICE_POINTS: usize = 4_000_000;

// ── GridSpec ──────────────────────────────────────────────────────────────────

/// Size of the tiled disk and of each hexagon, kilometres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    pub radius_km:   f64,
    pub hex_size_km: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { radius_km: 10.0, hex_size_km: 1.0 }
    }
}

impl GridSpec {
    pub fn validate(&self) -> GridResult<()> {
        if !(self.radius_km.is_finite() && self.radius_km > 0.0) {
            return Err(GridError::InvalidSpec(format!(
                "radius_km must be positive, got {}",
                self.radius_km
            )));
        }
        if !(self.hex_size_km.is_finite() && self.hex_size_km > 0.0) {
            return Err(GridError::InvalidSpec(format!(
                "hex_size_km must be positive, got {}",
                self.hex_size_km
            )));
        }
        Ok(())
    }
}

// ── R-tree cell entry ─────────────────────────────────────────────────────────

/// Bounding box of one cell, `[lon, lat]`, with its index in `cells`.
struct CellEntry {
    min: [f64; 2],
    max: [f64; 2],
    idx: usize,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

// ── HexGrid ───────────────────────────────────────────────────────────────────

/// Ordered cells plus a bounding-box index for point location.
pub struct HexGrid {
    cells: Vec<HexCell>,
    index: RTree<CellEntry>,
}

impl HexGrid {
    /// A grid with no cells.  Every lookup misses.
    pub fn empty() -> Self {
        Self::from_cells(Vec::new())
    }

    /// Index pre-built cells, keeping their order.
    pub fn from_cells(cells: Vec<HexCell>) -> Self {
        let entries: Vec<CellEntry> = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let (min, max) = cell.bbox();
                CellEntry { min, max, idx }
            })
            .collect();
        Self { cells, index: RTree::bulk_load(entries) }
    }

    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    /// Mutable access for the scorer.  Geometry is fixed, so the index stays
    /// valid.
    pub(crate) fn cells_mut(&mut self) -> &mut [HexCell] {
        &mut self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell (in grid order) whose polygon contains `point`.
    pub fn locate(&self, point: Coordinate) -> Option<&HexCell> {
        let probe = AABB::from_point([point.lon, point.lat]);
        self.index
            .locate_in_envelope_intersecting(&probe)
            .filter(|entry| self.cells[entry.idx].contains(point))
            .map(|entry| entry.idx)
            .min()
            .map(|idx| &self.cells[idx])
    }

    /// Linear scan, same answer as [`locate`](Self::locate).
    pub fn locate_linear(&self, point: Coordinate) -> Option<&HexCell> {
        self.cells.iter().find(|cell| cell.contains(point))
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Tile a disk of `radius_km` around `center` with hexagons of
/// `hex_size_km`.
///
/// Cells come back unscored and in row-major order (south to north, west to
/// east).  At least one cell is always produced: if the trim would discard
/// every lattice point, a single cell at `center` is returned.
///
/// # Example
///
/// ```
/// use sr_core::Coordinate;
/// use sr_grid::build_grid;
///
/// let grid = build_grid(Coordinate::from_lat_lon(23.01, 72.525), 2.0, 1.0).unwrap();
/// assert!(!grid.is_empty());
/// assert!(grid.cells().iter().all(|c| c.vertices().len() == 6));
/// ```
pub fn build_grid(center: Coordinate, radius_km: f64, hex_size_km: f64) -> GridResult<HexGrid> {
    GridSpec { radius_km, hex_size_km }.validate()?;
    if !center.is_finite() || center.lat.abs() >= 90.0 {
        return Err(GridError::InvalidSpec(format!(
            "grid centre {center:?} is not a usable coordinate"
        )));
    }

    let radius = km_to_degrees(radius_km, center.lat);
    let hex = km_to_degrees(hex_size_km, center.lat);

    let rows = ((2.0 * radius.d_lat / hex.d_lat) as usize + 1).max(1);
    let cols = ((2.0 * radius.d_lon / hex.d_lon) as usize + 1).max(1);

    if rows.saturating_mul(cols) > MAX_LATTICE_POINTS {
        return Err(GridError::InvalidSpec(format!(
            "{rows} x {cols} lattice is too large; increase hex_size_km"
        )));
    }

    let mut cells = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let cell_center = Coordinate::new(
                center.lon - radius.d_lon + col as f64 * hex.d_lon,
                center.lat - radius.d_lat + row as f64 * hex.d_lat,
            );
            if cell_center.degree_distance(center) <= radius.d_lat {
                cells.push(HexCell::new(cell_center, hex.d_lat));
            }
        }
    }

    if cells.is_empty() {
        cells.push(HexCell::new(center, hex.d_lat));
    }

    tracing::debug!(
        rows,
        cols,
        kept = cells.len(),
        "built hex grid around {center}"
    );

    Ok(HexGrid::from_cells(cells))
}
