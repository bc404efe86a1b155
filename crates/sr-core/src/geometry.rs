//! Degree-space geometry kernel: hexagon construction, point location and
//! km ↔ degree conversion.
//!
//! # Projection
//!
//! Everything here works on raw `(lon, lat)` degrees as if they were a flat
//! plane, with longitude on x and latitude on y.  That is accurate enough for
//! corridors of a few tens of kilometres and keeps cell scores comparable
//! across runs.  It is not geodesic: see [`km_to_degrees`] for
//! the polar-ward distortion this introduces.

use crate::Coordinate;

/// Kilometres per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.0;

// ── km → degrees ──────────────────────────────────────────────────────────────

/// A pair of degree extents along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DegreeDelta {
    pub d_lat: f64,
    pub d_lon: f64,
}

/// Convert a ground distance to degree extents at `at_latitude`.
///
/// Latitude degrees scale uniformly (`1/111` per km).  Longitude degrees
/// scale by `1/(111·cos(lat))`, so the same `km` spans more longitude the
/// further the corridor is from the equator.  Cells built from these deltas
/// therefore look wider on a map near the poles.  The distortion is left in
/// place so cell areas stay fixed in degree space.
pub fn km_to_degrees(km: f64, at_latitude: f64) -> DegreeDelta {
    DegreeDelta {
        d_lat: km / KM_PER_DEGREE,
        d_lon: km / (KM_PER_DEGREE * at_latitude.to_radians().cos()),
    }
}

// ── Hexagons ──────────────────────────────────────────────────────────────────

/// The six vertices of a regular hexagon around `center`.
///
/// Vertex *i* sits at angle `i·60°`, counter-clockwise from east.  Both axes
/// use `radius_lat` as the vertex radius, giving a regular hexagon in degree
/// space.  `radius_lon` is accepted for signature symmetry with
/// [`DegreeDelta`] but does not stretch the shape.
pub fn hexagon_vertices(center: Coordinate, radius_lat: f64, _radius_lon: f64) -> [Coordinate; 6] {
    std::array::from_fn(|i| {
        let angle = std::f64::consts::FRAC_PI_3 * i as f64;
        center.offset(radius_lat * angle.cos(), radius_lat * angle.sin())
    })
}

// ── Point in polygon ──────────────────────────────────────────────────────────

/// Crossing-number test of `point` against the closed ring `vertices`.
///
/// A horizontal ray is cast towards +x (east).  An edge is counted when
/// exactly one of its endpoints lies strictly above the point and the
/// crossing is strictly east of it.  Under this half-open rule a point on a
/// west or south edge is inside and a point on an east or north edge is
/// outside; the answer is the same for any cyclic rotation of `vertices`.
///
/// Rings with fewer than three vertices contain nothing.
pub fn point_in_polygon(point: Coordinate, vertices: &[Coordinate]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let (x, y) = (point.lon, point.lat);
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (vertices[i].lon, vertices[i].lat);
        let (xj, yj) = (vertices[j].lon, vertices[j].lat);

        if (yi > y) != (yj > y) {
            let x_cross = xi + (y - yi) * (xj - xi) / (yj - yi);
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

// ── Polygon validity ──────────────────────────────────────────────────────────

/// `true` if `vertices` form a simple polygon: at least three distinct
/// vertices and no two edges touching except adjacent edges at their shared
/// vertex.
pub fn is_simple_polygon(vertices: &[Coordinate]) -> bool {
    let n = vertices.len();
    if n < 3 || vertices.iter().any(|v| !v.is_finite()) {
        return false;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if vertices[i] == vertices[j] {
                return false;
            }
        }
    }

    let edge = |k: usize| (vertices[k], vertices[(k + 1) % n]);

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            let (a, b) = edge(i);
            let (c, d) = edge(j);
            if adjacent {
                // Adjacent edges may only share their common vertex; they
                // must not fold back onto each other.
                if collinear_overlap(a, b, c, d) {
                    return false;
                }
            } else if segments_intersect(a, b, c, d) {
                return false;
            }
        }
    }

    true
}

/// Signed area of the triangle `(a, b, c)` times two.
#[inline]
fn cross(a: Coordinate, b: Coordinate, c: Coordinate) -> f64 {
    (b.lon - a.lon) * (c.lat - a.lat) - (b.lat - a.lat) * (c.lon - a.lon)
}

#[inline]
fn on_segment(a: Coordinate, b: Coordinate, p: Coordinate) -> bool {
    p.lon >= a.lon.min(b.lon)
        && p.lon <= a.lon.max(b.lon)
        && p.lat >= a.lat.min(b.lat)
        && p.lat <= a.lat.max(b.lat)
}

fn segments_intersect(a: Coordinate, b: Coordinate, c: Coordinate, d: Coordinate) -> bool {
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}

/// Adjacent edges `ab` and `cd` overlap along a line (beyond the shared
/// vertex).
fn collinear_overlap(a: Coordinate, b: Coordinate, c: Coordinate, d: Coordinate) -> bool {
    if cross(a, b, c) != 0.0 || cross(a, b, d) != 0.0 {
        return false;
    }
    // Identify the two non-shared endpoints and check whether either lies
    // within the other segment.
    let (shared, p, q) = if b == c {
        (b, a, d)
    } else if a == d {
        (a, b, c)
    } else {
        return true;
    };
    let same_side = (p.lon - shared.lon) * (q.lon - shared.lon)
        + (p.lat - shared.lat) * (q.lat - shared.lat);
    same_side > 0.0
}
