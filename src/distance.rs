use crate::point::GeoPoint;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters.
pub fn haversine(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let phi1 = p1.lat().to_radians();
    let phi2 = p2.lat().to_radians();
    let delta_phi = (p2.lat() - p1.lat()).to_radians();
    let delta_lambda = (p2.lon() - p1.lon()).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // rounding can push a just outside [0, 1]: past 1 near antipodes, below
    // 0 when out-of-range latitudes make the cosine product negative
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Zero-based position in the edge list.
    pub index: usize,
    /// Set on the last-to-first edge.
    pub closing: bool,
    pub meters: f64,
}

/// Distances along the sequence: one per consecutive pair, and the
/// last-to-first edge once there are at least three points.
pub fn edge_distances(points: &[GeoPoint]) -> Vec<Edge> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut ret: Vec<Edge> = points
        .windows(2)
        .enumerate()
        .map(|(index, w)| Edge {
            index,
            closing: false,
            meters: haversine(&w[0], &w[1]),
        })
        .collect();
    if n >= 3 {
        ret.push(Edge {
            index: n - 1,
            closing: true,
            meters: haversine(&points[n - 1], &points[0]),
        });
    }
    log::trace!("edges: {} for {} points", ret.len(), n);
    ret
}

pub fn perimeter(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.meters).sum()
}
