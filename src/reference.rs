use geo::algorithm::geodesic_area::GeodesicArea;
use geo::orient::Direction;
use geo::{Coord, Orient, Polygon};

use crate::point::GeoPoint;

/// Ellipsoidal (WGS84) perimeter and area from the geo crate, for comparing
/// against the spherical results. `None` below three points.
pub fn geodesic(points: &[GeoPoint]) -> Option<(f64, f64)> {
    if points.len() < 3 {
        return None;
    }
    let coords: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: p.lon(),
            y: p.lat(),
        })
        .collect();

    // exterior ring, no holes
    let mut geo_polygon = Polygon::new(coords.into(), vec![]);
    geo_polygon = geo_polygon.orient(Direction::Default);

    Some(geo_polygon.geodesic_perimeter_area_unsigned())
}
