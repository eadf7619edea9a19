use crate::{
    distance::{self, Edge},
    error::{Error, Result},
    point::{BoundingBox, GeoPoint},
    units::Feddan,
};

/// Equatorial radius used by the spherical area formula, in meters.
pub const EARTH_RADIUS_AREA_M: f64 = 6_378_137.0;

pub const MIN_POLYGON_POINTS: usize = 3;

/// Signed spherical area in square meters.
///
/// The ring is closed implicitly (the last point connects back to the
/// first). The sign follows the winding: counter-clockwise in lon/lat is
/// positive. Self-intersections, poles and the antimeridian are not
/// handled; such rings still produce a number, just not a meaningful one.
pub fn signed_area_m2(points: &[GeoPoint]) -> Result<f64> {
    if points.len() < MIN_POLYGON_POINTS {
        return Err(Error::InsufficientPoints {
            found: points.len(),
        });
    }
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p1 = &points[i];
        let p2 = &points[(i + 1) % n];
        acc += (p2.lon() - p1.lon()).to_radians()
            * (2.0 + p1.lat().to_radians().sin() + p2.lat().to_radians().sin());
    }
    Ok(acc * EARTH_RADIUS_AREA_M * EARTH_RADIUS_AREA_M / 2.0)
}

/// Unsigned spherical area in square meters; see [`signed_area_m2`].
pub fn area_m2(points: &[GeoPoint]) -> Result<f64> {
    Ok(signed_area_m2(points)?.abs())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonArea {
    pub square_meters: f64,
    pub feddan: Feddan,
}

/// Area of the polygon with its feddan/kirat/saham breakdown.
pub fn area(points: &[GeoPoint]) -> Result<PolygonArea> {
    let square_meters = area_m2(points)?;
    Ok(PolygonArea {
        square_meters,
        feddan: Feddan::from_square_meters(square_meters),
    })
}

/// Borrowed view over a caller's points, bundling the measurements.
pub struct Polygon<'a> {
    pub points: &'a [GeoPoint],
}

impl<'a> Polygon<'a> {
    pub fn new(points: &'a [GeoPoint]) -> Self {
        Polygon { points }
    }
    pub fn info(&self) {
        log::info!("polygon: len: {}", self.points.len());
        if let Some(bbox) = self.bbox() {
            log::info!("polygon: bbox: {}", bbox);
        }
        log::info!("polygon: perimeter: {:.2}", self.perimeter());
        match self.area() {
            Ok(a) => log::info!("polygon: area: {:.2} ({})", a.square_meters, a.feddan),
            Err(e) => log::info!("polygon: area: {}", e),
        }
    }
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.points)
    }
    pub fn edges(&self) -> Vec<Edge> {
        distance::edge_distances(self.points)
    }
    pub fn perimeter(&self) -> f64 {
        distance::perimeter(&self.edges())
    }
    pub fn area(&self) -> Result<PolygonArea> {
        area(self.points)
    }
}
