use crate::{
    distance::{self, Edge},
    error::{Error, Result},
    point::GeoPoint,
    polygon::PolygonArea,
};

pub const NOT_ENOUGH_POINTS: &str = "Not enough points to form a polygon.";

pub fn points_text(points: &[GeoPoint]) -> String {
    let mut doc = String::new();
    for (i, p) in points.iter().enumerate() {
        doc.push_str(&format!("{}: ({:.6}, {:.6})\n", i + 1, p.lat(), p.lon()));
    }
    doc
}

/// Edges are numbered from 1; the closing edge carries the point count.
pub fn distances_text(edges: &[Edge]) -> String {
    let mut doc = String::new();
    for e in edges {
        doc.push_str(&format!("Distance {}: {:.2} m\n", e.index + 1, e.meters));
    }
    if !edges.is_empty() {
        doc.push_str(&format!("Perimeter: {:.2} m\n", distance::perimeter(edges)));
    }
    doc
}

pub fn area_text(area: &Result<PolygonArea>) -> String {
    match area {
        Ok(a) => format!("Area: {:.2} m²\n{} \n", a.square_meters, a.feddan),
        Err(Error::InsufficientPoints { .. }) => format!("{}\n", NOT_ENOUGH_POINTS),
        Err(e) => format!("{}\n", e),
    }
}

pub fn make_report(points: &[GeoPoint], edges: &[Edge], area: &Result<PolygonArea>) -> String {
    let mut doc = String::new();
    doc.push_str(&points_text(points));
    doc.push('\n');
    doc.push_str(&distances_text(edges));
    doc.push('\n');
    doc.push_str(&area_text(area));
    doc
}
