use crate::error::{Error, Result};
use crate::point::{GeoPoint, PointSequence};
use std::fs::File;
use std::io::Read;
use std::path::Path;

mod lockml {
    use super::*;
    use kml::Kml;
    use kml::types::Geometry;

    fn children(kml: &Kml) -> &[Kml] {
        match kml {
            Kml::KmlDocument(doc) => &doc.elements,
            Kml::Document { elements, .. } => elements,
            Kml::Folder(folder) => &folder.elements,
            _ => &[],
        }
    }

    /// Depth-first search for the first placemark holding a polygon.
    fn first_polygon(kml: &Kml) -> Option<geo::Polygon> {
        match kml {
            Kml::Placemark(placemark) => match &placemark.geometry {
                Some(Geometry::Polygon(polygon)) => Some(polygon.clone().into()),
                _ => None,
            },
            other => children(other).iter().find_map(first_polygon),
        }
    }

    pub fn read(content: &str) -> Result<Vec<PointSequence>> {
        let kml = content.parse::<Kml>().map_err(|e| Error::Kml(format!("{}", e)))?;
        let polygon =
            first_polygon(&kml).ok_or_else(|| Error::NoPolygon("kml".to_string()))?;
        let points = polygon
            .exterior()
            .0
            .iter()
            .map(|c| GeoPoint::new(c.y, c.x))
            .collect::<Result<PointSequence>>()?;
        Ok(vec![points])
    }
}

mod locgpx {
    use super::*;
    use gpx::Gpx;
    use std::io::Cursor;

    pub fn read(content: &str) -> Result<Vec<PointSequence>> {
        let gpx: Gpx =
            gpx::read(Cursor::new(content)).map_err(|e| Error::Gpx(format!("{}", e)))?;
        let mut ret = Vec::new();
        for track in &gpx.tracks {
            for segment in &track.segments {
                let points = segment
                    .points
                    .iter()
                    .map(|w| GeoPoint::new(w.point().y(), w.point().x()))
                    .collect::<Result<PointSequence>>()?;
                ret.push(points);
            }
        }
        Ok(ret)
    }
}

mod locjson {
    use super::*;
    use geojson::{GeoJson, Geometry, Value};

    pub fn read(content: &str) -> Result<Vec<PointSequence>> {
        let geojson = content
            .parse::<GeoJson>()
            .map_err(|e| Error::GeoJson(format!("{}", e)))?;

        let geometries: Vec<Geometry> = match geojson {
            GeoJson::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .filter_map(|feature| feature.geometry)
                .collect(),
            GeoJson::Feature(feature) => feature.geometry.into_iter().collect(),
            GeoJson::Geometry(geometry) => vec![geometry],
        };
        let mut ret = Vec::new();
        for geometry in &geometries {
            if let Some(points) = geometry_to_points(geometry)? {
                ret.push(points);
            }
        }
        Ok(ret)
    }

    fn geometry_to_points(geometry: &Geometry) -> Result<Option<PointSequence>> {
        // exterior ring only; GeoJSON positions are [lon, lat]
        let ring = match &geometry.value {
            Value::Polygon(rings) => rings.first(),
            Value::MultiPolygon(polygons) => polygons.first().and_then(|rings| rings.first()),
            _ => None,
        };
        let Some(ring) = ring else {
            return Ok(None);
        };
        let points = ring
            .iter()
            .map(|p| GeoPoint::new(p[1], p[0]))
            .collect::<Result<PointSequence>>()?;
        Ok(Some(points))
    }
}

mod loctext {
    use super::*;

    /// One `lat,lon` per line; blank lines and `#` comments are skipped.
    pub fn read(content: &str) -> Result<Vec<PointSequence>> {
        let points = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.parse::<GeoPoint>())
            .collect::<Result<PointSequence>>()?;
        Ok(vec![points])
    }
}

/// Drops a trailing vertex that repeats the first one; the area formula
/// closes the ring on its own.
fn open_ring(mut points: PointSequence) -> PointSequence {
    if points.len() > 1 && points.first() == points.last() {
        log::debug!("dropping explicit ring closure {}", points[0]);
        points.pop();
    }
    points
}

pub fn parse(content: &str, extension: &str) -> Result<Vec<PointSequence>> {
    let polygons = match extension.to_ascii_lowercase().as_str() {
        "kml" => lockml::read(content)?,
        "gpx" => locgpx::read(content)?,
        "geojson" | "json" => locjson::read(content)?,
        "txt" | "csv" => loctext::read(content)?,
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    };
    Ok(polygons.into_iter().map(open_ring).collect())
}

pub fn read_polygons(filename: &Path) -> Result<Vec<PointSequence>> {
    let mut file = File::open(filename)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    let extension = filename
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let ret = parse(&content, extension)?;
    log::info!("{}: {} polygon(s)", filename.display(), ret.len());
    Ok(ret)
}

/// The first polygon of the file.
pub fn read_polygon(filename: &Path) -> Result<PointSequence> {
    read_polygons(filename)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoPolygon(filename.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_text() {
        let content = "# field\n30.0, 31.0\n\n30.0,31.001 # corner\n30.001 31.001\n";
        let polygons = parse(content, "txt").unwrap();
        assert_eq!(
            polygons,
            vec![vec![p(30.0, 31.0), p(30.0, 31.001), p(30.001, 31.001)]]
        );
    }

    #[test]
    fn test_text_invalid_line() {
        assert!(matches!(
            parse("30.0,31.0\nabc\n", "csv"),
            Err(Error::ParsePoint { .. })
        ));
    }

    #[test]
    fn test_geojson_polygon() {
        let content = r#"{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[31.0, 30.0], [31.001, 30.0], [31.001, 30.001], [31.0, 30.0]]]
            }
        }"#;
        let polygons = parse(content, "geojson").unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(
            polygons[0],
            vec![p(30.0, 31.0), p(30.0, 31.001), p(30.001, 31.001)]
        );
    }

    #[test]
    fn test_kml_polygon() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <Polygon>
        <outerBoundaryIs>
          <LinearRing>
            <coordinates>31.0,30.0,0 31.001,30.0,0 31.001,30.001,0 31.0,30.0,0</coordinates>
          </LinearRing>
        </outerBoundaryIs>
      </Polygon>
    </Placemark>
  </Document>
</kml>"#;
        let polygons = parse(content, "kml").unwrap();
        assert_eq!(
            polygons[0],
            vec![p(30.0, 31.0), p(30.0, 31.001), p(30.001, 31.001)]
        );
    }

    #[test]
    fn test_gpx_track() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="field survey" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <name>field</name>
    <trkseg>
      <trkpt lat="30.0" lon="31.0"></trkpt>
      <trkpt lat="30.0" lon="31.001"></trkpt>
      <trkpt lat="30.001" lon="31.001"></trkpt>
      <trkpt lat="30.0" lon="31.0"></trkpt>
    </trkseg>
  </trk>
</gpx>"#;
        let polygons = parse(content, "gpx").unwrap();
        assert_eq!(polygons.len(), 1);
        // closing trkpt repeats the first one and is dropped
        assert_eq!(
            polygons[0],
            vec![p(30.0, 31.0), p(30.0, 31.001), p(30.001, 31.001)]
        );
    }

    #[test]
    fn test_unsupported() {
        assert!(matches!(
            parse("", "shp"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_open_ring_keeps_short_input() {
        assert_eq!(open_ring(vec![p(1.0, 1.0)]), vec![p(1.0, 1.0)]);
        assert_eq!(open_ring(vec![]), Vec::<GeoPoint>::new());
    }
}
