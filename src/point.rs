use core::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A latitude/longitude pair in decimal degrees.
///
/// Construction only rejects non-finite values. Coordinates outside
/// [-90, 90] x [-180, 180] are kept as given; the formulas still produce a
/// number for them, it just has no geographic meaning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(Error::NonFiniteCoordinate { lat, lon });
        }
        let ret = GeoPoint { lat, lon };
        if !ret.in_range() {
            log::warn!("point out of range: {}", ret);
        }
        Ok(ret)
    }
    pub fn lat(&self) -> f64 {
        self.lat
    }
    pub fn lon(&self) -> f64 {
        self.lon
    }
    pub fn in_range(&self) -> bool {
        -90.0 <= self.lat && self.lat <= 90.0 && -180.0 <= self.lon && self.lon <= 180.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"` or `"lat lon"`.
impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ParsePoint {
            input: s.to_string(),
        };
        let fields: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 2 {
            return Err(err());
        }
        let lat: f64 = fields[0].parse().map_err(|_| err())?;
        let lon: f64 = fields[1].parse().map_err(|_| err())?;
        GeoPoint::new(lat, lon)
    }
}

/// Caller-owned, ordered vertex list. Order defines edges and winding.
pub type PointSequence = Vec<GeoPoint>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl BoundingBox {
    pub fn of(points: &[GeoPoint]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().fold((first, first), |(min, max), curr| {
            (
                GeoPoint {
                    lat: min.lat.min(curr.lat),
                    lon: min.lon.min(curr.lon),
                },
                GeoPoint {
                    lat: max.lat.max(curr.lat),
                    lon: max.lon.max(curr.lon),
                },
            )
        });
        Some(BoundingBox { min, max })
    }
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min.lat + self.max.lat) / 2.0,
            (self.min.lon + self.max.lon) / 2.0,
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bbox(min: {}, max: {})", self.min, self.max)
    }
}
