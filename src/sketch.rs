use crate::point::{BoundingBox, GeoPoint};

pub const DEFAULT_SCALE: f64 = 100_000.0;

/// Linear lon/lat to canvas mapping that puts the centre of the points'
/// bounding box in the middle of the canvas. y grows northwards.
#[derive(Clone, Copy, Debug)]
pub struct Sketch {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Sketch {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Sketch {
            width,
            height,
            scale,
        }
    }

    /// Canvas positions of the points; empty when there is nothing to draw.
    pub fn project(&self, points: &[GeoPoint]) -> Vec<(f64, f64)> {
        if self.width == 0.0 || self.height == 0.0 {
            return Vec::new();
        }
        let Some(bbox) = BoundingBox::of(points) else {
            return Vec::new();
        };
        let (center_lat, center_lon) = bbox.center();
        let offset_x = self.width / 2.0;
        let offset_y = self.height / 2.0;
        points
            .iter()
            .map(|p| {
                (
                    (p.lon() - center_lon) * self.scale + offset_x,
                    (p.lat() - center_lat) * self.scale + offset_y,
                )
            })
            .collect()
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Sketch::new(500.0, 500.0, DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_centered() {
        let sketch = Sketch::new(200.0, 100.0, 1000.0);
        let xy = sketch.project(&[p(30.0, 31.0), p(30.1, 31.2)]);
        assert_eq!(xy.len(), 2);
        assert!((xy[0].0 - 0.0).abs() < 1e-9);
        assert!((xy[0].1 - 0.0).abs() < 1e-9);
        assert!((xy[1].0 - 200.0).abs() < 1e-9);
        assert!((xy[1].1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_in_middle() {
        let xy = Sketch::default().project(&[p(10.0, 20.0)]);
        assert_eq!(xy, vec![(250.0, 250.0)]);
    }

    #[test]
    fn test_nothing_to_draw() {
        assert!(Sketch::default().project(&[]).is_empty());
        assert!(Sketch::new(0.0, 100.0, 1.0).project(&[p(1.0, 1.0)]).is_empty());
    }
}
