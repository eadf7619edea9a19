use crate::{point::GeoPoint, sketch::Sketch};

pub struct SVG {
    sketch: Sketch,
    elements: Vec<String>,
}

impl SVG {
    pub fn init(sketch: &Sketch) -> Self {
        Self {
            sketch: *sketch,
            elements: Vec::new(),
        }
    }
    /// Outline (closed once there are two points), a dot per vertex and
    /// its 1-based number.
    pub fn add_polygon(&mut self, points: &[GeoPoint]) {
        let xy: Vec<(f64, f64)> = self
            .sketch
            .project(points)
            .into_iter()
            .map(|(x, y)| self.flip(x, y))
            .collect();
        if xy.len() > 1 {
            let s = xy
                .iter()
                .map(|(x, y)| format!("{:.2},{:.2}", x, y))
                .collect::<Vec<String>>()
                .join(" ");
            self.elements.push(format!(
                r#"  <polygon points="{}" fill="none" stroke="blue" stroke-width="6"/>"#,
                s
            ));
        }
        for (i, (x, y)) in xy.iter().enumerate() {
            self.elements.push(format!(
                r#"  <circle cx="{:.2}" cy="{:.2}" r="5" fill="red"/>"#,
                x, y
            ));
            self.elements.push(format!(
                r#"  <text x="{:.2}" y="{:.2}" font-size="40" fill="black">{}</text>"#,
                x + 10.0,
                y - 10.0,
                i + 1
            ));
        }
    }
    pub fn render(&self) -> String {
        let mut svg = format!(
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.sketch.width, self.sketch.height
        );
        svg.push('\n');
        for e in &self.elements {
            svg.push_str(e);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
    // svg y axis points down
    fn flip(&self, x: f64, y: f64) -> (f64, f64) {
        (x, self.sketch.height - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_triangle() {
        let mut svg = SVG::init(&Sketch::new(500.0, 500.0, 1000.0));
        svg.add_polygon(&[p(0.0, 0.0), p(0.0, 0.1), p(0.1, 0.0)]);
        let out = svg.render();
        assert!(out.starts_with(r#"<svg width="500" height="500""#));
        assert!(out.ends_with("</svg>"));
        assert_eq!(out.matches("<polygon").count(), 1);
        assert_eq!(out.matches("<circle").count(), 3);
        assert!(out.contains(">3</text>"));
        // southernmost, westernmost vertex ends up bottom left
        assert!(out.contains(r#"<circle cx="200.00" cy="300.00""#));
    }

    #[test]
    fn test_single_point_has_no_outline() {
        let mut svg = SVG::init(&Sketch::default());
        svg.add_polygon(&[p(1.0, 1.0)]);
        let out = svg.render();
        assert_eq!(out.matches("<polygon").count(), 0);
        assert_eq!(out.matches("<circle").count(), 1);
    }
}
