use crate::{
    distance::{self, Edge},
    error::{Error, Result},
    point::{GeoPoint, PointSequence},
    polygon::{self, PolygonArea},
};

/// Point-entry state: the caller's sequence plus a redo stack.
///
/// Measurements are recomputed from a borrowed snapshot of `points` on
/// every call; nothing is cached.
#[derive(Clone, Debug, Default)]
pub struct Session {
    points: PointSequence,
    redo_stack: Vec<GeoPoint>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_points(points: PointSequence) -> Self {
        Session {
            points,
            redo_stack: Vec::new(),
        }
    }
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Appends a point. A new point invalidates anything that was undone.
    pub fn add(&mut self, point: GeoPoint) {
        log::debug!("add {}", point);
        self.points.push(point);
        self.redo_stack.clear();
    }

    pub fn undo(&mut self) -> Option<GeoPoint> {
        let last = self.points.pop()?;
        log::debug!("undo {}", last);
        self.redo_stack.push(last);
        Some(last)
    }

    pub fn redo(&mut self) -> Option<GeoPoint> {
        let point = self.redo_stack.pop()?;
        log::debug!("redo {}", point);
        self.points.push(point);
        Some(point)
    }

    /// Takes the point at `index` out of the sequence so it can be
    /// corrected and added again. The redo stack is left alone.
    pub fn edit(&mut self, index: usize) -> Result<GeoPoint> {
        if index >= self.points.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let point = self.points.remove(index);
        log::debug!("edit #{}: {}", index, point);
        Ok(point)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.redo_stack.clear();
    }

    pub fn distances(&self) -> Vec<Edge> {
        distance::edge_distances(&self.points)
    }

    pub fn area(&self) -> Result<PolygonArea> {
        polygon::area(&self.points)
    }
}
