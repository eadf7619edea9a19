pub mod distance;
pub mod error;
pub mod point;
pub mod polygon;
pub mod read_polygon;
pub mod reference;
pub mod report;
pub mod session;
pub mod sketch;
pub mod svg;
pub mod units;

pub use error::{Error, Result};
pub use point::{GeoPoint, PointSequence};
