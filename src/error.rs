use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer than three points: the polygon area is not computable.
    #[error("not enough points to form a polygon (got {found}, need 3)")]
    InsufficientPoints { found: usize },

    #[error("non-finite coordinate (lat: {lat}, lon: {lon})")]
    NonFiniteCoordinate { lat: f64, lon: f64 },

    #[error("invalid point `{input}`: expected numeric `lat,lon`")]
    ParsePoint { input: String },

    #[error("no point at index {index} (sequence has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("kml: {0}")]
    Kml(String),

    #[error("gpx: {0}")]
    Gpx(String),

    #[error("geojson: {0}")]
    GeoJson(String),

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("no polygon found in {0}")]
    NoPolygon(String),
}

pub type Result<T> = std::result::Result<T, Error>;
