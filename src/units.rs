//! Egyptian land-area units.

use core::fmt;

pub const SQUARE_METERS_PER_FEDDAN: f64 = 4200.0;
pub const KIRAT_PER_FEDDAN: f64 = 24.0;
pub const SAHAM_PER_KIRAT: f64 = 24.0;

pub const SQUARE_METERS_PER_KIRAT: f64 = SQUARE_METERS_PER_FEDDAN / KIRAT_PER_FEDDAN;
pub const SQUARE_METERS_PER_SAHAM: f64 = SQUARE_METERS_PER_KIRAT / SAHAM_PER_KIRAT;

/// An area split into feddan, kirat and saham.
///
/// Each stage works on the exact remainder of the previous one; only saham
/// is rounded (to two decimals), so it may read `24.00` right below a kirat
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feddan {
    pub feddan: u64,
    pub kirat: u8,
    pub saham: f64,
}

impl Feddan {
    pub fn from_square_meters(area_m2: f64) -> Self {
        let area_m2 = area_m2.max(0.0);
        let feddan = (area_m2 / SQUARE_METERS_PER_FEDDAN).floor();
        let remainder = area_m2 % SQUARE_METERS_PER_FEDDAN;
        let kirat = (remainder / SQUARE_METERS_PER_KIRAT).floor();
        let saham = (remainder % SQUARE_METERS_PER_KIRAT) / SQUARE_METERS_PER_SAHAM;
        Feddan {
            feddan: feddan as u64,
            kirat: kirat as u8,
            saham: round2(saham),
        }
    }
    pub fn to_square_meters(&self) -> f64 {
        self.feddan as f64 * SQUARE_METERS_PER_FEDDAN
            + self.kirat as f64 * SQUARE_METERS_PER_KIRAT
            + self.saham * SQUARE_METERS_PER_SAHAM
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl fmt::Display for Feddan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} F , {} K , {:.2} S", self.feddan, self.kirat, self.saham)
    }
}
