//! Tolerance-based float comparison
//!
//! Meteorological formulas are approximations; results are usually compared
//! against reference values to a named tolerance rather than exactly.

use std::cmp::Ordering;

/// Tolerance presets
pub mod tolerance {
    pub const EXACT: f64 = 0.0;
    /// Within one whole unit
    pub const WHOLE: f64 = 1.0;
    pub const TENTH: f64 = 0.1;
    pub const HUNDREDTH: f64 = 0.01;
    pub const THOUSANDTH: f64 = 0.001;
}

/// Compare `a` to `b`, treating values within `tolerance` of each other as equal.
///
/// NaN compares equal to everything (neither strictly above nor below).
#[must_use]
pub fn compare(a: f64, b: f64, tolerance: f64) -> Ordering {
    if a > b + tolerance {
        Ordering::Greater
    } else if a < b - tolerance {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// True if `a` and `b` differ by at most `tolerance`
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    compare(a, b, tolerance) == Ordering::Equal
}
