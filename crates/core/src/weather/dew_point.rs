//! Dew point (Magnus formula)
//!
//! # Scientific References
//! - Alduchov, O.A. & Eskridge, R.E. (1996). "Improved Magnus form approximation of
//!   saturation vapor pressure". Journal of Applied Meteorology, 35(4), 601-609.

use crate::core_types::{Celsius, Fahrenheit, RelativeHumidity};

// Magnus constants (Alduchov & Eskridge 1996)
const MAGNUS_A: f64 = 17.625; // Dimensionless coefficient
const MAGNUS_B: f64 = 243.04; // °C - temperature offset

/// Dew point for the given temperature and relative humidity.
///
/// Humidity is clamped to 0-100 first. At 0% the logarithm diverges and the
/// result is NaN.
pub fn dew_point_c(temp: Celsius, humidity: RelativeHumidity) -> Celsius {
    let t = *temp;
    let humidity_fraction = humidity.clamped().to_f64() / 100.0;
    let gamma = humidity_fraction.ln() + MAGNUS_A * t / (MAGNUS_B + t);
    Celsius::new(MAGNUS_B * gamma / (MAGNUS_A - gamma))
}

/// Dew point in Fahrenheit; see [`dew_point_c`]
pub fn dew_point_f(temp: Fahrenheit, humidity: RelativeHumidity) -> Fahrenheit {
    dew_point_c(temp.to_celsius(), humidity).to_fahrenheit()
}
