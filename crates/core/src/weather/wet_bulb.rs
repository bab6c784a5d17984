//! Wet-bulb temperature (Stull 2011 closed form)
//!
//! Tw = T·atan(0.151977·(RH + 8.313659)^½) + atan(T + RH) − atan(RH − 1.676331)
//!      + 0.00391838·RH^(3/2)·atan(0.023101·RH) − 4.686035
//!
//! T in °C, RH in percent, at standard sea-level pressure. The fit is only
//! trustworthy inside an empirical region:
//! - −20°C ≤ T ≤ 50°C
//! - 5% ≤ RH ≤ 99%
//! - RH ≥ −(75 − 5)/(20 + 9.25)·T + 25 (excludes the cold, dry wedge)
//!
//! Outside it no computed value is returned; the input temperature is passed
//! back with [`WxError::InputOutOfRange`].
//!
//! # Scientific References
//! - Stull, R. (2011). "Wet-Bulb Temperature from Relative Humidity and Air
//!   Temperature". Journal of Applied Meteorology and Climatology, 50(11), 2267-2269.

use crate::core_types::{Celsius, Fahrenheit, RelativeHumidity};
use crate::error::{Formula, Validated, WxError};
use tracing::debug;

const MIN_TEMPERATURE_C: f64 = -20.0;
const MAX_TEMPERATURE_C: f64 = 50.0;
const MIN_HUMIDITY: f64 = 5.0;
const MAX_HUMIDITY: f64 = 99.0;

/// Minimum relative humidity along the diagonal boundary of the valid region
fn min_humidity_for(t: f64) -> f64 {
    -(75.0 - 5.0) / (20.0 + 9.25) * t + 25.0
}

fn in_valid_region(t: f64, rh: f64) -> bool {
    (MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&t)
        && (MIN_HUMIDITY..=MAX_HUMIDITY).contains(&rh)
        && rh >= min_humidity_for(t)
}

fn stull(t: f64, rh: f64) -> f64 {
    t * (0.151977 * (rh + 8.313659).sqrt()).atan() + (t + rh).atan() - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}

/// Wet-bulb temperature for the given air temperature (°C) and relative humidity.
///
/// Humidity is clamped to 0-100 before the region check.
///
/// # Example
/// ```
/// use wx_core::core_types::{Celsius, RelativeHumidity};
/// use wx_core::weather::wet_bulb_c;
///
/// let tw = wet_bulb_c(Celsius::new(20.0), RelativeHumidity::new(60));
/// assert!(tw.is_valid());
/// assert!((*tw.value() - 15.0).abs() < 1.0);
/// ```
pub fn wet_bulb_c(temp: Celsius, humidity: RelativeHumidity) -> Validated<Celsius> {
    let t = *temp;
    let rh = humidity.clamped().to_f64();

    if !in_valid_region(t, rh) {
        debug!(
            temperature_c = t,
            relative_humidity = rh,
            "wet-bulb input outside the supported region"
        );
        return Validated::flagged(temp, WxError::out_of_range(Formula::WetBulb));
    }

    Validated::valid(Celsius::new(stull(t, rh)))
}

/// Wet-bulb temperature in Fahrenheit; see [`wet_bulb_c`].
///
/// Out-of-region inputs return the given Fahrenheit temperature unchanged.
pub fn wet_bulb_f(temp: Fahrenheit, humidity: RelativeHumidity) -> Validated<Fahrenheit> {
    match wet_bulb_c(temp.to_celsius(), humidity).into_parts() {
        (tw, None) => Validated::valid(tw.to_fahrenheit()),
        (_, Some(err)) => Validated::flagged(temp, err),
    }
}
