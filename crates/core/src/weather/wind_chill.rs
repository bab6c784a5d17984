//! Wind chill (NWS 2001 formula)
//!
//! WC = 35.74 + 0.6215·T − 35.75·V^0.16 + 0.4275·T·V^0.16
//!
//! With T in °F and V in mph. The formula is only defined for T ≤ 50°F and
//! V ≥ 3 mph; outside that domain wind has no chilling effect and the air
//! temperature itself is returned.
//!
//! # Scientific References
//! - Osczevski, R. & Bluestein, M. (2005). "The New Wind Chill Equivalent Temperature
//!   Chart". Bulletin of the American Meteorological Society, 86(10), 1453-1458.
//! - <https://www.weather.gov/safety/cold-wind-chill-chart>

use crate::core_types::{Celsius, Fahrenheit, MilesPerHour};
use crate::error::{Formula, Validated, WxError};
use tracing::debug;

/// Upper temperature limit of the formula (°F)
const MAX_TEMPERATURE_F: f64 = 50.0;

/// Lower wind speed limit of the formula (mph)
const MIN_WIND_SPEED_MPH: f64 = 3.0;

/// Wind chill in °F, or `None` outside the formula's domain
fn wind_chill_in_domain(temp: Fahrenheit, wind_speed: MilesPerHour) -> Option<Fahrenheit> {
    let t = *temp;
    let v = *wind_speed;
    if t > MAX_TEMPERATURE_F || v < MIN_WIND_SPEED_MPH {
        debug!(
            temperature_f = t,
            wind_speed_mph = v,
            "wind chill outside T <= 50°F, V >= 3 mph"
        );
        return None;
    }

    let v_pow = v.powf(0.16);
    Some(Fahrenheit::new(
        35.74 + 0.6215 * t - 35.75 * v_pow + 0.4275 * t * v_pow,
    ))
}

/// Wind chill with validity reporting.
///
/// Outside the domain the input temperature is returned unchanged alongside
/// [`WxError::InputOutOfRange`].
pub fn wind_chill_f_checked(temp: Fahrenheit, wind_speed: MilesPerHour) -> Validated<Fahrenheit> {
    match wind_chill_in_domain(temp, wind_speed) {
        Some(wc) => Validated::valid(wc),
        None => Validated::flagged(temp, WxError::out_of_range(Formula::WindChill)),
    }
}

/// Wind chill with validity reporting, Celsius temperature and mph wind speed
pub fn wind_chill_c_checked(temp: Celsius, wind_speed: MilesPerHour) -> Validated<Celsius> {
    match wind_chill_in_domain(temp.to_fahrenheit(), wind_speed) {
        Some(wc) => Validated::valid(wc.to_celsius()),
        None => Validated::flagged(temp, WxError::out_of_range(Formula::WindChill)),
    }
}

/// Wind chill for the given temperature (°F) and wind speed (mph).
///
/// If the wind is below 3 mph or the temperature above 50°F the given
/// temperature is returned.
pub fn wind_chill_f(temp: Fahrenheit, wind_speed: MilesPerHour) -> Fahrenheit {
    wind_chill_f_checked(temp, wind_speed).value()
}

/// Wind chill for the given temperature (°C) and wind speed (mph).
///
/// If the wind is below 3 mph or the temperature above 10°C the given
/// temperature is returned.
pub fn wind_chill_c(temp: Celsius, wind_speed: MilesPerHour) -> Celsius {
    wind_chill_c_checked(temp, wind_speed).value()
}
