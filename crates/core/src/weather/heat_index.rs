//! Heat index (Rothfusz regression) and NWS warning levels
//!
//! HI = c₁ + c₂T + c₃R + c₄TR + c₅T² + c₆R² + c₇T²R + c₈TR² + c₉T²R²
//!
//! The regression was fitted in °F; the Celsius coefficients are the same
//! polynomial re-expressed for T in °C, so both entry points agree to within
//! rounding of the published coefficients.
//!
//! The fit is unreliable below 80°F. Values are still computed there, but the
//! checked entry points flag inputs below 25°C (77°F).
//!
//! # Scientific References
//! - Rothfusz, L.P. (1990). "The Heat Index Equation". NWS Technical Attachment SR 90-23.
//! - <https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml>

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core_types::{Celsius, Fahrenheit, RelativeHumidity};
use crate::error::{Formula, Validated, WxError};

/// Rothfusz coefficients for T in °F
const FAHRENHEIT_COEFFICIENTS: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -6.83783e-3,
    -5.481717e-2,
    1.22874e-3,
    8.5282e-4,
    -1.99e-6,
];

/// Rothfusz coefficients for T in °C
const CELSIUS_COEFFICIENTS: [f64; 9] = [
    -8.78469475556,
    1.61139411,
    2.33854883889,
    -0.14611605,
    -0.012308094,
    -0.0164248277778,
    0.002211732,
    0.00072546,
    -0.000003582,
];

/// Advisory lower temperature bound of the regression
const MIN_TEMPERATURE_F: f64 = 77.0;
const MIN_TEMPERATURE_C: f64 = 25.0;

fn rothfusz(c: &[f64; 9], temp: f64, humidity: RelativeHumidity) -> f64 {
    let t = temp;
    let r = humidity.clamped().to_f64();
    c[0] + c[1] * t
        + c[2] * r
        + c[3] * t * r
        + c[4] * t * t
        + c[5] * r * r
        + c[6] * t * t * r
        + c[7] * t * r * r
        + c[8] * t * t * r * r
}

/// Heat index with validity reporting (°F).
///
/// The value is always the regression result; below 77°F it is flagged with
/// [`WxError::InputOutOfRange`] because the fit is unreliable there.
pub fn heat_index_f_checked(temp: Fahrenheit, humidity: RelativeHumidity) -> Validated<Fahrenheit> {
    let hi = Fahrenheit::new(rothfusz(&FAHRENHEIT_COEFFICIENTS, *temp, humidity));
    if *temp < MIN_TEMPERATURE_F {
        debug!(temperature_f = *temp, heat_index_f = *hi, "heat index below 77°F");
        Validated::flagged(hi, WxError::out_of_range(Formula::HeatIndex))
    } else {
        Validated::valid(hi)
    }
}

/// Heat index with validity reporting (°C); see [`heat_index_f_checked`]
pub fn heat_index_c_checked(temp: Celsius, humidity: RelativeHumidity) -> Validated<Celsius> {
    let hi = Celsius::new(rothfusz(&CELSIUS_COEFFICIENTS, *temp, humidity));
    if *temp < MIN_TEMPERATURE_C {
        debug!(temperature_c = *temp, heat_index_c = *hi, "heat index below 25°C");
        Validated::flagged(hi, WxError::out_of_range(Formula::HeatIndex))
    } else {
        Validated::valid(hi)
    }
}

/// Heat index for the given temperature (°F) and relative humidity
pub fn heat_index_f(temp: Fahrenheit, humidity: RelativeHumidity) -> Fahrenheit {
    heat_index_f_checked(temp, humidity).value()
}

/// Heat index for the given temperature (°C) and relative humidity
pub fn heat_index_c(temp: Celsius, humidity: RelativeHumidity) -> Celsius {
    heat_index_c_checked(temp, humidity).value()
}

/// NWS heat index warning level, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeatIndexWarning {
    /// No elevated caution warranted
    #[default]
    None,
    /// Fatigue possible with prolonged exposure and activity
    Caution,
    /// Heat cramps and heat exhaustion possible
    ExtremeCaution,
    /// Heat cramps and heat exhaustion likely; heat stroke probable
    Danger,
    /// Heat stroke imminent
    ExtremeDanger,
}

/// Lower bounds (°F) of each level above `None`
const WARNING_THRESHOLDS_F: [(f64, HeatIndexWarning); 4] = [
    (80.0, HeatIndexWarning::Caution),
    (91.0, HeatIndexWarning::ExtremeCaution),
    (104.0, HeatIndexWarning::Danger),
    (125.0, HeatIndexWarning::ExtremeDanger),
];

impl HeatIndexWarning {
    /// Warning level for a heat index in °F.
    ///
    /// A value exactly on a threshold belongs to the higher level.
    pub fn from_fahrenheit(heat_index: Fahrenheit) -> Self {
        Self::classify(*heat_index, |threshold_f| threshold_f)
    }

    /// Warning level for a heat index in °C, using the °F thresholds converted to °C
    pub fn from_celsius(heat_index: Celsius) -> Self {
        Self::classify(*heat_index, |threshold_f| {
            *Fahrenheit::new(threshold_f).to_celsius()
        })
    }

    fn classify(value: f64, threshold: impl Fn(f64) -> f64) -> Self {
        let mut level = HeatIndexWarning::None;
        for (threshold_f, next) in WARNING_THRESHOLDS_F {
            if value < threshold(threshold_f) {
                break;
            }
            level = next;
        }
        level
    }

    /// Health effects associated with this level
    pub fn description(self) -> &'static str {
        match self {
            HeatIndexWarning::None => "No elevated caution warranted.",
            HeatIndexWarning::Caution => {
                "Fatigue possible with prolonged exposure and activity. Continuing activity could result in heat cramps."
            }
            HeatIndexWarning::ExtremeCaution => {
                "Heat cramps and heat exhaustion possible. Continuing activity could result in heat stroke."
            }
            HeatIndexWarning::Danger => {
                "Heat cramps and heat exhaustion likely; heat stroke probable with continued activity."
            }
            HeatIndexWarning::ExtremeDanger => "Heat stroke imminent.",
        }
    }
}

impl fmt::Display for HeatIndexWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeatIndexWarning::None => "None",
            HeatIndexWarning::Caution => "Caution",
            HeatIndexWarning::ExtremeCaution => "Extreme Caution",
            HeatIndexWarning::Danger => "Danger",
            HeatIndexWarning::ExtremeDanger => "Extreme Danger",
        };
        f.write_str(name)
    }
}

/// Warning level for a heat index in °F
pub fn heat_index_warning_f(heat_index: Fahrenheit) -> HeatIndexWarning {
    HeatIndexWarning::from_fahrenheit(heat_index)
}

/// Warning level for a heat index in °C
pub fn heat_index_warning_c(heat_index: Celsius) -> HeatIndexWarning {
    HeatIndexWarning::from_celsius(heat_index)
}
