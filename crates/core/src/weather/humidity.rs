//! Absolute ↔ relative humidity conversion and indoor humidity guidance
//!
//! Saturation vapour pressure comes from the Antoine equation for water
//! (valid −20°C to 100°C):
//!
//! log₁₀(P / mmHg) = A − B / (C + T)
//!
//! and the vapour density from the ideal gas law:
//!
//! ρ = e·M / (R·T)
//!
//! Outside the Antoine range the saturation pressure is reported as 0 and
//! both conversions yield zero humidity.
//!
//! # Scientific References
//! - Antoine, C. (1888). "Tensions des vapeurs; nouvelle relation entre les tensions
//!   et les températures". Comptes Rendus, 107, 681-684.
//! - Coefficients for water from the Dortmund Data Bank.

use crate::core_types::{AbsoluteHumidity, Celsius, Fahrenheit, Millibars, RelativeHumidity};
use tracing::debug;

// Antoine coefficients for water (P in mmHg, T in °C)
const ANTOINE_A: f64 = 8.07131;
const ANTOINE_B: f64 = 1730.63;
const ANTOINE_C: f64 = 233.426;
const ANTOINE_MIN_C: f64 = -20.0;
const ANTOINE_MAX_C: f64 = 100.0;

const MILLIBARS_PER_MMHG: f64 = 1.333224;
const PASCALS_PER_MILLIBAR: f64 = 100.0;

/// Molar mass of water (g/mol)
const WATER_MOLAR_MASS: f64 = 18.016;

/// Universal gas constant (J/(mol·K))
const GAS_CONSTANT: f64 = 8.314;

/// Saturation vapour pressure over water.
///
/// Returns 0 mb outside −20°C..=100°C.
pub fn saturation_vapor_pressure(temp: Celsius) -> Millibars {
    let t = *temp;
    if !(ANTOINE_MIN_C..=ANTOINE_MAX_C).contains(&t) {
        debug!(temperature_c = t, "temperature outside Antoine equation range");
        return Millibars::new(0.0);
    }
    let mmhg = 10.0_f64.powf(ANTOINE_A - ANTOINE_B / (ANTOINE_C + t));
    Millibars::new(mmhg * MILLIBARS_PER_MMHG)
}

/// Absolute humidity of air at the given temperature and relative humidity.
///
/// Relative humidity is clamped to 0-100 and the result to 0-50 g/m³.
pub fn absolute_humidity_c(temp: Celsius, humidity: RelativeHumidity) -> AbsoluteHumidity {
    let saturation = saturation_vapor_pressure(temp);
    if *saturation == 0.0 {
        return AbsoluteHumidity::new(0.0);
    }

    let vapor_pa = *saturation * PASCALS_PER_MILLIBAR * humidity.clamped().to_f64() / 100.0;
    let grams_per_m3 = vapor_pa * WATER_MOLAR_MASS / (GAS_CONSTANT * *temp.to_kelvin());
    AbsoluteHumidity::new(grams_per_m3).clamped()
}

/// Absolute humidity from a Fahrenheit temperature; see [`absolute_humidity_c`]
pub fn absolute_humidity_f(temp: Fahrenheit, humidity: RelativeHumidity) -> AbsoluteHumidity {
    absolute_humidity_c(temp.to_celsius(), humidity)
}

/// Relative humidity of air at the given temperature holding the given absolute humidity.
///
/// Rounded to the nearest whole percent and clamped to 0-100.
pub fn relative_humidity_c(temp: Celsius, humidity: AbsoluteHumidity) -> RelativeHumidity {
    let saturation = saturation_vapor_pressure(temp);
    if *saturation == 0.0 {
        return RelativeHumidity::new(0);
    }

    let vapor_pa = *humidity * GAS_CONSTANT * *temp.to_kelvin() / WATER_MOLAR_MASS;
    let percent = vapor_pa / (*saturation * PASCALS_PER_MILLIBAR) * 100.0;
    RelativeHumidity::clamped_from((percent + 0.5) as i32)
}

/// Relative humidity from a Fahrenheit temperature; see [`relative_humidity_c`]
pub fn relative_humidity_f(temp: Fahrenheit, humidity: AbsoluteHumidity) -> RelativeHumidity {
    relative_humidity_c(temp.to_celsius(), humidity)
}

/// Recommended maximum indoor relative humidity for the outdoor temperature (°F).
///
/// Keeps condensation off windows in cold weather.
pub fn indoor_humidity_recommendation_f(outdoor: Fahrenheit) -> RelativeHumidity {
    const LADDER: [(f64, i32); 7] = [
        (50.0, 50),
        (40.0, 45),
        (30.0, 40),
        (20.0, 35),
        (10.0, 30),
        (0.0, 25),
        (-10.0, 20),
    ];

    let t = *outdoor;
    let percent = LADDER
        .iter()
        .find(|(min_f, _)| t >= *min_f)
        .map_or(15, |&(_, rh)| rh);
    RelativeHumidity::new(percent)
}

/// Recommended maximum indoor relative humidity for the outdoor temperature (°C)
pub fn indoor_humidity_recommendation_c(outdoor: Celsius) -> RelativeHumidity {
    indoor_humidity_recommendation_f(outdoor.to_fahrenheit())
}
