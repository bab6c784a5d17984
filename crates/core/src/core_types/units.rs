//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for meteorological quantities to prevent
//! accidental mixing of incompatible units (e.g., Celsius with Fahrenheit, or
//! miles per hour with knots).
//!
//! # Design Philosophy
//! - One type per quantity/unit pair, all backed by `f64`
//! - Arithmetic only between values of the same unit; crossing units always goes
//!   through an explicit, named conversion (`to_celsius`, `to_kmh`, ...)
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - No range restriction at the type level; formulas validate their own domain
//! - Serde support behind the default `serde` feature
//!
//! # Usage
//! ```
//! use wx_core::core_types::units::{Celsius, Fahrenheit, MilesPerHour};
//!
//! let temp = Fahrenheit::new(212.0);
//! let celsius: Celsius = temp.into();
//! assert!((*celsius - 100.0).abs() < 1e-9);
//!
//! let wind = MilesPerHour::new(10.0);
//! assert!((*wind.to_kmh() - 16.0934).abs() < 1e-9);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

/// °F = °C × 1.8 + 32
const FAHRENHEIT_SCALE: f64 = 1.8;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// 0°C = 273.15 K
const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

const KM_PER_MILE: f64 = 1.60934;
const METERS_PER_MILE: f64 = 1609.34;
const MILES_PER_NAUTICAL_MILE: f64 = 1.15078;
const KM_PER_NAUTICAL_MILE: f64 = 1.852;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
const METERS_PER_KM: f64 = 1000.0;

const MILLIBARS_PER_INCH_OF_MERCURY: f64 = 33.8639;

// ============================================================================
// SHARED SCALAR BEHAVIOUR
// ============================================================================

/// Generates a unit-tagged `f64` newtype with total ordering, same-unit
/// arithmetic, scalar scaling and a `Display` carrying the unit symbol.
macro_rules! scalar_unit {
    ($(#[$meta:meta])* $name:ident, $symbol:literal, $precision:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` value")]
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = $name;
            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.*}{}", $precision, self.0, $symbol)
            }
        }
    };
}

// ============================================================================
// TEMPERATURE TYPES
// ============================================================================

scalar_unit!(
    /// Temperature in degrees Celsius
    ///
    /// Canonical unit for every derived-quantity formula.
    Celsius,
    "°C",
    1
);

scalar_unit!(
    /// Temperature in degrees Fahrenheit
    Fahrenheit,
    "°F",
    1
);

scalar_unit!(
    /// Absolute temperature in Kelvin
    Kelvin,
    " K",
    2
);

impl Celsius {
    /// Water freezing point
    pub const FREEZING: Celsius = Celsius(0.0);

    /// Convert to Fahrenheit (°F = °C × 1.8 + 32)
    #[inline]
    #[must_use]
    pub fn to_fahrenheit(self) -> Fahrenheit {
        Fahrenheit(self.0 * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET)
    }

    /// Convert to Kelvin
    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(self.0 + CELSIUS_KELVIN_OFFSET)
    }
}

impl Fahrenheit {
    /// Water freezing point
    pub const FREEZING: Fahrenheit = Fahrenheit(32.0);

    /// Convert to Celsius (°C = (°F − 32) / 1.8)
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius((self.0 - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE)
    }
}

impl Kelvin {
    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius(self.0 - CELSIUS_KELVIN_OFFSET)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Fahrenheit {
        c.to_fahrenheit()
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Celsius {
        f.to_celsius()
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Kelvin {
        c.to_kelvin()
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Celsius {
        k.to_celsius()
    }
}

// ============================================================================
// SPEED TYPES
// ============================================================================

scalar_unit!(
    /// Speed (e.g. wind speed) in miles per hour
    MilesPerHour,
    " mph",
    1
);

scalar_unit!(
    /// Speed in kilometers per hour
    KilometersPerHour,
    " km/h",
    1
);

scalar_unit!(
    /// Speed in knots (nautical miles per hour)
    Knots,
    " kt",
    1
);

impl MilesPerHour {
    /// Convert to kilometers per hour
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * KM_PER_MILE)
    }

    /// Convert to knots
    #[inline]
    #[must_use]
    pub fn to_knots(self) -> Knots {
        Knots(self.0 / MILES_PER_NAUTICAL_MILE)
    }
}

impl KilometersPerHour {
    /// Convert to miles per hour
    #[inline]
    #[must_use]
    pub fn to_mph(self) -> MilesPerHour {
        MilesPerHour(self.0 / KM_PER_MILE)
    }

    /// Convert to knots
    #[inline]
    #[must_use]
    pub fn to_knots(self) -> Knots {
        Knots(self.0 / KM_PER_NAUTICAL_MILE)
    }
}

impl Knots {
    /// Convert to miles per hour
    #[inline]
    #[must_use]
    pub fn to_mph(self) -> MilesPerHour {
        MilesPerHour(self.0 * MILES_PER_NAUTICAL_MILE)
    }

    /// Convert to kilometers per hour
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * KM_PER_NAUTICAL_MILE)
    }
}

impl From<MilesPerHour> for KilometersPerHour {
    fn from(s: MilesPerHour) -> KilometersPerHour {
        s.to_kmh()
    }
}

impl From<MilesPerHour> for Knots {
    fn from(s: MilesPerHour) -> Knots {
        s.to_knots()
    }
}

impl From<KilometersPerHour> for MilesPerHour {
    fn from(s: KilometersPerHour) -> MilesPerHour {
        s.to_mph()
    }
}

impl From<KilometersPerHour> for Knots {
    fn from(s: KilometersPerHour) -> Knots {
        s.to_knots()
    }
}

impl From<Knots> for MilesPerHour {
    fn from(s: Knots) -> MilesPerHour {
        s.to_mph()
    }
}

impl From<Knots> for KilometersPerHour {
    fn from(s: Knots) -> KilometersPerHour {
        s.to_kmh()
    }
}

// ============================================================================
// PRESSURE TYPES
// ============================================================================

scalar_unit!(
    /// Barometric pressure in inches of mercury
    InchesOfMercury,
    " inHg",
    2
);

scalar_unit!(
    /// Barometric pressure in millibars (hPa)
    Millibars,
    " mb",
    1
);

impl InchesOfMercury {
    /// Convert to millibars
    #[inline]
    #[must_use]
    pub fn to_millibars(self) -> Millibars {
        Millibars(self.0 * MILLIBARS_PER_INCH_OF_MERCURY)
    }
}

impl Millibars {
    /// Convert to inches of mercury
    #[inline]
    #[must_use]
    pub fn to_inches_of_mercury(self) -> InchesOfMercury {
        InchesOfMercury(self.0 / MILLIBARS_PER_INCH_OF_MERCURY)
    }
}

impl From<InchesOfMercury> for Millibars {
    fn from(p: InchesOfMercury) -> Millibars {
        p.to_millibars()
    }
}

impl From<Millibars> for InchesOfMercury {
    fn from(p: Millibars) -> InchesOfMercury {
        p.to_inches_of_mercury()
    }
}

// ============================================================================
// DISTANCE TYPES
// ============================================================================

scalar_unit!(
    /// Distance in statute miles
    Miles,
    " mi",
    2
);

scalar_unit!(
    /// Distance in kilometers
    Kilometers,
    " km",
    2
);

scalar_unit!(
    /// Distance in nautical miles
    NauticalMiles,
    " nmi",
    2
);

scalar_unit!(
    /// Distance in meters
    Meters,
    " m",
    1
);

impl Miles {
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 * KM_PER_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_nautical_miles(self) -> NauticalMiles {
        NauticalMiles(self.0 / MILES_PER_NAUTICAL_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_MILE)
    }
}

impl Kilometers {
    #[inline]
    #[must_use]
    pub fn to_miles(self) -> Miles {
        Miles(self.0 / KM_PER_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_nautical_miles(self) -> NauticalMiles {
        NauticalMiles(self.0 / KM_PER_NAUTICAL_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_KM)
    }
}

impl NauticalMiles {
    #[inline]
    #[must_use]
    pub fn to_miles(self) -> Miles {
        Miles(self.0 * MILES_PER_NAUTICAL_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 * KM_PER_NAUTICAL_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_NAUTICAL_MILE)
    }
}

impl Meters {
    #[inline]
    #[must_use]
    pub fn to_miles(self) -> Miles {
        Miles(self.0 / METERS_PER_MILE)
    }

    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / METERS_PER_KM)
    }

    #[inline]
    #[must_use]
    pub fn to_nautical_miles(self) -> NauticalMiles {
        NauticalMiles(self.0 / METERS_PER_NAUTICAL_MILE)
    }
}

impl From<Miles> for Kilometers {
    fn from(d: Miles) -> Kilometers {
        d.to_kilometers()
    }
}

impl From<Kilometers> for Miles {
    fn from(d: Kilometers) -> Miles {
        d.to_miles()
    }
}

impl From<NauticalMiles> for Kilometers {
    fn from(d: NauticalMiles) -> Kilometers {
        d.to_kilometers()
    }
}

impl From<Kilometers> for NauticalMiles {
    fn from(d: Kilometers) -> NauticalMiles {
        d.to_nautical_miles()
    }
}

impl From<Kilometers> for Meters {
    fn from(d: Kilometers) -> Meters {
        d.to_meters()
    }
}

impl From<Meters> for Kilometers {
    fn from(d: Meters) -> Kilometers {
        d.to_kilometers()
    }
}

// ============================================================================
// TESTS
// ============================================================================
