//! Core types and utilities

pub mod compare;
pub mod direction;
pub mod humidity;
pub mod units;

// Re-export
pub use compare::{approx_eq, compare, tolerance};
pub use direction::{Degrees, DirectionPrecision};
pub use humidity::{AbsoluteHumidity, RelativeHumidity};
pub use units::{
    Celsius, Fahrenheit, InchesOfMercury, Kelvin, Kilometers, KilometersPerHour, Knots, Meters,
    Miles, MilesPerHour, Millibars, NauticalMiles,
};
