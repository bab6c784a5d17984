//! Weather Calculations Core Library
//!
//! Strongly-typed meteorological quantities and the formulas that derive one
//! from another. Every measurement carries its unit in the type, so a
//! Fahrenheit reading cannot be passed where Celsius is expected.
//!
//! ## Derived quantities
//!
//! - Dew point (Magnus), wind chill (NWS 2001), heat index (Rothfusz) with
//!   NWS warning levels, wet-bulb temperature (Stull 2011)
//! - Absolute ↔ relative humidity (Antoine + ideal gas law)
//! - Indoor humidity recommendation for a given outdoor temperature
//!
//! ## Direction statistics
//!
//! Wind directions wrap at 360°, so they are averaged as unit vectors rather
//! than arithmetically. See [`statistics`].
//!
//! ## Validity reporting
//!
//! Formulas with a restricted domain return a [`Validated`] value: the best
//! available result plus an optional [`WxError`].

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod statistics;
pub mod weather;

// Re-export core types
pub use core_types::{
    AbsoluteHumidity, Celsius, Degrees, DirectionPrecision, Fahrenheit, Kelvin, Knots,
    InchesOfMercury, KilometersPerHour, MilesPerHour, Millibars, RelativeHumidity,
};

// Re-export error types
pub use error::{Formula, Validated, WxError};

// Re-export the most used calculations
pub use statistics::{average_direction, average_direction_weighted};
pub use weather::HeatIndexWarning;
