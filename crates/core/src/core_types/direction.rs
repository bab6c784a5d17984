//! Compass direction in degrees
//!
//! Directions wrap at 360°. The clamped form is always in `[0, 360)`, so 360°
//! is represented as 0° (north).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

const FULL_TURN: f64 = 360.0;

/// Beyond this magnitude repeated ±360 steps lose precision (and take too
/// long), so the angle is first reduced with `rem_euclid`.
const STEP_WRAP_LIMIT: f64 = FULL_TURN * 1_048_576.0;

const CARDINAL: [&str; 4] = ["N", "E", "S", "W"];
const INTERCARDINAL: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
const SECONDARY_INTERCARDINAL: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Direction in (angular) degrees, 0 = North, 90 = East
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    pub const NORTH: Degrees = Degrees(0.0);
    pub const EAST: Degrees = Degrees(90.0);
    pub const SOUTH: Degrees = Degrees(180.0);
    pub const WEST: Degrees = Degrees(270.0);

    /// Create a direction without wrapping
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Create a direction guaranteed to be within `0 <= d < 360`
    #[inline]
    #[must_use]
    pub fn clamped_from(value: f64) -> Self {
        Degrees(value).clamped()
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Wrap into `0 <= d < 360` by repeatedly adding or subtracting a full turn.
    ///
    /// NaN and infinities are returned unchanged.
    #[must_use]
    pub fn clamped(self) -> Self {
        if !self.0.is_finite() {
            return self;
        }

        let mut d = self.0;
        if d.abs() > STEP_WRAP_LIMIT {
            d = d.rem_euclid(FULL_TURN);
        }
        while d < 0.0 {
            d += FULL_TURN;
        }
        while d >= FULL_TURN {
            d -= FULL_TURN;
        }
        Degrees(d)
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Create from an angle in radians (no wrapping)
    #[inline]
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Degrees(radians.to_degrees())
    }

    /// Compass point name for this direction at the requested precision
    ///
    /// # Example
    /// ```
    /// use wx_core::core_types::{Degrees, DirectionPrecision};
    ///
    /// assert_eq!(Degrees::new(230.0).compass_point(DirectionPrecision::Intercardinal), "SW");
    /// ```
    #[must_use]
    pub fn compass_point(self, precision: DirectionPrecision) -> &'static str {
        let points: &[&'static str] = match precision {
            DirectionPrecision::Cardinal => &CARDINAL,
            DirectionPrecision::Intercardinal => &INTERCARDINAL,
            DirectionPrecision::SecondaryIntercardinal => &SECONDARY_INTERCARDINAL,
        };
        let sector = FULL_TURN / points.len() as f64;
        let index = (self.clamped().0 / sector + 0.5) as usize % points.len();
        points[index]
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Resolution of a compass point name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DirectionPrecision {
    /// N, E, S, W
    #[default]
    Cardinal,
    /// N, NE, E, SE, S, SW, W, NW
    Intercardinal,
    /// N, NNE, NE, ENE, ... NNW
    SecondaryIntercardinal,
}
