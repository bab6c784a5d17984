//! Humidity quantities
//!
//! Relative humidity is an integer percentage, absolute humidity a mass
//! concentration in g/m³. Both may be constructed out of range; `clamped()`
//! saturates into the physically meaningful band without failing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Relative humidity as an integer percentage (0-100 inclusive once clamped).
///
/// Note this is a percentage, *not* a fraction 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct RelativeHumidity(i32);

impl RelativeHumidity {
    pub const MIN: RelativeHumidity = RelativeHumidity(0);
    pub const MAX: RelativeHumidity = RelativeHumidity(100);

    /// Create a relative humidity without range checking
    #[inline]
    #[must_use]
    pub const fn new(percent: i32) -> Self {
        RelativeHumidity(percent)
    }

    /// Create a relative humidity guaranteed to be within 0-100
    #[inline]
    #[must_use]
    pub fn clamped_from(percent: i32) -> Self {
        RelativeHumidity(percent).clamped()
    }

    /// Saturate into the valid 0-100 range
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        RelativeHumidity(self.0.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Get the raw integer percentage
    #[inline]
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Percentage as f64, for use in formulas
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Deref for RelativeHumidity {
    type Target = i32;
    #[inline]
    fn deref(&self) -> &i32 {
        &self.0
    }
}

impl From<i32> for RelativeHumidity {
    fn from(v: i32) -> Self {
        RelativeHumidity(v)
    }
}

impl From<RelativeHumidity> for i32 {
    fn from(rh: RelativeHumidity) -> i32 {
        rh.0
    }
}

impl fmt::Display for RelativeHumidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Absolute humidity in grams of water vapour per cubic meter of air
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct AbsoluteHumidity(f64);

impl AbsoluteHumidity {
    /// Upper bound of the clamped representation.
    ///
    /// Saturated air at 40°C holds ~51 g/m³; 50 g/m³ bounds ordinary atmospheric air.
    pub const MAX: f64 = 50.0;

    /// Create an absolute humidity without range checking
    #[inline]
    #[must_use]
    pub const fn new(grams_per_cubic_meter: f64) -> Self {
        AbsoluteHumidity(grams_per_cubic_meter)
    }

    /// Saturate into 0-50 g/m³
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        AbsoluteHumidity(self.0.clamp(0.0, Self::MAX))
    }

    /// Get the raw g/m³ value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Deref for AbsoluteHumidity {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for AbsoluteHumidity {
    fn from(v: f64) -> Self {
        AbsoluteHumidity(v)
    }
}

impl From<AbsoluteHumidity> for f64 {
    fn from(ah: AbsoluteHumidity) -> f64 {
        ah.0
    }
}

impl fmt::Display for AbsoluteHumidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} g/m³", self.0)
    }
}
