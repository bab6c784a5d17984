//! Error taxonomy shared by the derived-quantity formulas and circular statistics
//!
//! Two kinds of failure exist:
//! - [`WxError::InputOutOfRange`] - a formula was evaluated outside its documented
//!   validity domain. Formulas report this alongside a best-effort value (see [`Validated`]).
//! - [`WxError::MismatchedInputLength`] - a weighted statistic was given a weight list
//!   whose length differs from the sample list. No meaningful value exists.

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formula whose validity domain can be violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Formula {
    /// NWS wind chill (T ≤ 50°F, V ≥ 3 mph)
    WindChill,
    /// Rothfusz heat index regression (T ≥ 77°F / 25°C)
    HeatIndex,
    /// Stull (2011) wet-bulb approximation
    WetBulb,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formula::WindChill => "wind chill",
            Formula::HeatIndex => "heat index",
            Formula::WetBulb => "wet-bulb temperature",
        };
        f.write_str(name)
    }
}

/// Main error type for the weather calculations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WxError {
    /// Input falls outside the formula's supported domain
    #[error("input out of range for {formula}")]
    InputOutOfRange { formula: Formula },

    /// Weighted statistic received lists of different lengths
    #[error("mismatched input length: {values} values, {weights} weights")]
    MismatchedInputLength { values: usize, weights: usize },
}

impl WxError {
    /// Create an out-of-range error for the given formula
    pub fn out_of_range(formula: Formula) -> Self {
        Self::InputOutOfRange { formula }
    }

    /// Create a length-mismatch error
    pub fn mismatched_length(values: usize, weights: usize) -> Self {
        Self::MismatchedInputLength { values, weights }
    }
}

/// A computed value together with an optional validity flag.
///
/// Range-limited formulas follow a "report and continue" policy: they always
/// produce a value (the formula result, or the unchanged input when the formula
/// cannot be applied) and additionally flag when the inputs were outside the
/// supported domain. Callers decide whether to trust a flagged value.
///
/// # Example
/// ```
/// use wx_core::core_types::{Celsius, RelativeHumidity};
/// use wx_core::weather::wet_bulb_c;
///
/// let result = wet_bulb_c(Celsius::new(-25.0), RelativeHumidity::new(50));
/// assert!(!result.is_valid());
/// assert_eq!(result.value(), Celsius::new(-25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct Validated<T> {
    value: T,
    error: Option<WxError>,
}

impl<T> Validated<T> {
    /// Value computed inside the validity domain
    #[inline]
    pub fn valid(value: T) -> Self {
        Self { value, error: None }
    }

    /// Best-effort value accompanied by an error
    #[inline]
    pub fn flagged(value: T, error: WxError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    /// Returns the value regardless of the validity flag
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// Returns the validity error, if any
    #[inline]
    pub fn error(&self) -> Option<WxError> {
        self.error
    }

    /// True when no validity error was raised
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Split into the value and the optional error
    #[inline]
    pub fn into_parts(self) -> (T, Option<WxError>) {
        (self.value, self.error)
    }

    /// Strict view: discard the best-effort value when flagged.
    ///
    /// # Errors
    /// Returns the validity error if the inputs were outside the formula's domain.
    pub fn into_result(self) -> Result<T, WxError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    /// Transform the value, keeping the flag (used for unit-converting wrappers)
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Validated<U> {
        Validated {
            value: f(self.value),
            error: self.error,
        }
    }
}
