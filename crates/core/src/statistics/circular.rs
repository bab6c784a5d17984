//! Circular statistics for angular data
//!
//! Arithmetic averaging breaks at the 0°/360° discontinuity (the mean of 350°
//! and 10° is 0°, not 180°). Each sample is instead treated as a unit vector
//! `(cos θ, sin θ)`; the mean direction is the angle of the (optionally
//! weighted) vector sum and the dispersion follows from its length.
//!
//! # Formulas
//! - Mean: `atan2(Σ wᵢ·sin θᵢ, Σ wᵢ·cos θᵢ)`
//! - Mean resultant length: `R = |Σ wᵢ·(cos θᵢ, sin θᵢ)| / Σ wᵢ`
//! - Standard deviation: `sqrt(-2·ln R)`
//!
//! Degenerate inputs follow IEEE-754: an empty sample gives a mean of 0 and a
//! NaN standard deviation; perfectly cancelling vectors give an infinite one.
//!
//! # References
//! - Mardia, K.V. & Jupp, P.E. (2000). "Directional Statistics". Wiley.

use crate::core_types::Degrees;
use crate::error::WxError;
use tracing::{debug, trace};

/// Weighted vector sum of a set of angles
#[derive(Debug, Clone, Copy)]
struct Resultant {
    x: f64,
    y: f64,
    total_weight: f64,
}

impl Resultant {
    fn accumulate<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut r = Resultant {
            x: 0.0,
            y: 0.0,
            total_weight: 0.0,
        };
        for (angle, weight) in samples {
            let (sin, cos) = angle.sin_cos();
            r.x += weight * cos;
            r.y += weight * sin;
            r.total_weight += weight;
        }
        r
    }

    fn unweighted(angles: &[f64]) -> Self {
        Self::accumulate(angles.iter().map(|&a| (a, 1.0)))
    }

    fn weighted(angles: &[f64], weights: &[f64]) -> Self {
        Self::accumulate(angles.iter().copied().zip(weights.iter().copied()))
    }

    fn mean_angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    fn mean_length(self) -> f64 {
        let r = self.x.hypot(self.y) / self.total_weight;
        trace!(resultant_length = r, "circular resultant");
        r
    }

    fn std_dev(self) -> f64 {
        dispersion(self.mean_length())
    }
}

/// `sqrt(-2·ln R)`; R = 0 yields +∞ and NaN propagates.
fn dispersion(mean_length: f64) -> f64 {
    // Rounding in the vector sum can push R a hair above 1 for identical samples
    let r = if mean_length > 1.0 { 1.0 } else { mean_length };
    (-2.0 * r.ln()).sqrt()
}

fn resultant(angles: &[f64], weights: Option<&[f64]>) -> Result<Resultant, WxError> {
    match weights {
        None => Ok(Resultant::unweighted(angles)),
        Some(w) if w.len() != angles.len() => {
            debug!(
                values = angles.len(),
                weights = w.len(),
                "circular statistic weight list length mismatch"
            );
            Err(WxError::mismatched_length(angles.len(), w.len()))
        }
        Some(w) => Ok(Resultant::weighted(angles, w)),
    }
}

/// Circular mean of angles in radians, result in `(-π, π]`.
///
/// # Errors
/// [`WxError::MismatchedInputLength`] if `weights` is given and its length
/// differs from `angles`.
pub fn circular_mean(angles: &[f64], weights: Option<&[f64]>) -> Result<f64, WxError> {
    resultant(angles, weights).map(Resultant::mean_angle)
}

/// Circular standard deviation of angles in radians.
///
/// # Errors
/// [`WxError::MismatchedInputLength`] if `weights` is given and its length
/// differs from `angles`.
pub fn circular_std_dev(angles: &[f64], weights: Option<&[f64]>) -> Result<f64, WxError> {
    resultant(angles, weights).map(Resultant::std_dev)
}

fn clamped_radians(directions: &[Degrees]) -> Vec<f64> {
    directions
        .iter()
        .map(|d| d.clamped().to_radians())
        .collect()
}

/// Average of compass directions, in `[0, 360)`
///
/// # Example
/// ```
/// use wx_core::core_types::Degrees;
/// use wx_core::statistics::average_direction;
///
/// let mean = average_direction(&[Degrees::new(80.0), Degrees::new(100.0)]);
/// assert!((*mean - 90.0).abs() < 1e-9);
/// ```
pub fn average_direction(directions: &[Degrees]) -> Degrees {
    let radians = clamped_radians(directions);
    Degrees::from_radians(Resultant::unweighted(&radians).mean_angle()).clamped()
}

/// Weighted average of compass directions, in `[0, 360)`
///
/// # Errors
/// [`WxError::MismatchedInputLength`] if the lists differ in length.
pub fn average_direction_weighted(
    directions: &[Degrees],
    weights: &[f64],
) -> Result<Degrees, WxError> {
    let radians = clamped_radians(directions);
    let mean = circular_mean(&radians, Some(weights))?;
    Ok(Degrees::from_radians(mean).clamped())
}

/// Angular standard deviation of compass directions, in degrees
pub fn direction_std_dev(directions: &[Degrees]) -> Degrees {
    let radians = clamped_radians(directions);
    Degrees::from_radians(Resultant::unweighted(&radians).std_dev()).clamped()
}

/// Weighted angular standard deviation of compass directions, in degrees
///
/// # Errors
/// [`WxError::MismatchedInputLength`] if the lists differ in length.
pub fn direction_std_dev_weighted(
    directions: &[Degrees],
    weights: &[f64],
) -> Result<Degrees, WxError> {
    let radians = clamped_radians(directions);
    let std_dev = circular_std_dev(&radians, Some(weights))?;
    Ok(Degrees::from_radians(std_dev).clamped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Shortest angular distance in degrees
    fn angular_distance(a: Degrees, b: f64) -> f64 {
        let d = (*a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_mean_across_north() {
        let mean = average_direction(&[Degrees::new(350.0), Degrees::new(10.0)]);
        assert!(angular_distance(mean, 0.0) < 1e-9, "mean was {mean}");
        assert!((0.0..360.0).contains(&*mean));
    }

    #[test]
    fn test_mean_of_unclamped_inputs() {
        let mean = average_direction(&[Degrees::new(-10.0), Degrees::new(370.0)]);
        assert!(angular_distance(mean, 0.0) < 1e-9, "mean was {mean}");
    }

    #[test]
    fn test_mean_radians() {
        let mean = circular_mean(&[0.0, FRAC_PI_2], None).unwrap();
        assert_abs_diff_eq!(mean, PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_mean() {
        let dirs = [Degrees::new(0.0), Degrees::new(90.0)];
        let even = average_direction_weighted(&dirs, &[1.0, 1.0]).unwrap();
        assert_abs_diff_eq!(*even, 45.0, epsilon = 1e-9);

        let skewed = average_direction_weighted(&dirs, &[3.0, 1.0]).unwrap();
        assert_abs_diff_eq!(*skewed, 1.0_f64.atan2(3.0).to_degrees(), epsilon = 1e-9);
    }

    #[test]
    fn test_weighted_length_mismatch() {
        let dirs = [Degrees::new(0.0), Degrees::new(90.0), Degrees::new(180.0)];
        assert_eq!(
            average_direction_weighted(&dirs, &[1.0, 2.0]),
            Err(WxError::mismatched_length(3, 2))
        );
        assert_eq!(
            direction_std_dev_weighted(&dirs, &[1.0, 2.0]),
            Err(WxError::mismatched_length(3, 2))
        );
        assert!(circular_std_dev(&[0.0], Some(&[])).is_err());
    }

    #[test]
    fn test_std_dev_of_identical_samples_is_zero() {
        let dirs = [Degrees::new(123.0); 7];
        let sd = direction_std_dev(&dirs);
        assert_abs_diff_eq!(*sd, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_std_dev_across_north() {
        // R = cos(10°)
        let sd = direction_std_dev(&[Degrees::new(350.0), Degrees::new(10.0)]);
        let expected = (-2.0 * 10.0_f64.to_radians().cos().ln()).sqrt().to_degrees();
        assert_abs_diff_eq!(*sd, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_weighted_std_dev_matches_repetition() {
        let weighted =
            direction_std_dev_weighted(&[Degrees::new(20.0), Degrees::new(60.0)], &[2.0, 1.0])
                .unwrap();
        let repeated =
            direction_std_dev(&[Degrees::new(20.0), Degrees::new(20.0), Degrees::new(60.0)]);
        assert_abs_diff_eq!(*weighted, *repeated, epsilon = 1e-9);
    }

    #[test]
    fn test_cancelling_vectors_give_infinite_dispersion() {
        assert_eq!(dispersion(0.0), f64::INFINITY);
        assert!(dispersion(f64::NAN).is_nan());
        assert_eq!(dispersion(1.0), 0.0);
    }

    #[test]
    fn test_opposed_directions_are_maximally_dispersed() {
        let sd = circular_std_dev(&[0.0, PI], None).unwrap();
        assert!(sd > 5.0, "expected a very large dispersion, got {sd}");
    }

    #[test]
    fn test_empty_input_propagates_ieee_results() {
        assert_eq!(circular_mean(&[], None).unwrap(), 0.0);
        assert!(circular_std_dev(&[], None).unwrap().is_nan());
        assert_eq!(*average_direction(&[]), 0.0);
        assert!(direction_std_dev(&[]).is_nan());
    }
}
