//! Averaging wind directions across the north wrap-around

use approx::assert_abs_diff_eq;
use wx_core::core_types::{Degrees, DirectionPrecision};
use wx_core::statistics::{
    average_direction, average_direction_weighted, direction_std_dev, direction_std_dev_weighted,
};
use wx_core::WxError;

fn degrees(values: &[f64]) -> Vec<Degrees> {
    values.iter().copied().map(Degrees::new).collect()
}

/// Shortest angular distance in degrees
fn separation(a: Degrees, b: f64) -> f64 {
    let d = (*a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn test_gusty_north_wind_averages_to_north() {
    let samples = degrees(&[350.0, 355.0, 0.0, 5.0, 10.0]);
    let mean = average_direction(&samples);
    assert!(separation(mean, 0.0) < 1e-9, "mean {mean}");
    assert!((0.0..360.0).contains(&*mean));
    assert_eq!(mean.compass_point(DirectionPrecision::Cardinal), "N");
}

#[test]
fn test_unnormalized_samples_are_wrapped_first() {
    let wrapped = average_direction(&degrees(&[30.0, 60.0]));
    let raw = average_direction(&degrees(&[390.0, -300.0]));
    assert_abs_diff_eq!(*wrapped, *raw, epsilon = 1e-9);
    assert_abs_diff_eq!(*wrapped, 45.0, epsilon = 1e-9);
}

#[test]
fn test_weighted_average_leans_towards_heavy_samples() {
    let samples = degrees(&[90.0, 180.0]);
    let mean = average_direction_weighted(&samples, &[3.0, 1.0]).unwrap();
    // atan2(1, 3) from east towards south
    assert_abs_diff_eq!(*mean, 90.0 + 1f64.atan2(3.0).to_degrees(), epsilon = 1e-9);
    assert_eq!(
        mean.compass_point(DirectionPrecision::SecondaryIntercardinal),
        "ESE"
    );
}

#[test]
fn test_weight_length_mismatch_is_an_error() {
    let samples = degrees(&[10.0, 20.0, 30.0]);
    let expected = WxError::MismatchedInputLength {
        values: 3,
        weights: 2,
    };
    assert_eq!(
        average_direction_weighted(&samples, &[1.0, 1.0]),
        Err(expected)
    );
    assert_eq!(
        direction_std_dev_weighted(&samples, &[1.0, 1.0]),
        Err(expected)
    );
}

#[test]
fn test_spread_grows_with_scatter() {
    let steady = direction_std_dev(&degrees(&[268.0, 270.0, 272.0]));
    let shifting = direction_std_dev(&degrees(&[225.0, 270.0, 315.0]));
    assert!(steady < shifting, "{steady} vs {shifting}");

    // Two samples 90° apart: R = √2/2, σ = √(ln 2) rad
    let quarter = direction_std_dev(&degrees(&[0.0, 90.0]));
    assert_abs_diff_eq!(*quarter, 2f64.ln().sqrt().to_degrees(), epsilon = 1e-9);
}

#[test]
fn test_uniform_weights_match_unweighted() {
    let samples = degrees(&[20.0, 70.0, 330.0, 355.0]);
    let weights = [2.5; 4];
    assert_abs_diff_eq!(
        *average_direction_weighted(&samples, &weights).unwrap(),
        *average_direction(&samples),
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        *direction_std_dev_weighted(&samples, &weights).unwrap(),
        *direction_std_dev(&samples),
        epsilon = 1e-9
    );
}

#[test]
fn test_spread_is_reported_as_wrapped_direction() {
    // Nearly cancelling vectors give a dispersion beyond a full turn, which
    // is wrapped back into [0, 360) like any other direction
    let spread = direction_std_dev(&degrees(&[0.0, 180.0]));
    assert!((0.0..360.0).contains(&*spread), "{spread}");
}

#[test]
fn test_empty_input_follows_ieee_rules() {
    assert_eq!(average_direction(&[]), Degrees::NORTH);
    assert!(direction_std_dev(&[]).is_nan());
    assert!(direction_std_dev_weighted(&[], &[]).unwrap().is_nan());
}
