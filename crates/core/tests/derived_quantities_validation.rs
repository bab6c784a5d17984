//! Derived-quantity formulas checked against published reference values
//!
//! Wet-bulb references are read off the Stull (2011) nomogram, so they are
//! only accurate to about one degree. Heat index and wind chill values come
//! from the NWS charts; absolute humidity from standard psychrometric tables.

use approx::assert_abs_diff_eq;
use wx_core::core_types::{
    approx_eq, tolerance, AbsoluteHumidity, Celsius, Fahrenheit, KilometersPerHour, MilesPerHour,
    RelativeHumidity,
};
use wx_core::weather::{
    absolute_humidity_c, dew_point_c, heat_index_c, heat_index_f, heat_index_warning_f,
    relative_humidity_c, wet_bulb_c, wet_bulb_f, wind_chill_c_checked, wind_chill_f,
    HeatIndexWarning,
};
use wx_core::{Formula, WxError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_wet_bulb_reference_table() {
    init_tracing();

    let cases = [
        (-19.0, 80, -20.0),
        (-14.0, 90, -15.0),
        (-1.0, 30, -5.0),
        (-1.0, 40, -5.0),
        (-3.5, 90, -5.0),
        (5.0, 30, 0.0),
        (1.0, 90, 0.0),
        (6.5, 90, 5.0),
        (10.0, 50, 5.0),
        (19.0, 5, 5.0),
        (10.0, 99, 10.0),
        (25.0, 10, 10.0),
        (15.0, 50, 10.0),
        (20.0, 60, 15.0),
        (20.0, 99, 20.0),
        (40.0, 70, 35.0),
        (40.0, 99, 40.0),
        (50.0, 11, 25.0),
        (44.0, 50, 35.0),
        (46.0, 90, 45.0),
    ];

    for (t, rh, expected) in cases {
        let (tw, err) = wet_bulb_c(Celsius::new(t), RelativeHumidity::new(rh)).into_parts();
        assert_eq!(err, None, "t={t}°C rh={rh}%");
        assert!(
            approx_eq(*tw, expected, tolerance::WHOLE),
            "t={t}°C rh={rh}%: expected {expected}, got {tw}"
        );
    }
}

#[test]
fn test_wet_bulb_never_exceeds_air_temperature() {
    for t in [-15.0, 0.0, 12.5, 30.0, 45.0] {
        for rh in [50, 70, 90] {
            let result = wet_bulb_c(Celsius::new(t), RelativeHumidity::new(rh));
            if result.is_valid() {
                assert!(*result.value() <= t + 0.5, "t={t} rh={rh}");
            }
        }
    }
}

#[test]
fn test_wet_bulb_out_of_region_is_reported() {
    init_tracing();

    // Cold and dry: below the diagonal boundary
    let t = Celsius::new(-15.0);
    let result = wet_bulb_c(t, RelativeHumidity::new(30));
    assert_eq!(result.value(), t);
    assert_eq!(
        result.into_result(),
        Err(WxError::InputOutOfRange {
            formula: Formula::WetBulb
        })
    );

    let hot = Fahrenheit::new(130.0);
    let result = wet_bulb_f(hot, RelativeHumidity::new(40));
    assert_eq!(result.value(), hot);
    assert!(!result.is_valid());
}

#[test]
fn test_heat_index_chart_values() {
    // NWS heat index chart
    let cases = [(96.0, 65, 121.0), (100.0, 40, 109.0), (85.0, 50, 86.0)];
    for (t, rh, expected) in cases {
        let hi = heat_index_f(Fahrenheit::new(t), RelativeHumidity::new(rh));
        assert_abs_diff_eq!(*hi, expected, epsilon = 0.6);
    }
}

#[test]
fn test_heat_index_warning_pipeline() {
    let rh = RelativeHumidity::new(65);
    assert_eq!(
        heat_index_warning_f(heat_index_f(Fahrenheit::new(96.0), rh)),
        HeatIndexWarning::Danger
    );
    assert_eq!(
        heat_index_warning_f(heat_index_f(Fahrenheit::new(82.0), RelativeHumidity::new(40))),
        HeatIndexWarning::Caution
    );

    let hi_c = heat_index_c(Celsius::new(35.5), rh);
    assert_eq!(
        HeatIndexWarning::from_celsius(hi_c),
        HeatIndexWarning::from_fahrenheit(hi_c.to_fahrenheit())
    );
}

#[test]
fn test_wind_chill_chart_values() {
    let cases = [(-20.0, 40.0, -57.0), (40.0, 5.0, 36.0), (10.0, 60.0, -19.0)];
    for (t, v, expected) in cases {
        let wc = wind_chill_f(Fahrenheit::new(t), MilesPerHour::new(v));
        assert_abs_diff_eq!(*wc, expected, epsilon = 0.5);
    }
}

#[test]
fn test_wind_chill_from_metric_wind() {
    // 20 km/h is ~12.4 mph; -10°C is well inside the domain
    let wind = KilometersPerHour::new(20.0).to_mph();
    let result = wind_chill_c_checked(Celsius::new(-10.0), wind);
    assert!(result.is_valid());
    assert_abs_diff_eq!(*result.value(), -17.9, epsilon = 0.5);

    // 4 km/h is below 3 mph
    let calm = wind_chill_c_checked(Celsius::new(-10.0), KilometersPerHour::new(4.0).to_mph());
    assert_eq!(calm.value(), Celsius::new(-10.0));
    assert!(!calm.is_valid());
}

#[test]
fn test_absolute_humidity_table() {
    let cases = [(30.0, 80, 24.3), (0.0, 100, 4.85), (35.0, 50, 19.8)];
    for (t, rh, expected) in cases {
        let ah = absolute_humidity_c(Celsius::new(t), RelativeHumidity::new(rh));
        assert_abs_diff_eq!(*ah, expected, epsilon = 0.3);
    }
}

#[test]
fn test_humidity_conversions_invert() {
    for t in [-10.0, 5.0, 22.0, 38.0] {
        for rh in [10, 35, 60, 95] {
            let temp = Celsius::new(t);
            let ah = absolute_humidity_c(temp, RelativeHumidity::new(rh));
            let back = relative_humidity_c(temp, ah);
            assert!((back.value() - rh).abs() <= 1, "t={t} rh={rh} -> {back}");
        }
    }
}

#[test]
fn test_saturated_air_holds_limit() {
    // Absolute humidity is capped at 50 g/m³ even near boiling
    let ah = absolute_humidity_c(Celsius::new(95.0), RelativeHumidity::new(100));
    assert_eq!(ah, AbsoluteHumidity::new(AbsoluteHumidity::MAX));
}

#[test]
fn test_dew_point_bounded_by_wet_bulb_and_air() {
    // For unsaturated air: dew point <= wet bulb <= air temperature
    let t = Celsius::new(25.0);
    let rh = RelativeHumidity::new(40);
    let dp = dew_point_c(t, rh);
    let tw = wet_bulb_c(t, rh).value();
    assert!(dp <= tw, "dew point {dp} above wet bulb {tw}");
    assert!(tw <= t);
}
