use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use wx_core::core_types::{
    AbsoluteHumidity, Celsius, Degrees, DirectionPrecision, Fahrenheit, KilometersPerHour, Knots,
    MilesPerHour, RelativeHumidity,
};
use wx_core::statistics::{
    average_direction, average_direction_weighted, direction_std_dev, direction_std_dev_weighted,
};
use wx_core::weather::{
    absolute_humidity_f, dew_point_f, heat_index_f_checked, heat_index_warning_f,
    indoor_humidity_recommendation_f, wet_bulb_f, wind_chill_f_checked, HeatIndexWarning,
};
use wx_core::{Validated, WxError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TemperatureUnit {
    /// Degrees Celsius
    C,
    /// Degrees Fahrenheit
    F,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SpeedUnit {
    Mph,
    Kmh,
    Knots,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Derived weather conditions from a single observation
#[derive(Parser, Debug)]
#[command(name = "wx-demo")]
#[command(about = "Compute dew point, wind chill, heat index and more", long_about = None)]
struct Args {
    /// Air temperature
    #[arg(short, long, default_value_t = 30.0, allow_negative_numbers = true)]
    temperature: f64,

    /// Unit of --temperature
    #[arg(long, value_enum, default_value_t = TemperatureUnit::C)]
    temperature_unit: TemperatureUnit,

    /// Relative humidity in %
    #[arg(long, default_value_t = 50)]
    humidity: i32,

    /// Wind speed
    #[arg(short, long, default_value_t = 10.0)]
    wind_speed: f64,

    /// Unit of --wind-speed
    #[arg(long, value_enum, default_value_t = SpeedUnit::Kmh)]
    wind_unit: SpeedUnit,

    /// Wind direction samples in degrees (0=North, 90=East), comma separated
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    directions: Vec<f64>,

    /// Optional weight per direction sample, comma separated
    #[arg(long, value_delimiter = ',')]
    weights: Vec<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// A range-limited result flattened for output
#[derive(Debug, Serialize)]
struct Checked<T> {
    value: T,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> From<Validated<T>> for Checked<T> {
    fn from(v: Validated<T>) -> Self {
        let (value, error) = v.into_parts();
        Checked {
            value,
            valid: error.is_none(),
            error: error.map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct WindReport {
    samples: usize,
    average: Degrees,
    compass: &'static str,
    spread: Degrees,
}

#[derive(Debug, Serialize)]
struct Report {
    temperature_c: Celsius,
    temperature_f: Fahrenheit,
    humidity: RelativeHumidity,
    wind_mph: MilesPerHour,
    dew_point_f: Fahrenheit,
    wind_chill_f: Checked<Fahrenheit>,
    heat_index_f: Checked<Fahrenheit>,
    heat_index_warning: HeatIndexWarning,
    wet_bulb_f: Checked<Fahrenheit>,
    absolute_humidity: AbsoluteHumidity,
    indoor_humidity_max: RelativeHumidity,
    #[serde(skip_serializing_if = "Option::is_none")]
    wind_direction: Option<WindReport>,
}

fn wind_report(args: &Args) -> Result<Option<WindReport>, WxError> {
    if args.directions.is_empty() {
        return Ok(None);
    }

    let samples: Vec<Degrees> = args.directions.iter().copied().map(Degrees::new).collect();
    let (average, spread) = if args.weights.is_empty() {
        (average_direction(&samples), direction_std_dev(&samples))
    } else {
        (
            average_direction_weighted(&samples, &args.weights)?,
            direction_std_dev_weighted(&samples, &args.weights)?,
        )
    };

    Ok(Some(WindReport {
        samples: samples.len(),
        average,
        compass: average.compass_point(DirectionPrecision::SecondaryIntercardinal),
        spread,
    }))
}

fn build_report(args: &Args) -> Result<Report, WxError> {
    let temp = match args.temperature_unit {
        TemperatureUnit::C => Celsius::new(args.temperature).to_fahrenheit(),
        TemperatureUnit::F => Fahrenheit::new(args.temperature),
    };
    let wind = match args.wind_unit {
        SpeedUnit::Mph => MilesPerHour::new(args.wind_speed),
        SpeedUnit::Kmh => KilometersPerHour::new(args.wind_speed).to_mph(),
        SpeedUnit::Knots => Knots::new(args.wind_speed).to_mph(),
    };
    let humidity = RelativeHumidity::new(args.humidity);

    let heat_index = heat_index_f_checked(temp, humidity);

    Ok(Report {
        temperature_c: temp.to_celsius(),
        temperature_f: temp,
        humidity,
        wind_mph: wind,
        dew_point_f: dew_point_f(temp, humidity),
        wind_chill_f: wind_chill_f_checked(temp, wind).into(),
        heat_index_warning: heat_index_warning_f(heat_index.value()),
        heat_index_f: heat_index.into(),
        wet_bulb_f: wet_bulb_f(temp, humidity).into(),
        absolute_humidity: absolute_humidity_f(temp, humidity),
        indoor_humidity_max: indoor_humidity_recommendation_f(temp),
        wind_direction: wind_report(args)?,
    })
}

fn flag<T>(checked: &Checked<T>) -> &'static str {
    if checked.valid {
        ""
    } else {
        " (outside formula range)"
    }
}

fn print_text(report: &Report) {
    println!("=== Weather Conditions ===\n");
    println!(
        "Temperature:       {} ({})",
        report.temperature_f, report.temperature_c
    );
    println!("Humidity:          {}", report.humidity);
    println!("Wind:              {}", report.wind_mph);
    println!();
    println!("Dew point:         {}", report.dew_point_f);
    println!(
        "Wind chill:        {}{}",
        report.wind_chill_f.value,
        flag(&report.wind_chill_f)
    );
    println!(
        "Heat index:        {}{}",
        report.heat_index_f.value,
        flag(&report.heat_index_f)
    );
    println!(
        "  Warning:         {} - {}",
        report.heat_index_warning,
        report.heat_index_warning.description()
    );
    println!(
        "Wet bulb:          {}{}",
        report.wet_bulb_f.value,
        flag(&report.wet_bulb_f)
    );
    println!("Absolute humidity: {}", report.absolute_humidity);
    println!("Indoor RH max:     {}", report.indoor_humidity_max);

    if let Some(wind) = &report.wind_direction {
        println!();
        println!(
            "Wind direction:    {} {} over {} samples (σ {})",
            wind.average, wind.compass, wind.samples, wind.spread
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wx_demo=info,wx_core=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(
        temperature = args.temperature,
        unit = ?args.temperature_unit,
        humidity = args.humidity,
        "computing derived conditions"
    );

    let report = build_report(&args)?;

    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wx-demo").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_cold_windy_report() {
        let args = parse(&["-t", "-10", "--humidity", "70", "-w", "30"]);
        let report = build_report(&args).unwrap();
        assert!(report.wind_chill_f.valid);
        assert!(report.wind_chill_f.value < report.temperature_f);
        assert!(!report.heat_index_f.valid);
        assert!(report.wind_direction.is_none());
    }

    #[test]
    fn test_direction_samples_across_north() {
        let args = parse(&["--directions", "350,10", "--weights", "1,1"]);
        let wind = build_report(&args).unwrap().wind_direction.unwrap();
        assert_eq!(wind.samples, 2);
        assert_eq!(wind.compass, "N");
    }

    #[test]
    fn test_weight_mismatch_is_reported() {
        let args = parse(&["--directions", "10,20,30", "--weights", "1,2"]);
        assert_eq!(
            build_report(&args).err(),
            Some(WxError::mismatched_length(3, 2))
        );
    }

    #[test]
    fn test_json_output_shape() {
        let args = parse(&["-t", "95", "--temperature-unit", "f", "--humidity", "60"]);
        let report = build_report(&args).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["temperature_f"], 95.0);
        assert_eq!(json["heat_index_f"]["valid"], true);
        assert!(json["heat_index_warning"].is_string());
        assert!(json.get("wind_direction").is_none());
    }
}
