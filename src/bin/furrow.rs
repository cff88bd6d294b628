//! furrow — prediction CLI
//!
//! Issue predictions against the model server from a terminal. Results are
//! printed as JSON including their `source`, so a fallback answer is easy to
//! spot when the backend is down.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use furrow::{
    Config, FurrowBuilder, PestRequest, RainfallRequest, SoilSample, WeatherConditions,
    YieldRequest,
};
use serde::Serialize;

/// Furrow prediction client
#[derive(Parser)]
#[command(name = "furrow")]
#[command(version)]
#[command(about = "Farm prediction gateway client")]
struct Args {
    /// Config file (default: ~/.furrow/config.toml, then /etc/furrow/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model server base URL (overrides config)
    #[arg(short, long, global = true, env = "FURROW_BACKEND_URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score soil health from a nutrient sample
    Soil {
        #[arg(long, default_value_t = 45.0)]
        nitrogen: f64,
        #[arg(long, default_value_t = 28.0)]
        phosphorus: f64,
        #[arg(long, default_value_t = 62.0)]
        potassium: f64,
        #[arg(long, default_value_t = 6.5)]
        ph: f64,
        #[arg(long, default_value_t = 3.2)]
        organic_matter: f64,
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,
        #[arg(long, default_value_t = 65.0)]
        humidity: f64,
    },

    /// Forecast crop yield for a field
    Yield {
        /// Crop name (wheat, rice, corn, soybean, cotton, sugarcane)
        #[arg(long, default_value = "wheat")]
        crop: String,
        /// Field area in hectares
        #[arg(long, default_value_t = 1.0)]
        area: f64,
        #[arg(long, default_value_t = 45.0)]
        nitrogen: f64,
        #[arg(long, default_value_t = 28.0)]
        phosphorus: f64,
        #[arg(long, default_value_t = 6.5)]
        ph: f64,
        /// Average temperature (°C)
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,
        /// Relative humidity (%)
        #[arg(long, default_value_t = 65.0)]
        humidity: f64,
        /// Seasonal rainfall (mm)
        #[arg(long, default_value_t = 120.0)]
        rainfall: f64,
    },

    /// Assess pest risk
    Pest {
        #[arg(long, default_value = "wheat")]
        crop: String,
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,
        #[arg(long, default_value_t = 65.0)]
        humidity: f64,
        #[arg(long, default_value_t = 120.0)]
        rainfall: f64,
    },

    /// Predict rainfall over the next day
    Rainfall {
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,
        #[arg(long, default_value_t = 65.0)]
        humidity: f64,
        /// Barometric pressure (hPa)
        #[arg(long, default_value_t = 1013.0)]
        pressure: f64,
        /// Wind speed (km/h)
        #[arg(long, default_value_t = 10.0)]
        wind_speed: f64,
    },

    /// Check model server health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_overrides(args.backend_url);
    let service = FurrowBuilder::from_config(&config).build()?;

    match args.command {
        Command::Soil {
            nitrogen,
            phosphorus,
            potassium,
            ph,
            organic_matter,
            temperature,
            humidity,
        } => {
            let sample = SoilSample {
                nitrogen,
                phosphorus,
                potassium,
                ph,
                organic_matter,
                temperature,
                humidity,
            };
            print_json(&service.predict_soil_health(&sample).await)?;
        }

        Command::Yield {
            crop,
            area,
            nitrogen,
            phosphorus,
            ph,
            temperature,
            humidity,
            rainfall,
        } => {
            let request = YieldRequest::new(crop, area)
                .soil(
                    SoilSample::new()
                        .nitrogen(nitrogen)
                        .phosphorus(phosphorus)
                        .ph(ph),
                )
                .weather(WeatherConditions::new(temperature, humidity).rainfall(rainfall));
            print_json(&service.predict_crop_yield(&request).await)?;
        }

        Command::Pest {
            crop,
            temperature,
            humidity,
            rainfall,
        } => {
            let request = PestRequest::new(crop)
                .temperature(temperature)
                .humidity(humidity)
                .rainfall(rainfall);
            print_json(&service.predict_pest_risk(&request).await)?;
        }

        Command::Rainfall {
            temperature,
            humidity,
            pressure,
            wind_speed,
        } => {
            let request = RainfallRequest::new()
                .temperature(temperature)
                .humidity(humidity)
                .pressure(pressure)
                .wind_speed(wind_speed);
            print_json(&service.predict_rainfall(&request).await)?;
        }

        Command::Health => {
            let health = service.backend_health().await?;
            print_json(&health)?;
            if !health.is_healthy() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
