//! Furrow - prediction gateway for farm model-serving backends
//!
//! This crate sits between a farming dashboard and the remote models that
//! score soil health, forecast crop yield, assess pest risk and predict
//! rainfall. Every prediction goes through the same path: a short-lived
//! cache, then the backend, then a local estimate if the backend fails.
//! Callers always get a usable answer, tagged with where it came from.
//!
//! # Example
//!
//! ```rust,no_run
//! use furrow::{Furrow, PredictionSource, SoilSample, YieldRequest};
//!
//! #[tokio::main]
//! async fn main() -> furrow::Result<()> {
//!     let service = Furrow::builder()
//!         .backend_url("http://localhost:5000")
//!         .build()?;
//!
//!     let soil = service
//!         .predict_soil_health(&SoilSample::new().nitrogen(52.0).ph(6.8))
//!         .await;
//!     println!("soil score {} ({:?})", soil.soil_health_score, soil.source);
//!
//!     let harvest = service
//!         .predict_crop_yield(&YieldRequest::new("rice", 12.5))
//!         .await;
//!     if harvest.source == PredictionSource::Fallback {
//!         eprintln!("backend unavailable, showing estimate");
//!     }
//!     println!("{} {}", harvest.total_production, harvest.unit);
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! [`Config::load`] reads `~/.furrow/config.toml` or `/etc/furrow/config.toml`
//! and [`FurrowBuilder::from_config`] turns it into a service.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod estimator;
pub mod service;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use backend::{HttpBackend, PredictionBackend};
pub use cache::{CacheConfig, CacheKey, PredictionCache};
pub use config::Config;
pub use error::{FurrowError, Result};
pub use estimator::{Estimator, FallbackMode};
pub use service::{Furrow, FurrowBuilder, PredictionService};

// Re-export all types
pub use types::{
    BackendHealth, ModelsLoaded, PestRequest, PestRiskPrediction, Prediction, PredictionKind,
    PredictionSource, RainfallPrediction, RainfallRequest, RiskLevel, SoilClassification,
    SoilHealthPrediction, SoilSample, WeatherConditions, YieldFactors, YieldPrediction,
    YieldRequest,
};
