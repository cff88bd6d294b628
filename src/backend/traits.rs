//! Backend trait for remote model serving.
//!
//! The [`PredictionService`](crate::PredictionService) talks to the model
//! server through this trait, one method per prediction kind. Any error a
//! backend returns is treated as a failed remote call and answered with a
//! fallback estimate; backends must not retry internally.
//!
//! # Example
//!
//! ```ignore
//! // A backend that is always down
//! #[async_trait]
//! impl PredictionBackend for Offline {
//!     fn name(&self) -> &str { "offline" }
//!     async fn predict_soil_health(&self, _: &SoilSample) -> Result<SoilHealthPrediction> {
//!         Err(FurrowError::Http("connection refused".into()))
//!     }
//!     // ...
//! }
//! ```

use async_trait::async_trait;

use crate::types::{
    BackendHealth, PestRequest, PestRiskPrediction, RainfallPrediction, RainfallRequest,
    SoilHealthPrediction, SoilSample, YieldPrediction, YieldRequest,
};
use crate::{FurrowError, Result};

/// Remote prediction backend.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// Backend name for logging and metrics.
    fn name(&self) -> &str;

    async fn predict_soil_health(&self, soil: &SoilSample) -> Result<SoilHealthPrediction>;

    async fn predict_crop_yield(&self, request: &YieldRequest) -> Result<YieldPrediction>;

    async fn predict_pest_risk(&self, request: &PestRequest) -> Result<PestRiskPrediction>;

    async fn predict_rainfall(&self, request: &RainfallRequest) -> Result<RainfallPrediction>;

    /// Report backend liveness and which models are loaded.
    ///
    /// Default implementation returns `Unsupported`.
    async fn health(&self) -> Result<BackendHealth> {
        Err(FurrowError::Unsupported)
    }
}
