//! Public types for the Furrow API.

mod health;
mod kind;
mod prediction;
mod request;
mod timestamp;

pub use health::{BackendHealth, ModelsLoaded};
pub use kind::PredictionKind;
pub use prediction::{
    PestRiskPrediction, Prediction, PredictionSource, RainfallPrediction, RiskLevel,
    SoilClassification, SoilHealthPrediction, YieldFactors, YieldPrediction,
};
pub use request::{PestRequest, RainfallRequest, SoilSample, WeatherConditions, YieldRequest};
