//! Prediction service and its builder

mod builder;
mod predictor;

pub use builder::{Furrow, FurrowBuilder};
pub use predictor::PredictionService;
