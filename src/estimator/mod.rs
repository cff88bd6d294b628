//! Local prediction estimates.
//!
//! Two families of estimates live here:
//!
//! - [`fallback`] — fixed, conservative predictions. This is what the
//!   [`PredictionService`](crate::PredictionService) serves by default when
//!   the backend fails.
//! - [`heuristics`] — input-sensitive rules (crop tables, weather factors,
//!   soil and pest scoring). The `estimate_*` functions below combine them
//!   into full predictions and can be selected as the fallback with
//!   [`FallbackMode::Heuristic`].
//!
//! Everything in this module is pure and never fails.

pub mod fallback;
pub mod heuristics;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::{
    PestRequest, PestRiskPrediction, RainfallPrediction, RainfallRequest, RiskLevel,
    SoilClassification, SoilHealthPrediction, SoilSample, YieldFactors, YieldPrediction,
    YieldRequest,
};

use heuristics::{
    base_yield_for_crop, common_pests, irrigation_recommendation, pest_preventive_measures,
    pest_risk_score, rainfall_probability, soil_health_score, soil_recommendations,
    weather_factor, yield_recommendations,
};

/// Confidence reported for rule-based scores.
const HEURISTIC_CONFIDENCE: f64 = 75.0;

/// Yield confidence before the weather bonus: 30 % of the way from 80 to 85.
const YIELD_BASE_CONFIDENCE: f64 = 80.0 + (85.0 - 80.0) * 0.3;

/// Which estimate to serve when the backend call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Fixed constants from [`fallback`].
    #[default]
    Fixed,
    /// Input-sensitive estimates from [`heuristics`].
    Heuristic,
}

impl FallbackMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackMode::Fixed => "fixed",
            FallbackMode::Heuristic => "heuristic",
        }
    }
}

/// Local estimator, dispatching on [`FallbackMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator {
    mode: FallbackMode,
}

impl Estimator {
    pub fn new(mode: FallbackMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FallbackMode {
        self.mode
    }

    pub fn soil_health(&self, soil: &SoilSample) -> SoilHealthPrediction {
        match self.mode {
            FallbackMode::Fixed => fallback::soil_health(soil),
            FallbackMode::Heuristic => estimate_soil_health(soil),
        }
    }

    pub fn crop_yield(&self, request: &YieldRequest) -> YieldPrediction {
        match self.mode {
            FallbackMode::Fixed => fallback::crop_yield(request),
            FallbackMode::Heuristic => estimate_crop_yield(request),
        }
    }

    pub fn pest_risk(&self, request: &PestRequest) -> PestRiskPrediction {
        match self.mode {
            FallbackMode::Fixed => fallback::pest_risk(request),
            FallbackMode::Heuristic => estimate_pest_risk(request),
        }
    }

    pub fn rainfall(&self, request: &RainfallRequest) -> RainfallPrediction {
        match self.mode {
            FallbackMode::Fixed => fallback::rainfall(request),
            FallbackMode::Heuristic => estimate_rainfall(request),
        }
    }
}

/// Rule-based soil health prediction.
pub fn estimate_soil_health(soil: &SoilSample) -> SoilHealthPrediction {
    let score = soil_health_score(soil);
    SoilHealthPrediction {
        soil_health_score: score,
        classification: SoilClassification::from_score(score),
        confidence: HEURISTIC_CONFIDENCE,
        recommendations: soil_recommendations(score, soil),
        timestamp: Utc::now(),
    }
}

/// Rule-based crop yield prediction.
///
/// `base yield × soil factor × weather factor`, where the soil factor maps
/// a soil score of 0..100 onto 0.6..1.4.
pub fn estimate_crop_yield(request: &YieldRequest) -> YieldPrediction {
    let soil_score = soil_health_score(&request.soil_data);
    let soil_factor = 0.6 + (soil_score / 100.0) * 0.8;
    let weather = weather_factor(&request.weather_data);
    let per_hectare = base_yield_for_crop(&request.crop_type) * soil_factor * weather;

    let weather_bonus = if weather > 0.9 {
        10.0
    } else if weather > 0.7 {
        5.0
    } else {
        0.0
    };
    let confidence = f64::min(YIELD_BASE_CONFIDENCE + weather_bonus, 95.0).round();

    YieldPrediction {
        predicted_yield: round2(per_hectare),
        total_production: round2(per_hectare * request.field_area),
        unit: "tons/hectare".to_string(),
        confidence,
        crop_type: request.crop_type.clone(),
        field_area: request.field_area,
        factors: YieldFactors {
            soil_health: soil_score,
            weather_conditions: (weather * 100.0).round(),
            overall_rating: SoilClassification::from_score(soil_score)
                .as_str()
                .to_string(),
        },
        recommendations: yield_recommendations(per_hectare, soil_score, &request.weather_data),
        timestamp: Utc::now(),
    }
}

/// Rule-based pest risk prediction.
pub fn estimate_pest_risk(request: &PestRequest) -> PestRiskPrediction {
    let score = pest_risk_score(request);
    PestRiskPrediction {
        risk_level: RiskLevel::from_score(score),
        risk_score: score,
        confidence: HEURISTIC_CONFIDENCE,
        common_pests: common_pests(&request.crop_type, score),
        preventive_measures: pest_preventive_measures(score),
        timestamp: Utc::now(),
    }
}

/// Rule-based rainfall prediction.
///
/// Expected amount is 15 mm when rain is likely (probability above 60 %),
/// otherwise 2 mm.
pub fn estimate_rainfall(request: &RainfallRequest) -> RainfallPrediction {
    let probability = rainfall_probability(request);
    RainfallPrediction {
        probability,
        expected_amount: if probability > 60.0 { 15.0 } else { 2.0 },
        timeframe: "24 hours".to_string(),
        confidence: HEURISTIC_CONFIDENCE,
        recommendation: irrigation_recommendation(probability).to_string(),
        timestamp: Utc::now(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
