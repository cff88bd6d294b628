//! Fixed fallback predictions.
//!
//! Conservative constants served when the backend cannot be reached. Only
//! the yield fallback looks at its input, and only to echo the crop and
//! field area back.

use chrono::Utc;

use crate::types::{
    PestRequest, PestRiskPrediction, RainfallPrediction, RainfallRequest, RiskLevel,
    SoilClassification, SoilHealthPrediction, SoilSample, YieldFactors, YieldPrediction,
    YieldRequest,
};

pub fn soil_health(_soil: &SoilSample) -> SoilHealthPrediction {
    SoilHealthPrediction {
        soil_health_score: 65.0,
        classification: SoilClassification::Good,
        confidence: 75.0,
        recommendations: vec!["Regular soil testing recommended".to_string()],
        timestamp: Utc::now(),
    }
}

pub fn crop_yield(request: &YieldRequest) -> YieldPrediction {
    let crop_type = if request.crop_type.is_empty() {
        "wheat".to_string()
    } else {
        request.crop_type.clone()
    };
    // Only an absent area (zero or NaN) is defaulted; other values echo back.
    let field_area = if request.field_area == 0.0 || request.field_area.is_nan() {
        1.0
    } else {
        request.field_area
    };

    YieldPrediction {
        predicted_yield: 4.0,
        total_production: 4.0,
        unit: "tons/hectare".to_string(),
        confidence: 70.0,
        crop_type,
        field_area,
        factors: YieldFactors {
            soil_health: 65.0,
            weather_conditions: 75.0,
            overall_rating: "Good".to_string(),
        },
        recommendations: vec!["Monitor crop regularly".to_string()],
        timestamp: Utc::now(),
    }
}

pub fn pest_risk(_request: &PestRequest) -> PestRiskPrediction {
    PestRiskPrediction {
        risk_level: RiskLevel::Medium,
        risk_score: 45.0,
        confidence: 70.0,
        common_pests: vec!["General pests".to_string()],
        preventive_measures: vec!["Regular monitoring".to_string()],
        timestamp: Utc::now(),
    }
}

pub fn rainfall(_request: &RainfallRequest) -> RainfallPrediction {
    RainfallPrediction {
        probability: 30.0,
        expected_amount: 2.0,
        timeframe: "24 hours".to_string(),
        confidence: 65.0,
        recommendation: "Continue normal irrigation".to_string(),
        timestamp: Utc::now(),
    }
}
