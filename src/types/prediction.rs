//! Prediction result types

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Qualitative soil health band.
///
/// Labels the backend sends that are not one of the four bands are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoilClassification {
    Excellent,
    Good,
    Fair,
    Poor,
    Other(String),
}

impl SoilClassification {
    /// Band a 0-100 soil health score: ≥80 excellent, ≥60 good, ≥40 fair.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            SoilClassification::Excellent
        } else if score >= 60.0 {
            SoilClassification::Good
        } else if score >= 40.0 {
            SoilClassification::Fair
        } else {
            SoilClassification::Poor
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SoilClassification::Excellent => "Excellent",
            SoilClassification::Good => "Good",
            SoilClassification::Fair => "Fair",
            SoilClassification::Poor => "Poor",
            SoilClassification::Other(label) => label,
        }
    }

    fn from_label(label: String) -> Self {
        match label.as_str() {
            "Excellent" => SoilClassification::Excellent,
            "Good" => SoilClassification::Good,
            "Fair" => SoilClassification::Fair,
            "Poor" => SoilClassification::Poor,
            _ => SoilClassification::Other(label),
        }
    }
}

impl Serialize for SoilClassification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SoilClassification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_label)
    }
}

/// Qualitative pest risk band.
///
/// Unrecognised backend labels are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl RiskLevel {
    /// Band a 0-100 risk score: ≥70 high, ≥40 medium.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            RiskLevel::High
        } else if score >= 40.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Other(label) => label,
        }
    }

    fn from_label(label: String) -> Self {
        match label.as_str() {
            "Low" => RiskLevel::Low,
            "Medium" => RiskLevel::Medium,
            "High" => RiskLevel::High,
            _ => RiskLevel::Other(label),
        }
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_label)
    }
}

/// Soil health prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilHealthPrediction {
    /// Score from 0 to 100.
    #[serde(alias = "healthScore")]
    pub soil_health_score: f64,
    pub classification: SoilClassification,
    /// Confidence percentage.
    pub confidence: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(with = "super::timestamp", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Factors behind a yield prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldFactors {
    pub soil_health: f64,
    /// Weather factor expressed as a percentage.
    pub weather_conditions: f64,
    pub overall_rating: String,
}

/// Crop yield prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPrediction {
    /// Yield per hectare, in `unit`.
    pub predicted_yield: f64,
    /// Yield over the whole field.
    pub total_production: f64,
    pub unit: String,
    pub confidence: f64,
    pub crop_type: String,
    pub field_area: f64,
    pub factors: YieldFactors,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(with = "super::timestamp", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Pest risk prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestRiskPrediction {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub common_pests: Vec<String>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
    #[serde(with = "super::timestamp", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Rainfall prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallPrediction {
    /// Probability of rain, in percent.
    pub probability: f64,
    /// Expected amount (mm).
    pub expected_amount: f64,
    pub timeframe: String,
    pub confidence: f64,
    pub recommendation: String,
    #[serde(with = "super::timestamp", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Where a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// Fresh answer from the model-serving backend.
    Remote,
    /// Earlier backend answer still inside the cache TTL.
    Cached,
    /// Locally estimated because the backend call failed.
    Fallback,
}

/// A prediction tagged with its provenance.
///
/// Dereferences to the wrapped result, so callers that don't care about
/// provenance can use it as the plain result type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction<T> {
    #[serde(flatten)]
    pub value: T,
    pub source: PredictionSource,
}

impl<T> Prediction<T> {
    pub fn new(value: T, source: PredictionSource) -> Self {
        Self { value, source }
    }

    /// Whether this is a degraded, locally estimated result.
    pub fn is_fallback(&self) -> bool {
        self.source == PredictionSource::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Prediction<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_classification_bands() {
        assert_eq!(SoilClassification::from_score(80.0), SoilClassification::Excellent);
        assert_eq!(SoilClassification::from_score(79.9), SoilClassification::Good);
        assert_eq!(SoilClassification::from_score(60.0), SoilClassification::Good);
        assert_eq!(SoilClassification::from_score(40.0), SoilClassification::Fair);
        assert_eq!(SoilClassification::from_score(39.0), SoilClassification::Poor);
    }

    #[test]
    fn risk_level_bands() {
        assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(69.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(10.0), RiskLevel::Low);
    }

    #[test]
    fn unknown_labels_are_kept() {
        let soil: SoilClassification = serde_json::from_str(r#""Moderate""#).unwrap();
        assert_eq!(soil, SoilClassification::Other("Moderate".into()));
        assert_eq!(serde_json::to_string(&soil).unwrap(), r#""Moderate""#);

        let risk: RiskLevel = serde_json::from_str(r#""Very High""#).unwrap();
        assert_eq!(risk.as_str(), "Very High");

        let known: RiskLevel = serde_json::from_str(r#""High""#).unwrap();
        assert_eq!(known, RiskLevel::High);
    }

    #[test]
    fn soil_prediction_accepts_health_score_alias() {
        let json = r#"{
            "healthScore": 82,
            "classification": "Excellent",
            "confidence": 88.5,
            "timestamp": "2025-03-01T10:15:30.123456"
        }"#;
        let parsed: SoilHealthPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.soil_health_score, 82.0);
        assert!(parsed.recommendations.is_empty());
    }

    #[test]
    fn prediction_serialises_flat_with_source() {
        let prediction = Prediction::new(
            RainfallPrediction {
                probability: 30.0,
                expected_amount: 2.0,
                timeframe: "24 hours".into(),
                confidence: 65.0,
                recommendation: "Continue normal irrigation".into(),
                timestamp: Utc::now(),
            },
            PredictionSource::Fallback,
        );
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["probability"], 30.0);
        assert_eq!(json["source"], "fallback");
        assert!(prediction.is_fallback());
        assert_eq!(prediction.expected_amount, 2.0);
    }
}
