//! Prediction kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four kinds of prediction the backend serves.
///
/// The kind determines the endpoint, the request/result shapes and the
/// cache key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    SoilHealth,
    CropYield,
    PestRisk,
    Rainfall,
}

impl PredictionKind {
    /// All kinds, in endpoint declaration order.
    pub const ALL: [PredictionKind; 4] = [
        PredictionKind::SoilHealth,
        PredictionKind::CropYield,
        PredictionKind::PestRisk,
        PredictionKind::Rainfall,
    ];

    /// Prefix prepended to the canonical request when building a cache key.
    pub fn cache_tag(self) -> &'static str {
        match self {
            PredictionKind::SoilHealth => "soil_",
            PredictionKind::CropYield => "yield_",
            PredictionKind::PestRisk => "pest_",
            PredictionKind::Rainfall => "rainfall_",
        }
    }

    /// Endpoint path under the backend base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            PredictionKind::SoilHealth => "/predict/soil-health",
            PredictionKind::CropYield => "/predict/crop-yield",
            PredictionKind::PestRisk => "/predict/pest-risk",
            PredictionKind::Rainfall => "/predict/rainfall",
        }
    }

    /// Label used for metrics and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            PredictionKind::SoilHealth => "soil_health",
            PredictionKind::CropYield => "crop_yield",
            PredictionKind::PestRisk => "pest_risk",
            PredictionKind::Rainfall => "rainfall",
        }
    }
}

impl fmt::Display for PredictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        let mut tags: Vec<_> = PredictionKind::ALL.iter().map(|k| k.cache_tag()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn endpoints_live_under_predict() {
        for kind in PredictionKind::ALL {
            assert!(kind.endpoint().starts_with("/predict/"));
        }
    }
}
