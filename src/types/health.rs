//! Backend health report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which trained models the backend managed to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsLoaded {
    pub soil_model: bool,
    pub rainfall_model: bool,
    pub pest_model: bool,
}

/// Response of the backend's `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(with = "super::timestamp", default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub models_loaded: ModelsLoaded,
}

impl BackendHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
