//! Prediction request types
//!
//! Field names go over the wire in camelCase, matching the backend. The
//! `Default` impls carry the values the backend assumes when a field is
//! missing, so a defaulted request and an empty one predict the same thing.

use serde::{Deserialize, Serialize};

/// Soil sample readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    /// Nitrogen (kg/ha).
    pub nitrogen: f64,
    /// Phosphorus (kg/ha).
    pub phosphorus: f64,
    /// Potassium (kg/ha).
    pub potassium: f64,
    pub ph: f64,
    /// Organic matter (%).
    pub organic_matter: f64,
    /// Soil temperature (°C).
    pub temperature: f64,
    /// Relative humidity (%).
    pub humidity: f64,
}

impl Default for SoilSample {
    fn default() -> Self {
        Self {
            nitrogen: 45.0,
            phosphorus: 28.0,
            potassium: 62.0,
            ph: 6.5,
            organic_matter: 3.2,
            temperature: 25.0,
            humidity: 65.0,
        }
    }
}

impl SoilSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nitrogen(mut self, value: f64) -> Self {
        self.nitrogen = value;
        self
    }

    pub fn phosphorus(mut self, value: f64) -> Self {
        self.phosphorus = value;
        self
    }

    pub fn potassium(mut self, value: f64) -> Self {
        self.potassium = value;
        self
    }

    pub fn ph(mut self, value: f64) -> Self {
        self.ph = value;
        self
    }

    pub fn organic_matter(mut self, value: f64) -> Self {
        self.organic_matter = value;
        self
    }

    pub fn temperature(mut self, value: f64) -> Self {
        self.temperature = value;
        self
    }

    pub fn humidity(mut self, value: f64) -> Self {
        self.humidity = value;
        self
    }
}

/// Field weather conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Air temperature (°C).
    pub temperature: f64,
    /// Relative humidity (%).
    pub humidity: f64,
    /// Rainfall (mm). Absent readings count as zero for yield estimation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
}

impl Default for WeatherConditions {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            rainfall: Some(120.0),
        }
    }
}

impl WeatherConditions {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall: None,
        }
    }

    pub fn rainfall(mut self, mm: f64) -> Self {
        self.rainfall = Some(mm);
        self
    }
}

/// Crop yield prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldRequest {
    pub soil_data: SoilSample,
    pub weather_data: WeatherConditions,
    pub crop_type: String,
    /// Field area (hectares).
    pub field_area: f64,
}

impl Default for YieldRequest {
    fn default() -> Self {
        Self {
            soil_data: SoilSample::default(),
            weather_data: WeatherConditions::default(),
            crop_type: "wheat".to_string(),
            field_area: 1.0,
        }
    }
}

impl YieldRequest {
    /// Request a yield prediction for `crop_type` on `field_area` hectares,
    /// with default soil and weather readings.
    pub fn new(crop_type: impl Into<String>, field_area: f64) -> Self {
        Self {
            crop_type: crop_type.into(),
            field_area,
            ..Self::default()
        }
    }

    pub fn soil(mut self, soil: SoilSample) -> Self {
        self.soil_data = soil;
        self
    }

    pub fn weather(mut self, weather: WeatherConditions) -> Self {
        self.weather_data = weather;
        self
    }
}

/// Pest risk prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub crop_type: String,
}

impl Default for PestRequest {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            rainfall: 120.0,
            crop_type: "wheat".to_string(),
        }
    }
}

impl PestRequest {
    pub fn new(crop_type: impl Into<String>) -> Self {
        Self {
            crop_type: crop_type.into(),
            ..Self::default()
        }
    }

    pub fn temperature(mut self, value: f64) -> Self {
        self.temperature = value;
        self
    }

    pub fn humidity(mut self, value: f64) -> Self {
        self.humidity = value;
        self
    }

    pub fn rainfall(mut self, value: f64) -> Self {
        self.rainfall = value;
        self
    }
}

/// Rainfall prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallRequest {
    pub temperature: f64,
    pub humidity: f64,
    /// Air pressure (hPa).
    pub pressure: f64,
    /// Wind speed (km/h).
    pub wind_speed: f64,
}

impl Default for RainfallRequest {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            pressure: 1013.0,
            wind_speed: 10.0,
        }
    }
}

impl RainfallRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, value: f64) -> Self {
        self.temperature = value;
        self
    }

    pub fn humidity(mut self, value: f64) -> Self {
        self.humidity = value;
        self
    }

    pub fn pressure(mut self, value: f64) -> Self {
        self.pressure = value;
        self
    }

    pub fn wind_speed(mut self, value: f64) -> Self {
        self.wind_speed = value;
        self
    }
}
