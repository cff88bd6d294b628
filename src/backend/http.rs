//! HTTP client for the model-serving backend.
//!
//! Each prediction kind is a `POST` of the request as JSON to its endpoint
//! under the base URL (see [`PredictionKind::endpoint`]). A 2xx response
//! body is decoded straight into the result type; anything else is an
//! error. No auth header is sent.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::traits::PredictionBackend;
use crate::cache::DEFAULT_TTL;
use crate::telemetry;
use crate::types::{
    BackendHealth, PestRequest, PestRiskPrediction, PredictionKind, RainfallPrediction,
    RainfallRequest, SoilHealthPrediction, SoilSample, YieldPrediction, YieldRequest,
};
use crate::{FurrowError, Result};

/// Default base URL of the model server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the base URL.
pub const BACKEND_URL_ENV: &str = "FURROW_BACKEND_URL";

const NAME: &str = "http";

/// The explicit base URL if given, else `FURROW_BACKEND_URL`, else
/// [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(BACKEND_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Client for the model-serving backend's REST API.
#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for a custom base URL (for testing with wiremock).
    ///
    /// Requests time out after the default cache TTL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TTL)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FurrowError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` to the endpoint for `kind` and decode the response.
    async fn post<B, T>(&self, kind: PredictionKind, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, kind.endpoint());
        let start = Instant::now();
        debug!(kind = %kind, %url, "calling prediction backend");

        let outcome = self.send(&url, body).await;
        record_request(kind, start, outcome.is_ok());

        match &outcome {
            Ok(_) => debug!(kind = %kind, "received prediction from backend"),
            Err(e) => warn!(kind = %kind, error = %e, "prediction backend call failed"),
        }
        outcome
    }

    async fn send<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(url).json(body).send().await?;

        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }

    /// Map a non-2xx response to `Api`, keeping the body as the message.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            format!("backend API error: {status}")
        } else {
            body
        };
        Err(FurrowError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FurrowError::Decode(e.to_string()))
    }
}

fn record_request(kind: PredictionKind, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "backend" => NAME,
        "kind" => kind.as_str(),
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "backend" => NAME,
        "kind" => kind.as_str(),
    )
    .record(start.elapsed().as_secs_f64());
}

#[async_trait]
impl PredictionBackend for HttpBackend {
    fn name(&self) -> &str {
        NAME
    }

    async fn predict_soil_health(&self, soil: &SoilSample) -> Result<SoilHealthPrediction> {
        self.post(PredictionKind::SoilHealth, soil).await
    }

    async fn predict_crop_yield(&self, request: &YieldRequest) -> Result<YieldPrediction> {
        self.post(PredictionKind::CropYield, request).await
    }

    async fn predict_pest_risk(&self, request: &PestRequest) -> Result<PestRiskPrediction> {
        self.post(PredictionKind::PestRisk, request).await
    }

    async fn predict_rainfall(&self, request: &RainfallRequest) -> Result<RainfallPrediction> {
        self.post(PredictionKind::Rainfall, request).await
    }

    async fn health(&self) -> Result<BackendHealth> {
        let url = format!("{}/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}
