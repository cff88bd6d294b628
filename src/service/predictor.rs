//! Cache → remote → fallback orchestration.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::backend::PredictionBackend;
use crate::cache::{CacheKey, CachedPrediction, PredictionCache};
use crate::estimator::{Estimator, FallbackMode};
use crate::telemetry;
use crate::types::{
    BackendHealth, PestRequest, PestRiskPrediction, Prediction, PredictionKind, PredictionSource,
    RainfallPrediction, RainfallRequest, SoilHealthPrediction, SoilSample, YieldPrediction,
    YieldRequest,
};
use crate::{FurrowError, Result};

/// The prediction facade callers talk to.
///
/// Every `predict_*` call resolves the same way:
///
/// 1. A fresh cache entry for the request is returned as
///    [`PredictionSource::Cached`].
/// 2. Otherwise the backend is called once. On success the answer is cached
///    and returned as [`PredictionSource::Remote`].
/// 3. On any backend failure the local [`Estimator`] answers and the result
///    is returned as [`PredictionSource::Fallback`]. Fallbacks are never
///    cached, so the next call tries the backend again.
///
/// The predict methods therefore never fail. The service is `Send + Sync`;
/// share it with `Arc`.
pub struct PredictionService {
    backend: Arc<dyn PredictionBackend>,
    cache: PredictionCache,
    estimator: Estimator,
}

impl PredictionService {
    pub(crate) fn new(
        backend: Arc<dyn PredictionBackend>,
        cache: PredictionCache,
        estimator: Estimator,
    ) -> Self {
        Self {
            backend,
            cache,
            estimator,
        }
    }

    pub fn cache(&self) -> &PredictionCache {
        &self.cache
    }

    pub fn fallback_mode(&self) -> FallbackMode {
        self.estimator.mode()
    }

    /// Name of the configured backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    #[instrument(skip(self, soil), fields(kind = "soil_health"))]
    pub async fn predict_soil_health(&self, soil: &SoilSample) -> Prediction<SoilHealthPrediction> {
        let kind = PredictionKind::SoilHealth;
        let key = cache_key(kind, soil);

        if let Some(key) = &key
            && let Some(hit) = self.cache.get_soil_health(key).await
        {
            debug!("serving cached prediction");
            return Prediction::new(hit, PredictionSource::Cached);
        }

        match self.backend.predict_soil_health(soil).await {
            Ok(result) => {
                if let Some(key) = &key {
                    self.cache
                        .put(key, CachedPrediction::SoilHealth(result.clone()))
                        .await;
                }
                Prediction::new(result, PredictionSource::Remote)
            }
            Err(e) => {
                self.record_fallback(kind, &e);
                Prediction::new(self.estimator.soil_health(soil), PredictionSource::Fallback)
            }
        }
    }

    #[instrument(skip(self, request), fields(kind = "crop_yield", crop = %request.crop_type))]
    pub async fn predict_crop_yield(&self, request: &YieldRequest) -> Prediction<YieldPrediction> {
        let kind = PredictionKind::CropYield;
        let key = cache_key(kind, request);

        if let Some(key) = &key
            && let Some(hit) = self.cache.get_crop_yield(key).await
        {
            debug!("serving cached prediction");
            return Prediction::new(hit, PredictionSource::Cached);
        }

        match self.backend.predict_crop_yield(request).await {
            Ok(result) => {
                if let Some(key) = &key {
                    self.cache
                        .put(key, CachedPrediction::CropYield(result.clone()))
                        .await;
                }
                Prediction::new(result, PredictionSource::Remote)
            }
            Err(e) => {
                self.record_fallback(kind, &e);
                Prediction::new(self.estimator.crop_yield(request), PredictionSource::Fallback)
            }
        }
    }

    /// Predict yields for several fields at once.
    ///
    /// Requests run concurrently and are not coalesced: duplicates each reach
    /// the backend unless already cached. Results are in input order.
    #[instrument(skip(self, requests), fields(batch_size = requests.len()))]
    pub async fn predict_crop_yields(
        &self,
        requests: &[YieldRequest],
    ) -> Vec<Prediction<YieldPrediction>> {
        join_all(requests.iter().map(|r| self.predict_crop_yield(r))).await
    }

    #[instrument(skip(self, request), fields(kind = "pest_risk", crop = %request.crop_type))]
    pub async fn predict_pest_risk(&self, request: &PestRequest) -> Prediction<PestRiskPrediction> {
        let kind = PredictionKind::PestRisk;
        let key = cache_key(kind, request);

        if let Some(key) = &key
            && let Some(hit) = self.cache.get_pest_risk(key).await
        {
            debug!("serving cached prediction");
            return Prediction::new(hit, PredictionSource::Cached);
        }

        match self.backend.predict_pest_risk(request).await {
            Ok(result) => {
                if let Some(key) = &key {
                    self.cache
                        .put(key, CachedPrediction::PestRisk(result.clone()))
                        .await;
                }
                Prediction::new(result, PredictionSource::Remote)
            }
            Err(e) => {
                self.record_fallback(kind, &e);
                Prediction::new(self.estimator.pest_risk(request), PredictionSource::Fallback)
            }
        }
    }

    #[instrument(skip(self, request), fields(kind = "rainfall"))]
    pub async fn predict_rainfall(&self, request: &RainfallRequest) -> Prediction<RainfallPrediction> {
        let kind = PredictionKind::Rainfall;
        let key = cache_key(kind, request);

        if let Some(key) = &key
            && let Some(hit) = self.cache.get_rainfall(key).await
        {
            debug!("serving cached prediction");
            return Prediction::new(hit, PredictionSource::Cached);
        }

        match self.backend.predict_rainfall(request).await {
            Ok(result) => {
                if let Some(key) = &key {
                    self.cache
                        .put(key, CachedPrediction::Rainfall(result.clone()))
                        .await;
                }
                Prediction::new(result, PredictionSource::Remote)
            }
            Err(e) => {
                self.record_fallback(kind, &e);
                Prediction::new(self.estimator.rainfall(request), PredictionSource::Fallback)
            }
        }
    }

    /// Ask the backend for its health report.
    ///
    /// Unlike the predictions, backend failures are returned to the caller.
    #[instrument(skip(self))]
    pub async fn backend_health(&self) -> Result<BackendHealth> {
        self.backend.health().await
    }

    fn record_fallback(&self, kind: PredictionKind, error: &FurrowError) {
        let mode = self.estimator.mode();
        warn!(
            kind = %kind,
            backend = self.backend.name(),
            error = %error,
            mode = mode.as_str(),
            "backend prediction failed, serving fallback estimate"
        );
        metrics::counter!(telemetry::FALLBACKS_TOTAL,
            "kind" => kind.as_str(),
            "mode" => mode.as_str(),
        )
        .increment(1);
    }
}

/// Build the cache key, or `None` to bypass the cache for this call.
fn cache_key<R: Serialize + ?Sized>(kind: PredictionKind, request: &R) -> Option<CacheKey> {
    match CacheKey::new(kind, request) {
        Ok(key) => Some(key),
        Err(e) => {
            warn!(kind = %kind, error = %e, "could not build cache key, bypassing cache");
            None
        }
    }
}
