//! Builder for configuring prediction services

use std::sync::Arc;
use std::time::Duration;

use super::PredictionService;
use crate::Result;
use crate::backend::{HttpBackend, PredictionBackend, resolve_base_url};
use crate::cache::{CacheConfig, PredictionCache};
use crate::config::Config;
use crate::estimator::{Estimator, FallbackMode};

/// Main entry point for creating prediction services.
///
/// ```rust,no_run
/// use furrow::{Furrow, FallbackMode};
///
/// let service = Furrow::builder()
///     .backend_url("http://models.farm.local:5000")
///     .fallback_mode(FallbackMode::Heuristic)
///     .build()?;
/// # Ok::<(), furrow::FurrowError>(())
/// ```
pub struct Furrow;

impl Furrow {
    /// Create a new builder for configuring the service.
    pub fn builder() -> FurrowBuilder {
        FurrowBuilder::new()
    }
}

/// Builder for configuring prediction services.
pub struct FurrowBuilder {
    backend_url: Option<String>,
    backend: Option<Arc<dyn PredictionBackend>>,
    cache: CacheConfig,
    timeout: Option<Duration>,
    fallback_mode: FallbackMode,
}

impl FurrowBuilder {
    pub fn new() -> Self {
        Self {
            backend_url: None,
            backend: None,
            cache: CacheConfig::default(),
            timeout: None,
            fallback_mode: FallbackMode::default(),
        }
    }

    /// Start from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .backend_url(config.backend.url.clone())
            .timeout(config.timeout())
            .cache(config.cache.to_cache_config())
            .fallback_mode(config.fallback.mode)
    }

    /// Base URL of the model server.
    ///
    /// When unset, `FURROW_BACKEND_URL` is used, then `http://localhost:5000`.
    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Use a custom backend instead of HTTP.
    ///
    /// Takes precedence over [`backend_url`](Self::backend_url) and
    /// [`timeout`](Self::timeout).
    pub fn backend(mut self, backend: Arc<dyn PredictionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Per-request timeout for the HTTP backend (default: the cache TTL).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Which estimate to serve when the backend fails (default: fixed).
    pub fn fallback_mode(mut self, mode: FallbackMode) -> Self {
        self.fallback_mode = mode;
        self
    }

    /// Build the service.
    pub fn build(self) -> Result<PredictionService> {
        let backend: Arc<dyn PredictionBackend> = match self.backend {
            Some(backend) => backend,
            None => {
                let url = resolve_base_url(self.backend_url);
                let timeout = self.timeout.unwrap_or(self.cache.ttl);
                Arc::new(HttpBackend::with_timeout(url, timeout)?)
            }
        };

        Ok(PredictionService::new(
            backend,
            PredictionCache::new(&self.cache),
            Estimator::new(self.fallback_mode),
        ))
    }
}

impl Default for FurrowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
