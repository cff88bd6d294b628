//! In-memory prediction cache with a fixed freshness window.
//!
//! [`PredictionCache`] stores the last successful backend answer for each
//! [`CacheKey`]. An entry is served only while `now - inserted_at < ttl`;
//! after that it reads as a miss but stays in the map until the next
//! successful prediction for the same key overwrites it. There is no
//! expiry sweep.
//!
//! Freshness is measured with [`tokio::time::Instant`], so tests running
//! on a paused runtime can step past the TTL with `tokio::time::advance`.
//!
//! The map itself is a moka cache: concurrent inserts are safe, and the
//! capacity bound only guards memory in long-running processes. Two
//! concurrent misses on the same key both go to the backend; the later
//! `put` wins.

use std::time::Duration;

use moka::future::Cache;
use tokio::time::Instant;

use super::CacheKey;
use crate::telemetry;
use crate::types::{
    PestRiskPrediction, PredictionKind, RainfallPrediction, SoilHealthPrediction, YieldPrediction,
};

/// Default freshness window: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Configuration for the prediction cache.
///
/// ```rust
/// # use furrow::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(1_000)
///     .ttl(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Freshness window. Default: 5 minutes.
    pub ttl: Duration,
    /// Maximum number of stored entries. Default: 10,000.
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_entries: 10_000,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the freshness window.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of stored entries.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }
}

/// A cached backend answer, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPrediction {
    SoilHealth(SoilHealthPrediction),
    CropYield(YieldPrediction),
    PestRisk(PestRiskPrediction),
    Rainfall(RainfallPrediction),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    data: CachedPrediction,
    inserted_at: Instant,
}

/// Prediction cache keyed by canonical request fingerprint.
pub struct PredictionCache {
    entries: Cache<String, CacheEntry>,
    ttl: Duration,
}

impl PredictionCache {
    pub fn new(config: &CacheConfig) -> Self {
        let entries = Cache::builder().max_capacity(config.max_entries).build();
        Self {
            entries,
            ttl: config.ttl,
        }
    }

    /// The freshness window entries are checked against.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a fresh entry.
    ///
    /// Stale entries read as `None` and are left in place.
    pub async fn get(&self, key: &CacheKey) -> Option<CachedPrediction> {
        let entry = self.entries.get(key.as_str()).await?;
        if entry.inserted_at.elapsed() < self.ttl {
            Some(entry.data)
        } else {
            None
        }
    }

    /// Insert or overwrite the entry for `key`, stamped with the current time.
    pub async fn put(&self, key: &CacheKey, data: CachedPrediction) {
        let entry = CacheEntry {
            data,
            inserted_at: Instant::now(),
        };
        self.entries.insert(key.as_str().to_owned(), entry).await;
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Look up a cached soil health prediction. Emits hit/miss metrics.
    pub async fn get_soil_health(&self, key: &CacheKey) -> Option<SoilHealthPrediction> {
        let hit = match self.get(key).await {
            Some(CachedPrediction::SoilHealth(p)) => Some(p),
            _ => None,
        };
        record_lookup(PredictionKind::SoilHealth, hit.is_some());
        hit
    }

    /// Look up a cached crop yield prediction. Emits hit/miss metrics.
    pub async fn get_crop_yield(&self, key: &CacheKey) -> Option<YieldPrediction> {
        let hit = match self.get(key).await {
            Some(CachedPrediction::CropYield(p)) => Some(p),
            _ => None,
        };
        record_lookup(PredictionKind::CropYield, hit.is_some());
        hit
    }

    /// Look up a cached pest risk prediction. Emits hit/miss metrics.
    pub async fn get_pest_risk(&self, key: &CacheKey) -> Option<PestRiskPrediction> {
        let hit = match self.get(key).await {
            Some(CachedPrediction::PestRisk(p)) => Some(p),
            _ => None,
        };
        record_lookup(PredictionKind::PestRisk, hit.is_some());
        hit
    }

    /// Look up a cached rainfall prediction. Emits hit/miss metrics.
    pub async fn get_rainfall(&self, key: &CacheKey) -> Option<RainfallPrediction> {
        let hit = match self.get(key).await {
            Some(CachedPrediction::Rainfall(p)) => Some(p),
            _ => None,
        };
        record_lookup(PredictionKind::Rainfall, hit.is_some());
        hit
    }
}

fn record_lookup(kind: PredictionKind, hit: bool) {
    let name = if hit {
        telemetry::CACHE_HITS_TOTAL
    } else {
        telemetry::CACHE_MISSES_TOTAL
    };
    metrics::counter!(name, "kind" => kind.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rainfall(probability: f64) -> CachedPrediction {
        CachedPrediction::Rainfall(RainfallPrediction {
            probability,
            expected_amount: 2.0,
            timeframe: "24 hours".into(),
            confidence: 80.0,
            recommendation: "Continue normal irrigation".into(),
            timestamp: Utc::now(),
        })
    }

    fn key(tag: &str) -> CacheKey {
        CacheKey::new(PredictionKind::Rainfall, &tag).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_entries, 10_000);
    }

    #[tokio::test]
    async fn put_then_get() {
        let cache = PredictionCache::new(&CacheConfig::default());
        let value = rainfall(40.0);
        cache.put(&key("a"), value.clone()).await;
        assert_eq!(cache.get(&key("a")).await, Some(value));
        assert!(cache.get(&key("b")).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_entry_reads_as_miss_but_is_kept() {
        let cache = PredictionCache::new(&CacheConfig::default());
        cache.put(&key("a"), rainfall(40.0)).await;

        tokio::time::advance(Duration::from_secs(299)).await;
        assert!(cache.get(&key("a")).await.is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get(&key("a")).await.is_none());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn overwrite_refreshes_insertion_time() {
        let cache = PredictionCache::new(&CacheConfig::default());
        cache.put(&key("a"), rainfall(40.0)).await;
        tokio::time::advance(Duration::from_secs(240)).await;
        cache.put(&key("a"), rainfall(70.0)).await;
        tokio::time::advance(Duration::from_secs(240)).await;

        match cache.get(&key("a")).await {
            Some(CachedPrediction::Rainfall(p)) => assert_eq!(p.probability, 70.0),
            other => panic!("expected fresh rainfall entry, got {other:?}"),
        }
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn typed_lookup_ignores_other_kinds() {
        let cache = PredictionCache::new(&CacheConfig::default());
        cache.put(&key("a"), rainfall(40.0)).await;
        assert!(cache.get_soil_health(&key("a")).await.is_none());
        assert!(cache.get_rainfall(&key("a")).await.is_some());
    }
}
