//! Telemetry metric name constants.
//!
//! Centralised metric names for furrow operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `furrow_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `kind` — prediction kind (e.g. "soil_health", "crop_yield")
//! - `backend` — backend name (e.g. "http")
//! - `status` — outcome: "ok" or "error"
//! - `mode` — fallback mode: "fixed" or "heuristic"

/// Total remote prediction requests.
///
/// Labels: `backend`, `kind`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "furrow_requests_total";

/// Remote prediction request duration in seconds.
///
/// Labels: `backend`, `kind`.
pub const REQUEST_DURATION_SECONDS: &str = "furrow_request_duration_seconds";

/// Total cache hits.
///
/// Labels: `kind`.
pub const CACHE_HITS_TOTAL: &str = "furrow_cache_hits_total";

/// Total cache misses (absent or stale entries).
///
/// Labels: `kind`.
pub const CACHE_MISSES_TOTAL: &str = "furrow_cache_misses_total";

/// Total predictions served from a fallback estimate.
///
/// Labels: `kind`, `mode`.
pub const FALLBACKS_TOTAL: &str = "furrow_fallbacks_total";
