//! Caching subsystem.
//!
//! - [`CacheKey`] — canonical fingerprint of a prediction kind and request.
//! - [`PredictionCache`] — TTL-checked store of backend answers, owned by
//!   the [`PredictionService`](crate::PredictionService) that assembles it.
//!   See [`store`] module docs for freshness and eviction rules.

mod key;
pub mod store;

pub use key::CacheKey;
pub use store::{CacheConfig, CachedPrediction, DEFAULT_TTL, PredictionCache};
