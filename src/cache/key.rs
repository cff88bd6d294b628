//! Canonical cache keys.
//!
//! A key is the kind's tag followed by the request rendered as compact JSON
//! with every object's fields sorted by name. Sorting is done explicitly so
//! the key does not depend on whether `serde_json` was built with
//! `preserve_order`, nor on the order fields were declared in.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::Result;
use crate::types::PredictionKind;

/// Deterministic fingerprint of a (kind, request) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build the key for `request` under `kind`.
    ///
    /// Fails only if the request cannot be represented as JSON, which the
    /// crate's request types never trigger.
    pub fn new<R: Serialize + ?Sized>(kind: PredictionKind, request: &R) -> Result<Self> {
        let canonical = canonicalize(serde_json::to_value(request)?);
        Ok(Self(format!("{}{}", kind.cache_tag(), canonical)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(String, Value)> = map.into_iter().collect();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = Map::with_capacity(fields.len());
            for (name, field) in fields {
                sorted.insert(name, canonicalize(field));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
