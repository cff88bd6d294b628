//! Serde helpers for generation timestamps.
//!
//! The backend stamps results with a naive local ISO-8601 string
//! (`2025-03-01T10:15:30.123456`), while locally produced results use
//! RFC 3339 in UTC. Both decode to `DateTime<Utc>`; naive values are taken
//! as UTC. Anything else (another format, a number, `null`) decodes to the
//! current time rather than failing the whole response. Encoding always
//! emits RFC 3339 with millisecond precision.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    let parsed = match Raw::deserialize(deserializer)? {
        Raw::Text(raw) => parse(&raw),
        Raw::Other(_) => None,
    };
    Ok(parsed.unwrap_or_else(Utc::now))
}

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
