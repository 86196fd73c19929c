//! Serde helper functions for server payloads.
//!
//! The server emits naive ISO-8601 timestamps (sometimes with an offset, sometimes
//! with fractional seconds) and serializes decimal columns as strings. These
//! helpers accept every shape the server is known to produce.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses a timestamp in any of the accepted formats.
///
/// Accepts RFC 3339 (`2025-01-15T10:00:00Z`, `2025-01-15T10:00:00+08:00`),
/// naive timestamps with or without fractional seconds, and bare dates
/// (`2025-01-15`, interpreted as midnight). Offsets are dropped, keeping the
/// wall-clock time the server wrote so a review stays on its calendar day.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Deserialize a required timestamp.
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_datetime(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}")))
}

/// Deserialize an optional timestamp, treating empty strings as None.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}"))),
        _ => Ok(None),
    }
}

/// Deserialize a decimal that may arrive as a JSON number or a numeric string.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {s}"))),
    }
}
