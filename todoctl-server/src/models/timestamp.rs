//! Timezone-naive timestamp encoding
//!
//! Timestamps are written as ISO-8601 without an offset. On input an
//! RFC 3339 string carrying an offset is also accepted; the wall-clock
//! part is kept and the offset dropped, with no conversion.

use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Format used for serialized timestamps
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a naive or offset-carrying timestamp, keeping the wall clock.
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    value.format(FORMAT).to_string().serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

/// Same encoding for optional fields. Pair with `default` and
/// `skip_serializing_if = "Option::is_none"`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => super::serialize(ts, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw))),
            None => Ok(None),
        }
    }
}
