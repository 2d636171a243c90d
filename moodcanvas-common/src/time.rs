//! Timestamp utilities
//!
//! All timestamps are captured in UTC and rendered as fixed-width RFC 3339
//! strings with microsecond precision, so string order matches time order.

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffffZ`
pub fn to_iso(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time, rendered with [`to_iso`]
pub fn now_iso() -> String {
    to_iso(&now())
}

/// Serde adapter for fields rendered with [`to_iso`]
pub mod iso_micros {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso(timestamp))
    }
}
