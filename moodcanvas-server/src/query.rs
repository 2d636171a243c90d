//! Query-string value parsing and result truncation
//!
//! Malformed values are reported as [`Error::InvalidInput`]; handlers decide
//! which HTTP status that becomes.

use moodcanvas_common::{Error, Result};
use serde::Deserialize;

/// Default number of recommendations returned
pub const DEFAULT_RECOMMENDATION_LIMIT: i64 = 3;
/// Default number of history entries returned
pub const DEFAULT_HISTORY_LIMIT: i64 = 20;

/// Decoded query-string pairs in request order
///
/// Extracting these never fails, and repeated keys are kept; lookups see
/// the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value given for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse an integer `limit`, falling back to `default` when absent
pub fn parse_limit(raw: Option<&str>, default: i64) -> Result<i64> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::InvalidInput(format!("limit {:?}: {}", value, e))),
    }
}

/// Parse an optional float `intensity`; empty means "not given"
pub fn parse_intensity(raw: Option<&str>) -> Result<Option<f64>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| Error::InvalidInput(format!("intensity {:?}: {}", value, e))),
    }
}

/// Boolean flag: true only for a case-insensitive `"true"`
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Treat an empty identifier the same as a missing one
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}

/// Number of leading entries to keep from a list of `len` entries
///
/// A non-negative `limit` keeps `min(limit, len)`; a negative one drops
/// `|limit|` entries from the end, never going below zero.
pub fn take_prefix(len: usize, limit: i64) -> usize {
    if limit >= 0 {
        usize::try_from(limit).map_or(len, |l| l.min(len))
    } else {
        let drop = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(drop)
    }
}
