//! Timestamp parsing for raw ticket exports.
//!
//! Exports arrive with a few timestamp shapes depending on which system
//! produced them, so parsing tries each accepted format in turn.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses an `Event Time` value into a timestamp.
///
/// Accepts `%Y-%m-%d %H:%M:%S`, ISO 8601 `T`-separated datetimes with
/// optional fractional seconds, and bare dates (interpreted as midnight).
/// Returns `None` for anything else.
#[must_use]
pub fn parse_event_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}
