//! Timestamp display helpers

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

/// Short date/time layout, e.g. "Jan 5, 2024, 03:04 PM"
const SHORT_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Format a service timestamp in the local time zone.
///
/// Strings that cannot be parsed are returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &TimeZone::system())
}

/// Format a service timestamp in the given time zone
pub fn format_timestamp_in(raw: &str, tz: &TimeZone) -> String {
    match parse_zoned(raw, tz) {
        Some(zoned) => zoned.strftime(SHORT_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_zoned(raw: &str, tz: &TimeZone) -> Option<Zoned> {
    let raw = raw.trim();
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(tz.clone()));
    }
    // Timestamps without an offset are read as local wall-clock time
    raw.parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(tz.clone()).ok())
}
