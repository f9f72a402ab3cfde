//! Normalizes the timestamp strings the fills API has produced over time
//! (`Z` suffixes, explicit offsets, space separators, 0–9+ fractional digits,
//! naive date-times) into one offset-aware instant.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Sentinel month label/key for trades without a parseable date.
pub const UNKNOWN_MONTH: &str = "Unknown";

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp, returning `None` for blank or unparseable input.
/// Naive values are taken as UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    // `Z` is normalized to an explicit offset so the remaining formats
    // only need to handle `%:z`.
    let normalized = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(head) => format!("{}+00:00", head),
        None => s.to_string(),
    };

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt);
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(as_utc(naive));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(as_utc)
}

fn as_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).fixed_offset()
}

/// Human-readable month, e.g. "Jan 2025".
pub fn month_label(dt: Option<&DateTime<FixedOffset>>) -> String {
    dt.map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_MONTH.to_string())
}

/// Sortable month key, e.g. "2025-01".
pub fn month_key(dt: Option<&DateTime<FixedOffset>>) -> String {
    dt.map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_else(|| UNKNOWN_MONTH.to_string())
}
