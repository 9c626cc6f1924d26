//! Date normalization for form drafts

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reduce a date or timestamp string to its `YYYY-MM-DD` calendar date.
///
/// The date is taken as written: `2024-03-01T23:30:00-05:00` gives
/// `2024-03-01`, no timezone conversion happens. Values that are not
/// recognisable dates are returned unchanged.
pub fn normalize_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.naive_local().date().format(DATE_FORMAT).to_string();
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return dt.date().format(DATE_FORMAT).to_string();
        }
    }

    // Anything else starting with a calendar date
    match value.get(..10).map(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT)) {
        Some(Ok(date)) => date.format(DATE_FORMAT).to_string(),
        _ => value.to_string(),
    }
}

pub fn normalize_optional_date(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        *v = normalize_date(v);
    }
}
