//! Date and datetime coercions

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use propmap_value::Value;

/// Datetime formats tried when no explicit format is given. `%.f` matches an
/// optional fractional-seconds suffix.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Date format tried when no explicit format is given.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Coerce a value to a calendar date.
///
/// With an explicit strftime `format` only that format is accepted; otherwise
/// ISO dates are tried first, then the date part of the default datetime
/// formats.
#[must_use]
pub fn try_date(value: Option<&Value>, format: Option<&str>) -> Option<NaiveDate> {
    let text = string_input(value)?;

    if let Some(fmt) = format {
        return NaiveDate::parse_from_str(text, fmt).ok();
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| parse_default_datetime(text).map(|dt| dt.date()))
}

/// Coerce a value to a naive datetime.
///
/// With an explicit strftime `format` only that format is accepted; otherwise
/// the default formats, RFC 3339, and bare ISO dates (at midnight) are tried
/// in order.
#[must_use]
pub fn try_datetime(value: Option<&Value>, format: Option<&str>) -> Option<NaiveDateTime> {
    let text = string_input(value)?;

    if let Some(fmt) = format {
        return NaiveDateTime::parse_from_str(text, fmt).ok();
    }

    parse_default_datetime(text).or_else(|| {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

fn parse_default_datetime(text: &str) -> Option<NaiveDateTime> {
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.naive_utc())
}

fn string_input(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) => Some(s.trim()),
        _ => None,
    }
}
