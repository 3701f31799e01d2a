//! Date-time and coordinate parsing for intake export fields.

use std::num::ParseFloatError;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts accepted for the `DateTime` column, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    // Austin open-data export, e.g. "10/31/2013 10:11:00 AM"
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an intake date-time string.
///
/// Offsets on RFC 3339 input are dropped and the local wall time is kept,
/// since every other layout is already local time. A bare date parses as
/// midnight.
#[must_use]
pub fn parse_intake_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parses an optional coordinate field. Missing or blank input is `Ok(None)`.
///
/// # Errors
///
/// Returns [`ParseFloatError`] if the field is present but not a number.
pub fn parse_coordinate(s: Option<&str>) -> Result<Option<f64>, ParseFloatError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<f64>().map(Some),
    }
}
