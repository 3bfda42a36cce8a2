//! Date and combined date+time coercion.
//!
//! String parsing runs an ordered format list, first match wins. Day-leading
//! formats are tried before month-leading ones, so `01/02/2026` resolves as
//! 1 February, not January 2. This tie-break is fixed, not configurable.
//!
//! Numeric input is decoded as a spreadsheet serial: a day-count offset from
//! the 1899-12-30 epoch, with the fractional part converted to a time of day.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tabsync_model::Value;

/// Date-only formats, in trial order. The flag marks the two-digit-year
/// entry: chrono's `%Y` also accepts short years, so matches from the
/// four-digit formats are rejected for years below 100 to keep the `%y`
/// branch reachable.
const DATE_FORMATS: [(&str, bool); 7] = [
    ("%Y-%m-%d", false), // ISO
    ("%d/%m/%Y", false), // FR
    ("%d/%m/%y", true),  // FR, two-digit year
    ("%m/%d/%Y", false), // US
    ("%Y/%m/%d", false),
    ("%d-%m-%Y", false),
    ("%d.%m.%Y", false),
];

/// Combined date+time formats, in trial order.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

/// Coerce a value to a calendar date, returning `None` on failure.
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Null | Value::Bool(_) => None,
        Value::Date(d) => Some(*d),
        Value::Int(n) => serial_to_datetime(*n as f64).map(|dt| dt.date()),
        Value::Float(f) => serial_to_datetime(*f).map(|dt| dt.date()),
        other => parse_date_str(&other.to_string()),
    }
}

/// Split a value into its date and time-of-day components.
///
/// Numeric input decodes the serial's fractional day into a time. Strings
/// try the combined formats first and fall back to date-only parsing,
/// yielding `(date, None)`.
pub fn coerce_datetime(value: &Value) -> (Option<NaiveDate>, Option<NaiveTime>) {
    match value {
        Value::Null | Value::Bool(_) => (None, None),
        Value::Date(d) => (Some(*d), None),
        Value::Time(t) => (None, Some(*t)),
        Value::Int(n) => match serial_to_datetime(*n as f64) {
            Some(dt) => (Some(dt.date()), Some(dt.time())),
            None => (None, None),
        },
        Value::Float(f) => match serial_to_datetime(*f) {
            Some(dt) => (Some(dt.date()), Some(dt.time())),
            None => (None, None),
        },
        Value::Text(s) => parse_datetime_str(s),
    }
}

fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS.iter().find_map(|(fmt, two_digit_year)| {
        let date = NaiveDate::parse_from_str(trimmed, fmt).ok()?;
        if !two_digit_year && date.year() < 100 {
            return None;
        }
        Some(date)
    })
}

fn parse_datetime_str(raw: &str) -> (Option<NaiveDate>, Option<NaiveTime>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (None, None);
    }
    let parsed = DATETIME_FORMATS.iter().find_map(|fmt| {
        let dt = NaiveDateTime::parse_from_str(trimmed, fmt).ok()?;
        // Same short-year rejection as the date formats; there is no
        // two-digit-year combined format.
        if dt.year() < 100 {
            return None;
        }
        Some(dt)
    });
    if let Some(dt) = parsed {
        return (Some(dt.date()), Some(dt.time()));
    }
    (parse_date_str(trimmed), None)
}

/// Decode a spreadsheet serial number into a datetime.
///
/// Whole part is the day offset from 1899-12-30, fractional part is the
/// fraction of the day elapsed. Out-of-range offsets and non-finite input
/// yield `None`.
fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor();
    if days < i64::MIN as f64 || days > i64::MAX as f64 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let mut date = epoch.checked_add_signed(Duration::try_days(days as i64)?)?;
    let mut seconds = ((serial - days) * 86_400.0).round() as u32;
    if seconds >= 86_400 {
        date = date.checked_add_signed(Duration::try_days(1)?)?;
        seconds = 0;
    }
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(date.and_time(time))
}
