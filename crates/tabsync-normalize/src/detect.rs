//! Heuristic combined date+time column detection.

use tabsync_model::Value;

/// Number of leading non-null values sampled per column.
pub const SAMPLE_SIZE: usize = 10;

/// Outcome of scanning a column sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatetimeDetection {
    pub is_datetime: bool,
    pub has_time: bool,
}

/// Decide whether a column holds combined date+time values.
///
/// Scans the first [`SAMPLE_SIZE`] non-null values, stopping at the first
/// decisive one:
/// - a numeric value marks the column as datetime (spreadsheet serial);
///   a non-zero fractional part means it carries a time of day
/// - text containing both a space and a colon marks datetime-with-time
/// - text containing `/` or `-` marks datetime date-only and keeps scanning,
///   in case a later value is decisive for the time component
///
/// An empty sample is not a candidate. Best-effort by design: false
/// positives and negatives are acceptable and never fail.
pub fn detect_datetime_column<'a>(
    values: impl IntoIterator<Item = &'a Value>,
) -> DatetimeDetection {
    let mut detection = DatetimeDetection::default();
    let sample = values
        .into_iter()
        .filter(|value| !value.is_missing())
        .take(SAMPLE_SIZE);
    for value in sample {
        match value {
            Value::Int(_) => {
                detection.is_datetime = true;
                return detection;
            }
            Value::Float(f) => {
                detection.is_datetime = true;
                detection.has_time = f.fract() != 0.0;
                return detection;
            }
            other => {
                let rendered = other.to_string();
                if rendered.contains(' ') && rendered.contains(':') {
                    detection.is_datetime = true;
                    detection.has_time = true;
                    return detection;
                }
                if rendered.contains('/') || rendered.contains('-') {
                    detection.is_datetime = true;
                }
            }
        }
    }
    detection
}
