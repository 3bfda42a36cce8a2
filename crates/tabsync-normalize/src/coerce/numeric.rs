//! Locale-tolerant numeric coercion.

use tabsync_model::Value;

/// Coerce a value to a floating-point number, returning `None` on failure.
///
/// Handles French (`1 000,50`) and English (`1,000.50`) groupings and strips
/// currency symbols. When both `,` and `.` are present, the separator that
/// appears first is treated as the thousands mark: leading commas are
/// removed, a leading dot leaves the string untouched. A lone `,` is the
/// decimal separator. Inputs like `1.234,56` therefore stay unparseable and
/// degrade to null; that behavior is kept for compatibility with existing
/// imports.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) if f.is_nan() => None,
        Value::Float(f) => Some(*f),
        other => coerce_number_str(&other.to_string()),
    }
}

fn coerce_number_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Regular and non-breaking spaces act as thousands separators.
    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '\u{a0}' | '€' | '$' | '£' | '¥'))
        .collect();

    let candidate = match (cleaned.find(','), cleaned.find('.')) {
        (Some(comma), Some(dot)) if comma < dot => cleaned.replace(',', ""),
        (Some(_), Some(_)) => cleaned,
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    candidate.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_grouping() {
        assert_eq!(coerce_number(&Value::Text("1 000,50".to_string())), Some(1000.5));
        assert_eq!(coerce_number(&Value::Text("1\u{a0}234,5".to_string())), Some(1234.5));
    }

    #[test]
    fn english_grouping() {
        assert_eq!(coerce_number(&Value::Text("1,000.50".to_string())), Some(1000.5));
        assert_eq!(coerce_number(&Value::Text("1000.50".to_string())), Some(1000.5));
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(coerce_number(&Value::Text("€12.99".to_string())), Some(12.99));
        assert_eq!(coerce_number(&Value::Text("$ 5".to_string())), Some(5.0));
    }

    #[test]
    fn dot_before_comma_stays_unparseable() {
        // Known simplification, see module docs.
        assert_eq!(coerce_number(&Value::Text("1.234,56".to_string())), None);
    }

    #[test]
    fn passthrough_and_null() {
        assert_eq!(coerce_number(&Value::Int(7)), Some(7.0));
        assert_eq!(coerce_number(&Value::Float(2.5)), Some(2.5));
        assert_eq!(coerce_number(&Value::Float(f64::NAN)), None);
        assert_eq!(coerce_number(&Value::Bool(true)), Some(1.0));
        assert_eq!(coerce_number(&Value::Null), None);
        assert_eq!(coerce_number(&Value::Text(String::new())), None);
        assert_eq!(coerce_number(&Value::Text("n/a".to_string())), None);
    }
}
