//! Free-text sanitization.

use tabsync_model::Value;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sanitize a value into plain text, returning `None` on null or when
/// nothing survives stripping.
///
/// Stringifies, trims, decomposes to base letters (combining marks dropped)
/// and removes control characters below U+0020. An empty result is null,
/// never an empty string.
pub fn sanitize_text(value: &Value) -> Option<String> {
    if value.is_missing() {
        return None;
    }
    let rendered = value.to_string();
    let cleaned: String = rendered
        .trim()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| *ch as u32 >= 32)
        .collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn strips_accents() {
        assert_eq!(sanitize_text(&text("Café Crème")), Some("Cafe Creme".to_string()));
        assert_eq!(sanitize_text(&text("  déjà ")), Some("deja".to_string()));
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(sanitize_text(&text("a\u{0}b\tc")), Some("abc".to_string()));
    }

    #[test]
    fn empty_becomes_null() {
        assert_eq!(sanitize_text(&text("")), None);
        assert_eq!(sanitize_text(&text("   ")), None);
        assert_eq!(sanitize_text(&text("\u{1}\u{2}")), None);
        assert_eq!(sanitize_text(&Value::Null), None);
    }

    #[test]
    fn stringifies_non_text_input() {
        assert_eq!(sanitize_text(&Value::Int(42)), Some("42".to_string()));
        assert_eq!(sanitize_text(&Value::Float(10.5)), Some("10.5".to_string()));
    }

    #[test]
    fn integral_floats_keep_all_digits() {
        assert_eq!(sanitize_text(&Value::Float(100.0)), Some("100".to_string()));
        assert_eq!(sanitize_text(&Value::Float(0.0)), Some("0".to_string()));
    }
}
