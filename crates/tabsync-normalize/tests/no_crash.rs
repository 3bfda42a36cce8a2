//! No-crash guarantee: every coercer returns a value for arbitrary input.

use proptest::prelude::*;
use tabsync_model::Value;
use tabsync_normalize::{
    canonicalize_name, coerce_date, coerce_datetime, coerce_number, detect_datetime_column,
    sanitize_text,
};

proptest! {
    #[test]
    fn coercers_never_panic_on_arbitrary_text(s in "\\PC*") {
        let value = Value::Text(s.clone());
        let _ = coerce_number(&value);
        let _ = coerce_date(&value);
        let _ = coerce_datetime(&value);
        let _ = sanitize_text(&value);
        let _ = detect_datetime_column(&[value]);
        let canonical = canonicalize_name(&s);
        prop_assert_eq!(canonicalize_name(&canonical), canonical.clone());
    }

    #[test]
    fn coercers_never_panic_on_arbitrary_floats(f in proptest::num::f64::ANY) {
        let value = Value::Float(f);
        let _ = coerce_number(&value);
        let _ = coerce_date(&value);
        let _ = coerce_datetime(&value);
        let _ = sanitize_text(&value);
    }

    #[test]
    fn mixed_separator_garbage_degrades_to_none_or_value(
        s in "[0-9,. €$\u{a0}/:-]{0,40}"
    ) {
        let value = Value::Text(s);
        let _ = coerce_number(&value);
        let _ = coerce_date(&value);
        let _ = coerce_datetime(&value);
    }
}
