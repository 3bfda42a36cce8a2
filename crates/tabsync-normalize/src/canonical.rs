//! Header name canonicalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Convert an arbitrary header into a stable identifier form.
///
/// Decomposes to base letters (NFD, combining marks dropped), replaces runs
/// of whitespace or hyphens with a single underscore, drops everything else
/// outside `[A-Za-z0-9_]`, and lowercases.
///
/// Total and idempotent: `canonicalize_name(canonicalize_name(x)) ==
/// canonicalize_name(x)`, and empty input comes back empty. Distinct source
/// names can collide ("Prix (€)" and "Prix" both become `prix`); collisions
/// are not deduplicated here and must be resolved by the caller when
/// uniqueness is required.
pub fn canonicalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for ch in name.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}
