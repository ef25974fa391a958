//! Canonical slug normalization.
//!
//! Every comparison between a display name (campus, career, section title) and
//! a URL segment goes through [`normalize`], and every outgoing link is built
//! with it, so both sides of a lookup always agree.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduce arbitrary text to its lookup key.
///
/// Lowercases, decomposes accented characters and drops their combining marks,
/// then drops whitespace and the `-` / `_` word separators used in URLs.
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// use campus_data::slug::normalize;
///
/// assert_eq!(normalize("Santa Cruz"), "santacruz");
/// assert_eq!(normalize("santa-cruz"), "santacruz");
/// assert_eq!(normalize("Ingeniería de Sistemas"), "ingenieriadesistemas");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    // lowercase first: some lowercase mappings (e.g. 'İ') emit combining marks
    text.to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch) && !is_separator(*ch))
        .collect()
}

/// True when two texts share a lookup key.
pub fn same_slug(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-' || ch == '_'
}
