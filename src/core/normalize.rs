//! Placeholder normalization for pattern-redundancy detection.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Marker every `{...}` placeholder collapses to.
pub const PLACEHOLDER: &str = "{VAR}";

// `{`, at least one non-`}` character, then the nearest `}`.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap());

/// Replace every placeholder span in `value` with [`PLACEHOLDER`].
///
/// Text outside placeholders is left untouched, so
/// `"Battery level: {value}%"` becomes `"Battery level: {VAR}%"`.
///
/// Malformed braces are not repaired: `{}` and an unclosed `{` stay as they
/// are, and a nested span ends at its first `}` (`{a{b}c}` → `{VAR}c}`).
/// Since the marker matches its own pattern, the function is idempotent.
pub fn normalize(value: &str) -> Cow<'_, str> {
    PLACEHOLDER_REGEX.replace_all(value, PLACEHOLDER)
}
