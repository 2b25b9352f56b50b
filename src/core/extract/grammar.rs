//! Regex grammar for translation call sites.
//!
//! The recognized shape is
//!
//! ```text
//! <name>( <quoted-key> , <quoted-value> [, { ... }] )
//! ```
//!
//! where each quoted literal is single- or double-quoted, never spans a raw
//! newline, never holds an unescaped quote of either kind, and may contain
//! backslash escapes. The optional third argument is a shallow object
//! literal (no `}` inside) and is discarded.

use regex::Regex;

/// Single-quoted literal body: escapes, or anything but a quote, `\` and newline.
const SINGLE_QUOTED: &str = r#"'(?P<{name}_sq>(?:\\.|[^'"\\\n])*)'"#;

/// Double-quoted literal body: escapes, or anything but a quote, `\` and newline.
const DOUBLE_QUOTED: &str = r#""(?P<{name}_dq>(?:\\.|[^'"\\\n])*)""#;

/// Optional `, { ... }` third argument followed by the closing paren.
const CALL_TAIL: &str = r"\s*(?:,\s*\{[^}]*\})?\s*\)";

/// Capture group names used by [`build_call_regex`].
pub const KEY_GROUPS: [&str; 2] = ["key_sq", "key_dq"];
pub const VALUE_GROUPS: [&str; 2] = ["value_sq", "value_dq"];

/// Build the call-site regex for the given function names.
///
/// Names that start with an identifier character must begin at a word
/// boundary, so `format('a', 'b')` is not read as a call to `t`.
pub fn build_call_regex(function_names: &[String]) -> Result<Regex, regex::Error> {
    let names: Vec<String> = function_names
        .iter()
        .map(|name| {
            let escaped = regex::escape(name);
            if name.starts_with(is_identifier_char) {
                format!(r"\b{}", escaped)
            } else {
                escaped
            }
        })
        .collect();

    let pattern = [
        "(?:",
        &names.join("|"),
        r")\(\s*",
        &quoted("key"),
        r"\s*,\s*",
        &quoted("value"),
        CALL_TAIL,
    ]
    .concat();

    Regex::new(&pattern)
}

fn quoted(name: &str) -> String {
    format!(
        "(?:{}|{})",
        SINGLE_QUOTED.replace("{name}", name),
        DOUBLE_QUOTED.replace("{name}", name)
    )
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
