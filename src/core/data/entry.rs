use serde::Serialize;

/// A single key/value pair extracted from one translation call site.
///
/// Entries are plain values: two call sites with the same key and value
/// produce two equal entries, and nothing tracks which one came first
/// except their position in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TranslationEntry {
    /// Translation identifier, conventionally dot-delimited (`nav.home`).
    pub key: String,
    /// Source-language text exactly as written between the quotes.
    pub value: String,
}

impl TranslationEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Prefix used for grouping: everything before the first `.`,
    /// or the whole key when it has none.
    pub fn prefix(&self) -> &str {
        key_prefix(&self.key)
    }
}

/// Returns the substring of `key` before the first `.`.
pub fn key_prefix(key: &str) -> &str {
    key.split_once('.').map_or(key, |(prefix, _)| prefix)
}
