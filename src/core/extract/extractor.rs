use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::grammar::{KEY_GROUPS, VALUE_GROUPS, build_call_regex};
use crate::core::data::{MalformedCall, TranslationEntry};

/// Default translation function names: `t('key', 'value')` and `$t(...)`.
pub const DEFAULT_FUNCTION_NAMES: &[&str] = &["t", "$t"];

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::new(&ExtractorConfig::default()).expect("default call grammar must compile")
});

/// Grammar settings for the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorConfig {
    /// Function names that introduce a translation call.
    pub function_names: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            function_names: DEFAULT_FUNCTION_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("at least one translation function name is required")]
    NoFunctionNames,

    #[error("translation function name must not be empty")]
    EmptyFunctionName,

    #[error("failed to compile call grammar: {0}")]
    Grammar(#[from] regex::Error),
}

/// Everything found in one file's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Well-formed call sites, in source order.
    pub entries: Vec<TranslationEntry>,
    /// Call sites whose key or value was empty, in source order.
    pub malformed: Vec<MalformedCall>,
}

/// Turns source text into translation entries by matching call sites.
///
/// Extraction is pure: it never fails on text it has been given, and
/// reading the text is the caller's job.
#[derive(Debug, Clone)]
pub struct Extractor {
    call_regex: Regex,
}

impl Extractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        if config.function_names.is_empty() {
            return Err(ExtractorError::NoFunctionNames);
        }
        if config.function_names.iter().any(|name| name.is_empty()) {
            return Err(ExtractorError::EmptyFunctionName);
        }

        Ok(Self {
            call_regex: build_call_regex(&config.function_names)?,
        })
    }

    /// Scan `text` left to right for non-overlapping call sites.
    ///
    /// Quotes around key and value are stripped; escape sequences inside
    /// them are kept verbatim.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        let mut line = 1;
        let mut last_offset = 0;

        for caps in self.call_regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            line += text[last_offset..whole.start()].matches('\n').count();
            last_offset = whole.start();

            let key = first_group(&caps, &KEY_GROUPS);
            let value = first_group(&caps, &VALUE_GROUPS);

            if key.is_empty() || value.is_empty() {
                result.malformed.push(MalformedCall {
                    raw_text: whole.as_str().to_string(),
                    line,
                });
            } else {
                result.entries.push(TranslationEntry::new(key, value));
            }
        }

        result
    }
}

/// Extract with the default `t` / `$t` grammar.
pub fn extract_from_text(text: &str) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract(text)
}

fn first_group<'t>(caps: &Captures<'t>, names: &[&str]) -> &'t str {
    names
        .iter()
        .find_map(|name| caps.name(name))
        .map_or("", |m| m.as_str())
}
