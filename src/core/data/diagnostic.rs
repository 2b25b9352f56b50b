use serde::Serialize;

/// A call site that looked like a translation call but had an empty key or value.
///
/// Produced by the extractor, which does not know which file it is reading;
/// the corpus builder attaches the path when turning it into a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCall {
    /// The full matched text, e.g. `t('key', '')`.
    pub raw_text: String,
    /// Line number of the match start (1-indexed).
    pub line: usize,
}

/// Non-fatal problem recorded while building the corpus.
///
/// A diagnostic means "this unit contributed nothing, and here is why".
/// Nothing in the scan aborts because of one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Diagnostic {
    #[error("malformed translation call `{raw_text}`")]
    MalformedCall {
        file_path: String,
        line: usize,
        raw_text: String,
    },

    #[error("failed to read file: {cause}")]
    ReadFailure { file_path: String, cause: String },
}

impl Diagnostic {
    pub fn malformed(file_path: impl Into<String>, call: MalformedCall) -> Self {
        Self::MalformedCall {
            file_path: file_path.into(),
            line: call.line,
            raw_text: call.raw_text,
        }
    }

    pub fn read_failure(file_path: impl Into<String>, cause: impl ToString) -> Self {
        Self::ReadFailure {
            file_path: file_path.into(),
            cause: cause.to_string(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            Self::MalformedCall { file_path, .. } | Self::ReadFailure { file_path, .. } => {
                file_path
            }
        }
    }

    /// Line of the offending call; `None` for whole-file failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedCall { line, .. } => Some(*line),
            Self::ReadFailure { .. } => None,
        }
    }
}
