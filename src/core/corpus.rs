//! Aggregation of per-file extraction results into one corpus.

use std::collections::BTreeMap;

use crate::core::{
    analyze::{AnalysisReport, analyze},
    data::{Diagnostic, TranslationEntry},
    extract::ExtractionResult,
    prefix::{PrefixGroups, group_by_prefix},
};

/// Every entry found in one scan, with per-file counts and diagnostics.
///
/// Entries keep the order in which files were added, which makes prefix
/// grouping deterministic as long as files are added in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub entries: Vec<TranslationEntry>,
    /// File path → number of entries extracted from it (0 for unreadable files).
    pub file_counts: BTreeMap<String, usize>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Corpus {
    pub fn total_files(&self) -> usize {
        self.file_counts.len()
    }

    pub fn total_instances(&self) -> usize {
        self.entries.len()
    }

    pub fn analyze(&self) -> AnalysisReport {
        analyze(&self.entries)
    }

    pub fn group_by_prefix(&self) -> PrefixGroups {
        group_by_prefix(&self.entries)
    }
}

/// Builds a [`Corpus`] one file at a time.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    corpus: Corpus,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that was read and extracted.
    pub fn add_file(&mut self, file_path: &str, result: ExtractionResult) -> &mut Self {
        self.corpus
            .file_counts
            .insert(file_path.to_string(), result.entries.len());
        self.corpus.entries.extend(result.entries);
        self.corpus.diagnostics.extend(
            result
                .malformed
                .into_iter()
                .map(|call| Diagnostic::malformed(file_path, call)),
        );
        self
    }

    /// Record a file that could not be read; it contributes no entries.
    pub fn add_read_failure(&mut self, file_path: &str, cause: impl ToString) -> &mut Self {
        self.corpus.file_counts.insert(file_path.to_string(), 0);
        self.corpus
            .diagnostics
            .push(Diagnostic::read_failure(file_path, cause));
        self
    }

    pub fn build(self) -> Corpus {
        self.corpus
    }
}
