use std::path::PathBuf;

use serde::Serialize;

use crate::{
    cli::args::OutputFormat,
    core::{
        analyze::SortedAnalysisReport, data::Diagnostic, prefix::PrefixGroups, sheet::WrittenSheet,
    },
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Preview(PreviewSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

/// Totals shared by every scanning command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTotals {
    pub total_files: usize,
    pub total_instances: usize,
}

/// Analysis of one scan, also the shape of `check --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    #[serde(skip)]
    pub format: OutputFormat,
    #[serde(flatten)]
    pub totals: ScanTotals,
    #[serde(flatten)]
    pub analysis: SortedAnalysisReport,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug)]
pub struct PreviewSummary {
    pub totals: ScanTotals,
    pub groups: PrefixGroups,
    pub unique_count: usize,
}

/// A conflicting key whose exported value hides the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedValues {
    pub key: String,
    pub kept: String,
    pub dropped: Vec<String>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub totals: ScanTotals,
    pub output_dir: PathBuf,
    pub files: Vec<WrittenSheet>,
    pub unique_count: usize,
    pub dropped: Vec<DroppedValues>,
    /// True when `--strict` refused to write because issues were found.
    pub aborted: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running rosetta commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for commands that only report work done).
    pub exit_on_errors: bool,
    /// All issues found during the scan, sorted.
    pub issues: Vec<Issue>,
}
