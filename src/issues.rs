//! Issue types produced by a scan.
//!
//! Each issue is self-contained with everything the reporter needs to show
//! it. Corpus-wide findings (conflicts, redundancy) have no file location;
//! extraction diagnostics point at a file and, for malformed calls, a line.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    KeyConflict,
    ExactRedundancy,
    PatternRedundancy,
    MalformedCall,
    ReadFailure,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::KeyConflict => write!(f, "key-conflict"),
            Rule::ExactRedundancy => write!(f, "exact-redundancy"),
            Rule::PatternRedundancy => write!(f, "pattern-redundancy"),
            Rule::MalformedCall => write!(f, "malformed-call"),
            Rule::ReadFailure => write!(f, "read-failure"),
        }
    }
}

// ============================================================
// Issue Types - Corpus-wide
// ============================================================

/// One key used with two or more different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConflictIssue {
    pub key: String,
    /// Distinct values, sorted.
    pub values: Vec<String>,
}

impl KeyConflictIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::KeyConflict
    }
}

/// One literal value produced by two or more different keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRedundancyIssue {
    pub value: String,
    /// Distinct keys, sorted.
    pub keys: Vec<String>,
}

impl ExactRedundancyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ExactRedundancy
    }
}

/// Keys whose values differ only in placeholder names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRedundancyIssue {
    /// Normalized value, e.g. `Battery: {VAR}%`.
    pub pattern: String,
    /// Distinct keys, sorted.
    pub keys: Vec<String>,
    /// Original values behind the pattern, sorted.
    pub values: Vec<String>,
}

impl PatternRedundancyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PatternRedundancy
    }
}

// ============================================================
// Issue Types - Extraction diagnostics
// ============================================================

/// A call site with an empty key or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCallIssue {
    pub file_path: String,
    pub line: usize,
    pub raw_text: String,
}

impl MalformedCallIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MalformedCall
    }
}

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailureIssue {
    pub file_path: String,
    pub cause: String,
}

impl ReadFailureIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadFailure
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    KeyConflict(KeyConflictIssue),
    ExactRedundancy(ExactRedundancyIssue),
    PatternRedundancy(PatternRedundancyIssue),
    MalformedCall(MalformedCallIssue),
    ReadFailure(ReadFailureIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait
// ============================================================

/// Where an issue points.
pub enum ReportLocation<'a> {
    /// Found across the whole corpus, no single file.
    Corpus,
    /// A whole file.
    File { path: &'a str },
    /// A line in a file (1-based).
    Line { path: &'a str, line: usize },
}

/// Common interface the reporter uses to display any issue.
///
/// Uses `enum_dispatch` so `Issue` forwards each call to its variant.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, value, call text, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Label for the member lines, e.g. `value` or `key`.
    fn member_label(&self) -> &'static str {
        ""
    }

    /// Group members listed under the message.
    fn members(&self) -> &[String] {
        &[]
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for KeyConflictIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Corpus
    }

    fn message(&self) -> String {
        format!("key \"{}\" has {} different values", self.key, self.values.len())
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn member_label(&self) -> &'static str {
        "value"
    }

    fn members(&self) -> &[String] {
        &self.values
    }
}

impl Report for ExactRedundancyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Corpus
    }

    fn message(&self) -> String {
        format!(
            "value \"{}\" is used by {} different keys",
            self.value,
            self.keys.len()
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn member_label(&self) -> &'static str {
        "key"
    }

    fn members(&self) -> &[String] {
        &self.keys
    }
}

impl Report for PatternRedundancyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Corpus
    }

    fn message(&self) -> String {
        format!(
            "pattern \"{}\" is shared by {} different keys",
            self.pattern,
            self.keys.len()
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn member_label(&self) -> &'static str {
        "key"
    }

    fn members(&self) -> &[String] {
        &self.keys
    }

    fn details(&self) -> Option<String> {
        let quoted: Vec<String> = self.values.iter().map(|v| format!("\"{}\"", v)).collect();
        Some(format!("original values: {}", quoted.join(", ")))
    }
}

impl Report for MalformedCallIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        format!("malformed translation call `{}`", self.raw_text)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("key and value must both be non-empty".to_string())
    }
}

impl Report for ReadFailureIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("failed to read file: {}", self.cause)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// File path for sorting (empty for corpus-wide issues).
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Corpus => "",
            ReportLocation::File { path } | ReportLocation::Line { path, .. } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Line { line, .. } => line,
            ReportLocation::Corpus | ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: rule, file_path, line, message
        self.rule()
            .cmp(&other.rule())
            .then_with(|| self.sort_file_path().cmp(other.sort_file_path()))
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
