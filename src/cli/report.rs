//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format, followed by a per-command
//! summary. Separate from core logic to allow rosetta to be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{
        CheckSummary, CommandResult, CommandSummary, ExportSummary, InitSummary, PreviewSummary,
        ScanTotals,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Rule, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, followed by the problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_problem_count(&sorted, writer);
}

/// Print a command result to stdout, with warnings on stderr.
pub fn print(result: &CommandResult) -> Result<()> {
    print_to(
        result,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) -> Result<()> {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, &result.issues, out)?,
        CommandSummary::Preview(summary) => print_preview(summary, &result.issues, out, err),
        CommandSummary::Export(summary) => print_export(summary, &result.issues, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
    Ok(())
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Corpus => {}
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::Line { path, line } => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path, line);
        }
    }

    let label = format!("{}:", issue.member_label());
    for member in issue.members() {
        let _ = writeln!(
            writer,
            "  {} {} \"{}\"",
            "=".blue(),
            label.bold(),
            member
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_problem_count<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

fn count_rule(issues: &[Issue], rule: Rule) -> usize {
    issues.iter().filter(|i| i.rule() == rule).count()
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ============================================================
// check
// ============================================================

fn print_check<W: Write>(summary: &CheckSummary, issues: &[Issue], writer: &mut W) -> Result<()> {
    match summary.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(summary)?;
            let _ = writeln!(writer, "{}", json);
        }
        OutputFormat::Text => {
            print_check_summary(summary, issues, writer);
            if issues.is_empty() {
                print_success_to(&summary.totals, writer);
            } else {
                report_to(issues, writer);
            }
        }
    }
    Ok(())
}

fn print_check_summary<W: Write>(summary: &CheckSummary, issues: &[Issue], writer: &mut W) {
    let rows = [
        ("Files scanned", summary.totals.total_files),
        ("Total instances", summary.totals.total_instances),
        ("Key conflicts", count_rule(issues, Rule::KeyConflict)),
        ("Exact redundancies", count_rule(issues, Rule::ExactRedundancy)),
        ("Pattern redundancies", count_rule(issues, Rule::PatternRedundancy)),
        ("Errors", summary.diagnostics.len()),
    ];

    let _ = writeln!(writer, "{}", "Summary:".bold());
    for (label, count) in rows {
        let _ = writeln!(writer, "  {}: {}", label, count);
    }
    let _ = writeln!(writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(totals: &ScanTotals, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} translation {} - no issues found",
            totals.total_files,
            plural(totals.total_files, "file", "files"),
            totals.total_instances,
            plural(totals.total_instances, "instance", "instances")
        )
        .green()
    );
}

// ============================================================
// preview
// ============================================================

fn print_preview<O: Write, E: Write>(
    summary: &PreviewSummary,
    issues: &[Issue],
    out: &mut O,
    err: &mut E,
) {
    for (prefix, group) in &summary.groups {
        let _ = writeln!(
            out,
            "{} {} ({} {})",
            "---".blue(),
            prefix.bold(),
            group.len(),
            plural(group.len(), "translation", "translations")
        );

        let key_width = group
            .keys()
            .map(|key| UnicodeWidthStr::width(key.as_str()))
            .max()
            .unwrap_or(0);
        for (key, value) in group {
            let padding = key_width - UnicodeWidthStr::width(key.as_str());
            let _ = writeln!(
                out,
                "  {}{:padding$}  {}",
                key.cyan(),
                "",
                value,
                padding = padding
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Total unique translations: {}", summary.unique_count);
    let _ = writeln!(out, "Prefix groups: {}", summary.groups.len());

    if !issues.is_empty() {
        let _ = writeln!(
            err,
            "{} {} issue(s) found (run {} for details)",
            "warning:".bold().yellow(),
            issues.len(),
            "rosetta check".cyan()
        );
    }
}

// ============================================================
// export
// ============================================================

fn print_export<O: Write, E: Write>(
    summary: &ExportSummary,
    issues: &[Issue],
    out: &mut O,
    err: &mut E,
) {
    if !issues.is_empty() {
        print_issue_counts(issues, err);
    }

    if summary.aborted {
        let _ = writeln!(
            err,
            "{} Export aborted: {} issue(s) found with {}",
            FAILURE_MARK.red(),
            issues.len(),
            "--strict".cyan()
        );
        return;
    }

    for dropped in &summary.dropped {
        let values: Vec<String> = dropped
            .dropped
            .iter()
            .map(|v| format!("\"{}\"", v))
            .collect();
        let _ = writeln!(
            err,
            "{} key \"{}\" exported as \"{}\", dropped {}",
            "warning:".bold().yellow(),
            dropped.key,
            dropped.kept,
            values.join(", ")
        );
    }

    let _ = writeln!(
        out,
        "Translation sheets written to {}:",
        summary.output_dir.display()
    );
    for file in &summary.files {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.path.display().to_string());
        let _ = writeln!(
            out,
            "  - {} ({} {})",
            name,
            file.rows,
            plural(file.rows, "translation", "translations")
        );
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} unique {} into {} {}",
            summary.unique_count,
            plural(summary.unique_count, "translation", "translations"),
            summary.files.len(),
            plural(summary.files.len(), "file", "files")
        )
        .green()
    );
}

fn print_issue_counts<W: Write>(issues: &[Issue], writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} issue(s) found in translations (run {} for details):",
        "warning:".bold().yellow(),
        issues.len(),
        "rosetta check".cyan()
    );

    let rows = [
        ("key conflicts", Rule::KeyConflict),
        ("exact redundancies", Rule::ExactRedundancy),
        ("pattern redundancies", Rule::PatternRedundancy),
        ("malformed calls", Rule::MalformedCall),
        ("unreadable files", Rule::ReadFailure),
    ];
    for (label, rule) in rows {
        let count = count_rule(issues, rule);
        if count > 0 {
            let _ = writeln!(writer, "  - {}: {}", label, count);
        }
    }
}

// ============================================================
// init
// ============================================================

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "Error: {}", error);
    }
}

// ============================================================
// Tests
// ============================================================
