use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

/// Sort issues and count them into a [`CommandResult`].
///
/// With `issues_fail` every issue counts toward a failing exit status,
/// warnings included. Otherwise only command-level errors (init failure,
/// strict export abort) do.
pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>, issues_fail: bool) -> CommandResult {
    issues.sort();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    let mut error_count = if issues_fail {
        issues.len()
    } else {
        issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    };

    let exit_on_errors = match &summary {
        CommandSummary::Check(_) => true,
        CommandSummary::Export(export) => export.aborted,
        CommandSummary::Init(init) => {
            if init.error.is_some() {
                error_count += 1;
            }
            true
        }
        CommandSummary::Preview(_) => false,
    };

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
    }
}
