use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of a rosetta run.
///
/// `check` fails on any issue, `export --strict` fails when it refuses to
/// write, and `init` fails when the config is already there. `preview` and
/// a non-strict `export` only report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: nothing to report, or a report-only command.
    Success,
    /// 1: issues found, or the command declined to act.
    Failure,
    /// 2: the run itself failed (missing path, bad config, unwritable output).
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        match (result.exit_on_errors, result.error_count) {
            (true, count) if count > 0 => Self::Failure,
            _ => Self::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code: u8 = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
