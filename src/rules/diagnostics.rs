//! Extraction diagnostics as issues.

use crate::{
    core::data::Diagnostic,
    issues::{Issue, MalformedCallIssue, ReadFailureIssue},
};

pub fn check_diagnostics(diagnostics: &[Diagnostic]) -> Vec<Issue> {
    diagnostics
        .iter()
        .map(|diagnostic| match diagnostic {
            Diagnostic::MalformedCall {
                file_path,
                line,
                raw_text,
            } => Issue::MalformedCall(MalformedCallIssue {
                file_path: file_path.clone(),
                line: *line,
                raw_text: raw_text.clone(),
            }),
            Diagnostic::ReadFailure { file_path, cause } => {
                Issue::ReadFailure(ReadFailureIssue {
                    file_path: file_path.clone(),
                    cause: cause.clone(),
                })
            }
        })
        .collect()
}
