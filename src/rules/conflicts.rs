//! Key conflict detection rule.
//!
//! A conflict is one key used with two or more different values anywhere in
//! the scanned code. Export keeps only the first value seen, so every
//! conflict silently drops translations.

use crate::{core::analyze::AnalysisReport, issues::KeyConflictIssue};

pub fn check_key_conflicts(report: &AnalysisReport) -> Vec<KeyConflictIssue> {
    let mut issues: Vec<KeyConflictIssue> = report
        .conflicts
        .iter()
        .map(|(key, values)| {
            let mut values: Vec<String> = values.iter().cloned().collect();
            values.sort();
            KeyConflictIssue {
                key: key.clone(),
                values,
            }
        })
        .collect();

    issues.sort_by(|a, b| a.key.cmp(&b.key));
    issues
}
