//! Exact redundancy detection rule.
//!
//! Finds literal values that several different keys produce, which usually
//! means one of the keys can be reused instead.

use crate::{core::analyze::AnalysisReport, issues::ExactRedundancyIssue};

pub fn check_exact_redundancy(report: &AnalysisReport) -> Vec<ExactRedundancyIssue> {
    let mut issues: Vec<ExactRedundancyIssue> = report
        .exact_redundancy
        .iter()
        .map(|(value, keys)| {
            let mut keys: Vec<String> = keys.iter().cloned().collect();
            keys.sort();
            ExactRedundancyIssue {
                value: value.clone(),
                keys,
            }
        })
        .collect();

    issues.sort_by(|a, b| a.value.cmp(&b.value));
    issues
}
