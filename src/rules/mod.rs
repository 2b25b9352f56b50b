//! Rule implementations for rosetta.
//!
//! Pure functions that turn analysis results into reportable issues.
//! Each function takes only the inputs it needs and returns issues sorted
//! for deterministic output.
//!
//! ## Module Structure
//!
//! - `conflicts`: One key, several values
//! - `exact_redundancy`: One value, several keys
//! - `pattern_redundancy`: Values equal up to placeholder names
//! - `diagnostics`: Malformed calls and unreadable files

pub mod conflicts;
pub mod diagnostics;
pub mod exact_redundancy;
pub mod pattern_redundancy;

use crate::{
    core::{analyze::AnalysisReport, corpus::Corpus},
    issues::Issue,
};

pub use conflicts::check_key_conflicts;
pub use diagnostics::check_diagnostics;
pub use exact_redundancy::check_exact_redundancy;
pub use pattern_redundancy::check_pattern_redundancy;

/// Run every rule over an analyzed corpus.
pub fn collect_issues(corpus: &Corpus, report: &AnalysisReport) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();

    issues.extend(
        check_key_conflicts(report)
            .into_iter()
            .map(Issue::KeyConflict),
    );
    issues.extend(
        check_exact_redundancy(report)
            .into_iter()
            .map(Issue::ExactRedundancy),
    );
    issues.extend(
        check_pattern_redundancy(report, &corpus.entries)
            .into_iter()
            .map(Issue::PatternRedundancy),
    );
    issues.extend(check_diagnostics(&corpus.diagnostics));

    issues.sort();
    issues
}
