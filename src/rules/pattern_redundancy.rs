//! Pattern redundancy detection rule.
//!
//! Reports values that only differ in placeholder names, e.g.
//! `Battery: {v}%` and `Battery: {level}%`. Groups whose pattern is itself
//! an exact-redundancy value were already reported by that rule and are
//! skipped here.

use std::collections::{BTreeSet, HashMap};

use crate::{
    core::{analyze::AnalysisReport, data::TranslationEntry, normalize::normalize},
    issues::PatternRedundancyIssue,
};

/// Check for purely dynamic pattern redundancy.
///
/// # Arguments
/// * `report` - Analysis of the full corpus
/// * `entries` - The same corpus, used to recover the original values
///   behind each pattern
pub fn check_pattern_redundancy(
    report: &AnalysisReport,
    entries: &[TranslationEntry],
) -> Vec<PatternRedundancyIssue> {
    let dynamic: HashMap<&String, _> = report.dynamic_pattern_redundancy().collect();
    if dynamic.is_empty() {
        return Vec::new();
    }

    let mut originals: HashMap<String, BTreeSet<&str>> = HashMap::new();
    for entry in entries {
        let pattern = normalize(&entry.value).into_owned();
        if let Some(keys) = dynamic.get(&pattern)
            && keys.contains(&entry.key)
        {
            originals
                .entry(pattern)
                .or_default()
                .insert(entry.value.as_str());
        }
    }

    let mut issues: Vec<PatternRedundancyIssue> = dynamic
        .iter()
        .map(|(pattern, keys)| {
            let mut keys: Vec<String> = keys.iter().cloned().collect();
            keys.sort();
            let values = originals
                .get(pattern.as_str())
                .map(|values| values.iter().map(|v| v.to_string()).collect())
                .unwrap_or_default();
            PatternRedundancyIssue {
                pattern: pattern.to_string(),
                keys,
                values,
            }
        })
        .collect();

    issues.sort_by(|a, b| a.pattern.cmp(&b.pattern));
    issues
}
