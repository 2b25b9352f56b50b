//! Conflict and redundancy analysis over the whole corpus.
//!
//! Three independent groupings are built in one pass:
//!
//! - key → distinct values (conflicts)
//! - literal value → distinct keys (exact redundancy)
//! - normalized value → distinct keys (pattern redundancy)
//!
//! Only groups with more than one member are kept. All results are sets,
//! so the order of entries in the corpus never changes the outcome.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::core::{data::TranslationEntry, normalize::normalize};

/// Mapping from a grouping key to the distinct members observed under it.
pub type GroupMap = HashMap<String, HashSet<String>>;

/// Result of [`analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Key → its distinct values, for keys seen with two or more values.
    pub conflicts: GroupMap,
    /// Literal value → distinct keys that produced it (two or more keys).
    pub exact_redundancy: GroupMap,
    /// Normalized pattern → distinct keys whose value normalizes to it.
    ///
    /// Every exact-redundancy group also shows up here, under the
    /// normalized form of its value.
    pub pattern_redundancy: GroupMap,
}

impl AnalysisReport {
    /// Pattern groups that are redundant only because of placeholders.
    ///
    /// A pattern that is itself a literal key of `exact_redundancy` was
    /// already reported there and is skipped.
    pub fn dynamic_pattern_redundancy(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.pattern_redundancy
            .iter()
            .filter(|(pattern, _)| !self.exact_redundancy.contains_key(*pattern))
    }

    /// Deterministically ordered copy for printing and serialization.
    pub fn sorted(&self) -> SortedAnalysisReport {
        SortedAnalysisReport {
            conflicts: sorted_groups(&self.conflicts),
            exact_redundancy: sorted_groups(&self.exact_redundancy),
            pattern_redundancy: sorted_groups(&self.pattern_redundancy),
        }
    }
}

/// [`AnalysisReport`] with ordered maps and sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedAnalysisReport {
    pub conflicts: BTreeMap<String, BTreeSet<String>>,
    pub exact_redundancy: BTreeMap<String, BTreeSet<String>>,
    pub pattern_redundancy: BTreeMap<String, BTreeSet<String>>,
}

fn sorted_groups(groups: &GroupMap) -> BTreeMap<String, BTreeSet<String>> {
    groups
        .iter()
        .map(|(k, members)| (k.clone(), members.iter().cloned().collect()))
        .collect()
}

/// Classify the corpus into conflicts, exact redundancy and pattern redundancy.
///
/// Must run on the full, ungrouped corpus: prefix grouping drops duplicate
/// keys and would hide conflicts.
pub fn analyze<'a, I>(entries: I) -> AnalysisReport
where
    I: IntoIterator<Item = &'a TranslationEntry>,
{
    let mut key_to_values = GroupMap::new();
    let mut value_to_keys = GroupMap::new();
    let mut pattern_to_keys = GroupMap::new();

    for entry in entries {
        key_to_values
            .entry(entry.key.clone())
            .or_default()
            .insert(entry.value.clone());
        value_to_keys
            .entry(entry.value.clone())
            .or_default()
            .insert(entry.key.clone());
        pattern_to_keys
            .entry(normalize(&entry.value).into_owned())
            .or_default()
            .insert(entry.key.clone());
    }

    AnalysisReport {
        conflicts: retain_multiple(key_to_values),
        exact_redundancy: retain_multiple(value_to_keys),
        pattern_redundancy: retain_multiple(pattern_to_keys),
    }
}

fn retain_multiple(mut groups: GroupMap) -> GroupMap {
    groups.retain(|_, members| members.len() > 1);
    groups
}
