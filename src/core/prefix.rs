//! Prefix grouping - the unit of preview and export.
//!
//! Keys are grouped by the text before their first `.`. Inside a group the
//! first value seen for a key wins and later ones are dropped, even when they
//! differ. Conflict detection runs on the raw corpus, not on these groups.

use std::collections::BTreeMap;

use crate::core::data::TranslationEntry;

/// Key → value within one prefix group.
pub type PrefixGroup = BTreeMap<String, String>;

/// Prefix → its group, ordered by prefix.
pub type PrefixGroups = BTreeMap<String, PrefixGroup>;

/// Partition entries by key prefix, keeping the first value per key.
///
/// "First" means first in iteration order, so callers that need stable
/// output must feed entries in a stable order.
pub fn group_by_prefix<'a, I>(entries: I) -> PrefixGroups
where
    I: IntoIterator<Item = &'a TranslationEntry>,
{
    let mut groups = PrefixGroups::new();

    for entry in entries {
        groups
            .entry(entry.prefix().to_string())
            .or_default()
            .entry(entry.key.clone())
            .or_insert_with(|| entry.value.clone());
    }

    groups
}

/// Number of distinct keys across all groups.
pub fn unique_key_count(groups: &PrefixGroups) -> usize {
    groups.values().map(|group| group.len()).sum()
}
