use std::collections::BTreeSet;

use crate::store::Catalog;

/// Sentinel language value meaning "no language filter".
pub const ALL_LANGUAGES: &str = "All";

/// Distinct movie names whose language equals `language`, or every distinct
/// name when `language` is the `"All"` sentinel. Sorted for a deterministic
/// selection surface; an unknown language simply yields an empty list.
pub fn filter_by_language(catalog: &Catalog, language: &str) -> Vec<String> {
    let names: BTreeSet<&str> = catalog
        .movies()
        .iter()
        .filter(|m| language == ALL_LANGUAGES || m.language == language)
        .map(|m| m.name.as_str())
        .collect();
    names.into_iter().map(String::from).collect()
}
