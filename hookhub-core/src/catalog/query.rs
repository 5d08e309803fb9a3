//! Text search and category filtering over hooks
//!
//! A hook passes a query when it matches the search text AND the category
//! selection. Either side is vacuous when empty. Results keep the input
//! order; nothing is scored or sorted.

use std::collections::BTreeSet;
use tracing::trace;

use super::{Hook, HookCategory};

/// The active filter: free-text search plus a set of selected categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookQuery {
    /// Matched as a case-insensitive substring. Not trimmed, so `" "` only
    /// matches hooks whose text contains a space.
    pub search_text: String,

    /// Empty means every category
    pub selected_categories: BTreeSet<HookCategory>,
}

impl HookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = HookCategory>) -> Self {
        self.selected_categories.extend(categories);
        self
    }

    /// Select the category if unselected, otherwise deselect it
    pub fn toggle_category(&mut self, category: HookCategory) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    /// True when the query lets every hook through
    pub fn is_vacuous(&self) -> bool {
        self.search_text.is_empty() && self.selected_categories.is_empty()
    }

    /// Check a single hook against the query
    pub fn matches(&self, hook: &Hook) -> bool {
        matches_search(hook, &self.search_text.to_lowercase())
            && matches_categories(hook, &self.selected_categories)
    }

    /// Filter `hooks`, preserving order
    pub fn apply<'a>(&self, hooks: &'a [Hook]) -> Vec<&'a Hook> {
        query(hooks, &self.search_text, &self.selected_categories)
    }
}

/// Filter `hooks` by search text and selected categories, preserving order
pub fn query<'a>(
    hooks: &'a [Hook],
    search_text: &str,
    selected_categories: &BTreeSet<HookCategory>,
) -> Vec<&'a Hook> {
    let needle = search_text.to_lowercase();

    let results: Vec<&Hook> = hooks
        .iter()
        .filter(|hook| {
            matches_search(hook, &needle) && matches_categories(hook, selected_categories)
        })
        .collect();

    trace!(
        search_text,
        categories = ?selected_categories,
        matched = results.len(),
        total = hooks.len(),
        "Hook query evaluated"
    );

    results
}

/// `needle` must already be lowercased
fn matches_search(hook: &Hook, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    hook.name.to_lowercase().contains(needle)
        || hook.description.to_lowercase().contains(needle)
        || hook.author.to_lowercase().contains(needle)
        || hook
            .hook_types
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

fn matches_categories(hook: &Hook, selected: &BTreeSet<HookCategory>) -> bool {
    selected.is_empty() || selected.contains(&hook.category)
}
