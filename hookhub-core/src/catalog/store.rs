//! The immutable in-memory hook catalog
//!
//! A [`HookCatalog`] owns the normalized hooks for its whole lifetime.
//! Every accessor borrows; nothing here mutates the collection after
//! construction.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::record::{normalize, NormalizeOptions, RawCatalog, RawHook};
use super::{Hook, HookCategory, HookQuery};
use crate::error::{CatalogError, Result};

/// The dataset shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("../../data/hooks.json");

/// An immutable, ordered collection of hooks
#[derive(Debug, Clone, Default)]
pub struct HookCatalog {
    hooks: Vec<Hook>,
}

impl HookCatalog {
    /// Build a catalog from already-normalized hooks
    ///
    /// Fails if two hooks share an id.
    pub fn new(hooks: Vec<Hook>) -> Result<Self> {
        if let Some(id) = first_duplicate_id(&hooks) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }

        debug!(count = hooks.len(), "Hook catalog constructed");
        Ok(Self { hooks })
    }

    /// Normalize raw records and build a catalog from them
    pub fn from_records(records: Vec<RawHook>, options: NormalizeOptions) -> Result<Self> {
        Self::new(normalize(records, options)?)
    }

    /// Parse a stored catalog document
    pub fn from_json(content: &str, options: NormalizeOptions) -> Result<Self> {
        let raw = RawCatalog::from_json(content)?;
        Self::from_records(raw.into_records(), options)
    }

    /// Load a stored catalog document from disk
    pub fn from_file(path: &Path, options: NormalizeOptions) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loading hook catalog from {}", path.display());
        Self::from_json(&content, options)
    }

    /// The dataset embedded in this crate
    pub fn builtin(options: NormalizeOptions) -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG, options)
    }

    /// All hooks, in source order
    pub fn all_hooks(&self) -> &[Hook] {
        &self.hooks
    }

    /// Hooks whose category is named `category`, in source order
    ///
    /// Returns an empty list when the name is not a known category.
    pub fn hooks_by_category(&self, category: &str) -> Vec<&Hook> {
        self.hooks
            .iter()
            .filter(|hook| hook.category.as_str() == category)
            .collect()
    }

    /// Hooks in the given category, in source order
    pub fn hooks_in(&self, category: HookCategory) -> Vec<&Hook> {
        self.hooks
            .iter()
            .filter(|hook| hook.category == category)
            .collect()
    }

    /// Hooks flagged as featured, in source order
    pub fn featured_hooks(&self) -> Vec<&Hook> {
        self.hooks.iter().filter(|hook| hook.featured).collect()
    }

    /// Look up a hook by id
    pub fn get(&self, id: &str) -> Option<&Hook> {
        self.hooks.iter().find(|hook| hook.id == id)
    }

    /// Number of hooks in every category, zero counts included
    pub fn category_counts(&self) -> Vec<(HookCategory, usize)> {
        HookCategory::ALL
            .iter()
            .map(|&category| {
                let count = self.hooks.iter().filter(|h| h.category == category).count();
                (category, count)
            })
            .collect()
    }

    /// Run a query over the whole catalog
    pub fn query(&self, query: &HookQuery) -> Vec<&Hook> {
        query.apply(&self.hooks)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

fn first_duplicate_id(hooks: &[Hook]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(hooks.len());
    hooks
        .iter()
        .map(|hook| hook.id.as_str())
        .find(|id| !seen.insert(*id))
}
