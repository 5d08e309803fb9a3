//! Raw catalog records and their normalization into [`Hook`]s
//!
//! The stored catalog is plain JSON: either `{ "hooks": [...] }` or a bare
//! array of records. Dates arrive as strings and categories as names; both are
//! resolved here so the rest of the crate only ever sees typed values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Hook, HookCategory};
use crate::error::{CatalogError, Result};

/// A hook record exactly as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHook {
    pub id: String,
    pub name: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub hook_types: Vec<String>,
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,

    pub featured: bool,
    pub github_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// The top-level stored document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCatalog {
    pub hooks: Vec<RawHook>,
}

impl RawCatalog {
    /// Parse a stored catalog document
    ///
    /// Accepts `{ "hooks": [...] }` or a bare array of records.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut value: serde_json::Value =
            serde_json::from_str(content).map_err(|source| CatalogError::Parse { source })?;

        if let Some(hooks) = value.get_mut("hooks") {
            value = hooks.take();
        }

        let hooks =
            serde_json::from_value(value).map_err(|source| CatalogError::Parse { source })?;
        Ok(Self { hooks })
    }

    pub fn into_records(self) -> Vec<RawHook> {
        self.hooks
    }
}

/// Options controlling how lenient normalization is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Reject records whose `lastUpdated` cannot be parsed instead of
    /// treating the date as absent
    pub strict_dates: bool,
}

impl From<&Hook> for RawHook {
    fn from(hook: &Hook) -> Self {
        Self {
            id: hook.id.clone(),
            name: hook.name.clone(),
            description: hook.description.clone(),
            author: hook.author.clone(),
            category: hook.category.to_string(),
            hook_types: hook.hook_types.clone(),
            language: hook.language.clone(),
            stars: hook.stars,
            featured: hook.featured,
            github_url: hook.github_url.clone(),
            last_updated: hook.last_updated.map(|d| d.to_rfc3339()),
        }
    }
}

impl RawHook {
    /// Convert this record into a typed hook
    pub fn normalize(self, options: NormalizeOptions) -> Result<Hook> {
        let category: HookCategory = self.category.parse().map_err(|_| {
            CatalogError::UnknownCategory {
                id: self.id.clone(),
                value: self.category.clone(),
            }
        })?;

        let last_updated = match self.last_updated.as_deref().filter(|v| !v.is_empty()) {
            None => None,
            Some(value) => match parse_date(value) {
                Some(date) => Some(date),
                None if options.strict_dates => {
                    return Err(CatalogError::InvalidDate {
                        id: self.id,
                        value: value.to_string(),
                    });
                }
                None => {
                    warn!(hook = %self.id, value, "Ignoring unparseable lastUpdated");
                    None
                }
            },
        };

        Ok(Hook {
            id: self.id,
            name: self.name,
            description: self.description,
            author: self.author,
            category,
            hook_types: self.hook_types,
            language: self.language,
            stars: self.stars,
            featured: self.featured,
            github_url: self.github_url,
            last_updated,
        })
    }
}

/// Normalize a sequence of raw records, preserving order
///
/// Fails on the first record that cannot be represented.
pub fn normalize(records: Vec<RawHook>, options: NormalizeOptions) -> Result<Vec<Hook>> {
    debug!(count = records.len(), ?options, "Normalizing hook records");
    records
        .into_iter()
        .map(|record| record.normalize(options))
        .collect()
}

/// Parse a stored date: RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
