//! The typed hook record and its category enumeration

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a hook can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HookCategory {
    Monitoring,
    Security,
    Workflow,
    Testing,
    Integration,
    Utility,
    Learning,
    Team,
}

impl HookCategory {
    /// Every category, in display order
    pub const ALL: [HookCategory; 8] = [
        HookCategory::Monitoring,
        HookCategory::Security,
        HookCategory::Workflow,
        HookCategory::Testing,
        HookCategory::Integration,
        HookCategory::Utility,
        HookCategory::Learning,
        HookCategory::Team,
    ];

    /// The name used in the stored catalog and in output
    pub fn as_str(&self) -> &'static str {
        match self {
            HookCategory::Monitoring => "Monitoring",
            HookCategory::Security => "Security",
            HookCategory::Workflow => "Workflow",
            HookCategory::Testing => "Testing",
            HookCategory::Integration => "Integration",
            HookCategory::Utility => "Utility",
            HookCategory::Learning => "Learning",
            HookCategory::Team => "Team",
        }
    }

    /// Every category name, comma separated
    pub fn name_list() -> String {
        let names: Vec<&str> = HookCategory::ALL.iter().map(|c| c.as_str()).collect();
        names.join(", ")
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'. Valid categories: {valid}", valid = HookCategory::name_list())]
pub struct UnknownCategory(pub String);

impl FromStr for HookCategory {
    type Err = UnknownCategory;

    /// Case-insensitive, so `security` and `Security` both parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A catalog hook
///
/// Built by the normalizer from a [`RawHook`](super::RawHook); never mutated
/// once it is part of a [`HookCatalog`](super::HookCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    /// Unique, stable identifier
    pub id: String,

    pub name: String,

    pub description: String,

    pub author: String,

    pub category: HookCategory,

    /// Hook type tags such as `PreToolUse` or `pre-commit`
    pub hook_types: Vec<String>,

    /// Implementation language label (display only)
    pub language: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,

    pub featured: bool,

    /// Source repository URL (not validated)
    pub github_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Hook {
    /// Truncate description to first line
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}
