//! Catalog error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::HookCategory;

/// Errors raised while loading or normalizing a hook catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or a record is missing a required field
    #[error("Failed to parse hook catalog: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read a catalog file from disk
    #[error("Failed to read hook catalog from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record names a category outside the fixed enumeration
    #[error(
        "Hook '{id}' has unknown category '{value}'.\n\nValid categories: {valid}",
        valid = HookCategory::name_list()
    )]
    UnknownCategory { id: String, value: String },

    /// Two records share the same id
    #[error("Duplicate hook id '{0}' in catalog")]
    DuplicateId(String),

    /// A `lastUpdated` value could not be parsed (strict mode only)
    #[error("Hook '{id}' has an invalid lastUpdated value '{value}' (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidDate { id: String, value: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
