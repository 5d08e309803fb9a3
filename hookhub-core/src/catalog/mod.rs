//! HookHub Catalog - hook discovery by text and category
//!
//! This module holds the catalog query engine: the typed hook model,
//! normalization of stored records into that model, and the combined
//! search + category filter.
//!
//! # Overview
//!
//! The catalog system allows callers to:
//! - Load a stored catalog (JSON) or the built-in dataset
//! - List all hooks, hooks of one category, or featured hooks
//! - Narrow the catalog by free-text search and a set of categories
//!
//! # Architecture
//!
//! ```text
//! hooks.json (stored records)
//!     │
//!     ▼
//! RawCatalog / RawHook  ← serde shapes of the stored data
//!     │  normalize()
//!     ▼
//! HookCatalog           ← owns Vec<Hook>, immutable
//!     │  query(&HookQuery)
//!     ▼
//! Vec<&Hook>            ← borrowed, source order preserved
//! ```

mod hook;
mod query;
mod record;
mod store;

pub use hook::{Hook, HookCategory, UnknownCategory};
pub use query::{query, HookQuery};
pub use record::{normalize, parse_date, NormalizeOptions, RawCatalog, RawHook};
pub use store::HookCatalog;
