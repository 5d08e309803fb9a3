//! HookHub core library exports

pub mod catalog;
pub mod config;
pub mod error;

pub use error::{CatalogError, Result};
