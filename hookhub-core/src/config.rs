//! HookHub configuration (config.yaml)
//!
//! Looked up in the platform config directory unless an explicit path is
//! given. A missing file is not an error; defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{HookCatalog, NormalizeOptions};

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default number of hook types shown before "+N more"
pub const DEFAULT_MAX_HOOK_TYPES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookHubConfig {
    /// Catalog file to load; the built-in dataset is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Reject records with unparseable `lastUpdated` values
    pub strict_dates: bool,

    /// Hook types shown per hook before truncating
    pub max_hook_types: usize,
}

impl Default for HookHubConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            strict_dates: false,
            max_hook_types: DEFAULT_MAX_HOOK_TYPES,
        }
    }
}

impl HookHubConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path, falling back to defaults if absent
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Invalid config YAML")
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "hookhub", "hookhub")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("hookhub")))
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            strict_dates: self.strict_dates,
        }
    }

    /// Load the configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<HookCatalog> {
        let options = self.normalize_options();
        match &self.catalog_path {
            Some(path) => HookCatalog::from_file(path, options)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => HookCatalog::builtin(options).context("Failed to load built-in catalog"),
        }
    }
}
