//! HookHub - browse and filter a catalog of hooks
//!
//! Main entry point: parses flags, sets up logging, loads the catalog,
//! and hands off to the catalog commands.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hookhub_core::catalog::HookCatalog;
use hookhub_core::config::HookHubConfig;

mod catalog_cli;
mod display;

use catalog_cli::CatalogCommand;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "hookhub",
    about = "Discover hooks: search and filter the HookHub catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: CatalogCommand,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Override configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Load hooks from this catalog file instead of the configured one
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Reject hooks whose lastUpdated value cannot be parsed
    #[clap(long, global = true)]
    strict_dates: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides
    fn resolve_config(&self) -> Result<HookHubConfig> {
        let mut config = match &self.config {
            Some(path) => HookHubConfig::load_from_path(path)?,
            None => HookHubConfig::load()?,
        };

        if let Some(catalog) = &self.catalog {
            config.catalog_path = Some(catalog.clone());
        }
        config.strict_dates |= self.strict_dates;

        Ok(config)
    }
}

/// Initialize tracing with CLI flags
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries table/JSON output only
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let config = cli.resolve_config()?;
    let catalog: HookCatalog = config.load_catalog()?;
    debug!(hooks = catalog.len(), "Catalog ready");

    cli.command.execute(&catalog, &config)
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use hookhub_core::catalog::HookCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_search_with_categories() {
        let cli = Cli::try_parse_from([
            "hookhub", "search", "audit", "-c", "security", "--category", "Testing", "--json",
        ])
        .unwrap();

        match cli.command {
            CatalogCommand::Search {
                query,
                categories,
                json,
            } => {
                assert_eq!(query.as_deref(), Some("audit"));
                assert_eq!(categories, vec![HookCategory::Security, HookCategory::Testing]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["hookhub", "search", "-c", "Deployment"]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unknown category 'Deployment'"));
    }

    #[test]
    fn test_search_without_query_is_allowed() {
        let cli = Cli::try_parse_from(["hookhub", "search"]).unwrap();
        assert!(matches!(
            cli.command,
            CatalogCommand::Search { query: None, .. }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hookhub",
            "featured",
            "--catalog",
            "/tmp/hooks.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/hooks.json")));
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "max_hook_types: 2\ncatalog_path: /from/config.json\n")
            .unwrap();

        let cli = Cli::try_parse_from([
            "hookhub",
            "--config",
            config_path.to_str().unwrap(),
            "--catalog",
            "/from/flag.json",
            "--strict-dates",
            "categories",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/from/flag.json")));
        assert_eq!(config.max_hook_types, 2);
        assert!(config.strict_dates);
    }
}
