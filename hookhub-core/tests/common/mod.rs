//! Test helper functions for integration tests
//!
//! Shared across the integration test files using the tests/common/ pattern.

use hookhub_core::catalog::{Hook, HookCatalog, HookCategory, NormalizeOptions};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// The two-hook catalog used throughout the query tests
#[allow(dead_code)]
pub fn audit_and_runner_catalog() -> HookCatalog {
    let json = r#"
{
  "hooks": [
    {
      "id": "audit-logger",
      "name": "Audit Logger",
      "description": "Keeps a record of commands",
      "author": "alice",
      "category": "Security",
      "hookTypes": ["pre-commit"],
      "language": "Python",
      "featured": true,
      "githubUrl": "https://github.com/alice/audit-logger"
    },
    {
      "id": "test-runner",
      "name": "Test Runner",
      "description": "Executes the suite",
      "author": "bob",
      "category": "Testing",
      "hookTypes": ["post-run"],
      "language": "Go",
      "featured": false,
      "githubUrl": "https://github.com/bob/test-runner"
    }
  ]
}
"#;
    HookCatalog::from_json(json, NormalizeOptions::default()).expect("fixture catalog parses")
}

#[allow(dead_code)]
pub fn builtin_catalog() -> HookCatalog {
    HookCatalog::builtin(NormalizeOptions { strict_dates: true }).expect("built-in catalog parses")
}

#[allow(dead_code)]
pub fn make_hook(id: &str, category: HookCategory, hook_types: &[&str]) -> Hook {
    Hook {
        id: id.to_string(),
        name: id.to_string(),
        description: format!("{id} description"),
        author: "fixture".to_string(),
        category,
        hook_types: hook_types.iter().map(|t| t.to_string()).collect(),
        language: "Rust".to_string(),
        stars: None,
        featured: false,
        github_url: format!("https://github.com/fixture/{id}"),
        last_updated: None,
    }
}

#[allow(dead_code)]
pub fn names<'a>(hooks: &[&'a Hook]) -> Vec<&'a str> {
    hooks.iter().map(|h| h.name.as_str()).collect()
}
