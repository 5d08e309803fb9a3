//! HookHub catalog commands
//!
//! Search, list, and inspect hooks from the loaded catalog.

use anyhow::{Context, Result};
use clap::Subcommand;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use hookhub_core::catalog::{Hook, HookCatalog, HookCategory, HookQuery};
use hookhub_core::config::HookHubConfig;

use crate::display::{format_hook_types, format_last_updated, format_stars, truncate};

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Search hooks by text and category
    Search {
        /// Search query (matches name, description, author, hook types)
        query: Option<String>,

        /// Restrict to a category (repeatable)
        #[clap(long = "category", short = 'c')]
        categories: Vec<HookCategory>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List all hooks, optionally restricted to one category
    List {
        /// Category name
        #[clap(long, short = 'c')]
        category: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List featured hooks
    Featured {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show detailed information about a hook
    Show {
        /// Hook id
        id: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show every category with its hook count
    Categories {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

impl CatalogCommand {
    pub fn execute(self, catalog: &HookCatalog, config: &HookHubConfig) -> Result<()> {
        let output = match self {
            CatalogCommand::Search {
                query,
                categories,
                json,
            } => {
                let query = HookQuery::new()
                    .with_search(query.unwrap_or_default())
                    .with_categories(categories);
                execute_search(catalog, &query, json, config.max_hook_types)?
            }
            CatalogCommand::List { category, json } => {
                execute_list(catalog, category.as_deref(), json, config.max_hook_types)?
            }
            CatalogCommand::Featured { json } => {
                render_hooks(&catalog.featured_hooks(), json, config.max_hook_types)?
            }
            CatalogCommand::Show { id, json } => execute_show(catalog, &id, json)?,
            CatalogCommand::Categories { json } => execute_categories(catalog, json)?,
        };

        println!("{output}");
        Ok(())
    }
}

/// Table row for hook listings
#[derive(Tabled)]
struct HookRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Stars")]
    stars: String,
    #[tabled(rename = "Types")]
    hook_types: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn render_hooks(hooks: &[&Hook], json_output: bool, max_hook_types: usize) -> Result<String> {
    if json_output {
        return serde_json::to_string_pretty(hooks).context("Failed to serialize hooks");
    }

    if hooks.is_empty() {
        return Ok("No hooks found matching your criteria.".to_string());
    }

    let table_rows: Vec<HookRow> = hooks
        .iter()
        .map(|hook| {
            let name = if hook.featured {
                format!("{} *", hook.name)
            } else {
                hook.name.clone()
            };

            HookRow {
                id: hook.id.clone(),
                name,
                category: hook.category.to_string(),
                author: hook.author.clone(),
                language: hook.language.clone(),
                stars: format_stars(hook.stars),
                hook_types: format_hook_types(&hook.hook_types, max_hook_types),
                description: truncate(hook.short_description(), 50),
            }
        })
        .collect();

    let table = Table::new(&table_rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    Ok(table)
}

fn execute_search(
    catalog: &HookCatalog,
    query: &HookQuery,
    json_output: bool,
    max_hook_types: usize,
) -> Result<String> {
    let results = catalog.query(query);

    tracing::debug!(
        search = %query.search_text,
        categories = ?query.selected_categories,
        matched = results.len(),
        "Search complete"
    );

    let body = render_hooks(&results, json_output, max_hook_types)?;
    if json_output {
        return Ok(body);
    }

    Ok(format!(
        "Showing {} of {} hooks\n\n{}",
        results.len(),
        catalog.len(),
        body
    ))
}

fn execute_list(
    catalog: &HookCatalog,
    category: Option<&str>,
    json_output: bool,
    max_hook_types: usize,
) -> Result<String> {
    let hooks: Vec<&Hook> = match category {
        None => catalog.all_hooks().iter().collect(),
        Some(name) => {
            // Accept any casing for known categories; unknown names simply match nothing
            let canonical = name
                .parse::<HookCategory>()
                .map(|c| c.to_string())
                .unwrap_or_else(|_| {
                    tracing::warn!("'{}' is not a known category", name);
                    name.to_string()
                });
            catalog.hooks_by_category(&canonical)
        }
    };

    render_hooks(&hooks, json_output, max_hook_types)
}

fn execute_show(catalog: &HookCatalog, id: &str, json_output: bool) -> Result<String> {
    let hook = catalog
        .get(id)
        .with_context(|| format!("Hook '{id}' not found in catalog"))?;

    if json_output {
        return serde_json::to_string_pretty(hook).context("Failed to serialize hook");
    }

    let mut lines = vec![
        format!("Hook:      {}", hook.name),
        format!("Id:        {}", hook.id),
        format!("Category:  {}", hook.category),
        format!("Author:    {}", hook.author),
        format!("Language:  {}", hook.language),
    ];

    let stars = format_stars(hook.stars);
    if !stars.is_empty() {
        lines.push(format!("Stars:     {stars}"));
    }
    lines.push(format!("Updated:   {}", format_last_updated(hook)));

    if hook.featured {
        lines.push(String::new());
        lines.push("Featured".to_string());
    }

    lines.push(String::new());
    lines.push("Description:".to_string());
    for line in hook.description.lines() {
        lines.push(format!("  {line}"));
    }

    if !hook.hook_types.is_empty() {
        lines.push(String::new());
        lines.push("Hook types:".to_string());
        for hook_type in &hook.hook_types {
            lines.push(format!("  {hook_type}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("View on GitHub: {}", hook.github_url));

    Ok(lines.join("\n"))
}

/// Table row for category counts
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Hooks")]
    count: usize,
}

fn execute_categories(catalog: &HookCatalog, json_output: bool) -> Result<String> {
    let counts = catalog.category_counts();

    if json_output {
        let json: Vec<serde_json::Value> = counts
            .iter()
            .map(|(category, count)| {
                serde_json::json!({
                    "category": category,
                    "count": count,
                })
            })
            .collect();
        return serde_json::to_string_pretty(&json).context("Failed to serialize categories");
    }

    let rows: Vec<CategoryRow> = counts
        .into_iter()
        .map(|(category, count)| CategoryRow {
            category: category.to_string(),
            count,
        })
        .collect();

    Ok(Table::new(&rows).with(Style::rounded()).to_string())
}
