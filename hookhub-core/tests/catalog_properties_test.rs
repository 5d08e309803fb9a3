//! Properties that must hold for any query over the built-in catalog

mod common;

use common::{builtin_catalog, init_test_logging};
use hookhub_core::catalog::{
    query, Hook, HookCatalog, HookCategory, HookQuery, NormalizeOptions, RawHook,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

const SEARCHES: &[&str] = &[
    "", "a", "SECURITY", "stop", "pre", "observa", "notif", " ", "zzz-nothing",
];

/// Every result list must be a subsequence of the input, in input order
fn is_subsequence(results: &[&Hook], all: &[Hook]) -> bool {
    let mut iter = all.iter();
    results
        .iter()
        .all(|r| iter.any(|candidate| std::ptr::eq(*r, candidate)))
}

fn category_selections() -> Vec<BTreeSet<HookCategory>> {
    vec![
        BTreeSet::new(),
        [HookCategory::Security].into_iter().collect(),
        [HookCategory::Monitoring, HookCategory::Utility]
            .into_iter()
            .collect(),
        HookCategory::ALL.into_iter().collect(),
    ]
}

#[test]
fn test_results_are_stable_subsequences() {
    init_test_logging();
    let catalog = builtin_catalog();

    for search in SEARCHES {
        for selected in category_selections() {
            let results = query(catalog.all_hooks(), search, &selected);
            assert!(
                is_subsequence(&results, catalog.all_hooks()),
                "order broken for search {search:?} and {selected:?}"
            );
        }
    }
}

#[test]
fn test_vacuous_query_is_identity() {
    let catalog = builtin_catalog();

    let results = query(catalog.all_hooks(), "", &BTreeSet::new());
    let expected: Vec<&Hook> = catalog.all_hooks().iter().collect();
    assert_eq!(results, expected);
    assert!(HookQuery::new().is_vacuous());
}

#[test]
fn test_selecting_every_category_is_identity() {
    let catalog = builtin_catalog();

    let q = HookQuery::new().with_categories(HookCategory::ALL);
    assert_eq!(catalog.query(&q).len(), catalog.len());
}

#[test]
fn test_search_only_narrows() {
    let catalog = builtin_catalog();
    let everything: Vec<&str> = catalog.all_hooks().iter().map(|h| h.id.as_str()).collect();

    for search in SEARCHES {
        let results = query(catalog.all_hooks(), search, &BTreeSet::new());
        assert!(results.len() <= everything.len());
        for hook in results {
            assert!(everything.contains(&hook.id.as_str()));
        }
    }
}

#[test]
fn test_hooks_by_category_subset() {
    let catalog = builtin_catalog();

    for category in HookCategory::ALL {
        let subset = catalog.hooks_by_category(category.as_str());
        assert!(is_subsequence(&subset, catalog.all_hooks()));
        assert!(subset.iter().all(|h| h.category == category));
        assert_eq!(subset, catalog.hooks_in(category));
    }
}

#[test]
fn test_category_counts_sum_to_total() {
    let catalog = builtin_catalog();

    let total: usize = catalog.category_counts().iter().map(|(_, n)| n).sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn test_featured_subset() {
    let catalog = builtin_catalog();

    let featured = catalog.featured_hooks();
    assert!(is_subsequence(&featured, catalog.all_hooks()));
    assert!(featured.iter().all(|h| h.featured));
    assert_eq!(
        featured.len(),
        catalog.all_hooks().iter().filter(|h| h.featured).count()
    );
}

#[test]
fn test_reserialized_catalog_round_trips() {
    let catalog = builtin_catalog();

    let json = serde_json::to_string(catalog.all_hooks()).unwrap();
    let again = HookCatalog::from_json(&json, NormalizeOptions { strict_dates: true }).unwrap();
    assert_eq!(again.all_hooks(), catalog.all_hooks());

    let raw: Vec<RawHook> = catalog.all_hooks().iter().map(RawHook::from).collect();
    let again = HookCatalog::from_records(raw, NormalizeOptions::default()).unwrap();
    assert_eq!(again.all_hooks(), catalog.all_hooks());
}

#[test]
fn test_lookup_every_id() {
    let catalog = builtin_catalog();

    for hook in catalog.all_hooks() {
        assert_eq!(catalog.get(&hook.id), Some(hook));
    }
}
