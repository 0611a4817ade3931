//! Property-based tests for catalog filtering.
//!
//! 1. Filter results are a subsequence of the catalog (order preserved).
//! 2. Filtering ignores case.
//! 3. Every result matches on name or category; every non-result matches neither.

use pplay_catalog::{Catalog, Pattern};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::builtin().expect("embedded catalog parses")
}

fn ids<'a>(patterns: impl Iterator<Item = &'a Pattern>) -> Vec<&'a str> {
    patterns.map(|p| p.id.as_str()).collect()
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,4}",
        Just("Behav".to_string()),
        Just("ORY".to_string()),
        Just("method".to_string()),
    ]
}

proptest! {
    #[test]
    fn results_preserve_catalog_order(q in query()) {
        let catalog = catalog();
        let all = ids(catalog.iter());
        let hits = ids(catalog.filter(&q));
        let mut cursor = all.iter();
        for hit in &hits {
            prop_assert!(cursor.any(|id| id == hit), "{} out of order", hit);
        }
    }

    #[test]
    fn case_is_ignored(q in query()) {
        let catalog = catalog();
        prop_assert_eq!(
            ids(catalog.filter(&q.to_uppercase())),
            ids(catalog.filter(&q.to_lowercase()))
        );
    }

    #[test]
    fn results_are_exactly_the_matches(q in query()) {
        let catalog = catalog();
        let needle = q.trim().to_lowercase();
        let hits = ids(catalog.filter(&q));
        for pattern in &catalog {
            let matches = needle.is_empty()
                || pattern.name.to_lowercase().contains(&needle)
                || pattern.category.to_string().to_lowercase().contains(&needle);
            prop_assert_eq!(hits.contains(&pattern.id.as_str()), matches);
        }
    }
}

#[test]
fn fallback_demo_types_are_the_six_unmapped_patterns() {
    let catalog = catalog();
    let generic: Vec<&str> = catalog
        .iter()
        .map(Pattern::demo_type)
        .filter(|t| {
            matches!(
                *t,
                "template-barista"
                    | "iterator-playlist"
                    | "facade-theater"
                    | "proxy-vault"
                    | "composite-files"
                    | "prototype-clone"
            )
        })
        .collect();
    assert_eq!(generic.len(), 6);
}
