// Invariants of the bundled wish catalog served to the page as `wishes.json`.
// Native-friendly: no wasm/browser APIs.

use std::collections::HashSet;

use birthday_wishes::{Catalog, WishSource};

const BUNDLED: &str = include_str!("../assets/wishes.json");

#[test]
fn bundled_catalog_parses_with_default() {
    let catalog = Catalog::from_json(BUNDLED).expect("bundled catalog should parse");
    assert!(catalog.has_default());
}

#[test]
fn bundled_ranges_do_not_overlap() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    let mut ranges: Vec<_> = catalog.ranges().collect();
    ranges.sort();
    for pair in ranges.windows(2) {
        assert!(
            pair[0].max < pair[1].min,
            "ranges {:?} and {:?} overlap",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn every_supported_age_resolves() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    for age in 1..=120 {
        let resolved = catalog.resolve(age).unwrap();
        assert!(!resolved.is_empty(), "age {age} resolved to an empty list");
        assert_eq!(resolved.age(), age);
    }
}

#[test]
fn envelope_age_has_its_own_wishes() {
    let catalog = Catalog::from_json(BUNDLED).unwrap();
    let resolved = catalog.resolve(24).unwrap();
    assert_eq!(resolved.source(), WishSource::Exact);
}

#[test]
fn bundled_wishes_are_non_blank_and_unique() {
    let raw: std::collections::BTreeMap<String, Vec<String>> =
        serde_json::from_str(BUNDLED).unwrap();
    let mut seen = HashSet::new();
    for (key, wishes) in &raw {
        for wish in wishes {
            assert!(!wish.trim().is_empty(), "blank wish under '{key}'");
            assert!(seen.insert(wish.as_str()), "duplicate wish '{wish}' under '{key}'");
        }
    }
}
