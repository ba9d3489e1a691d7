//! Wish catalog: age / age-range keyed lists of birthday messages.
//!
//! The catalog document is a JSON object mapping string keys to arrays of
//! strings:
//!
//! ```json
//! { "5": ["..."], "1-10": ["..."], "default": ["..."] }
//! ```
//!
//! Numeric keys are exact ages, `min-max` keys are inclusive ranges and
//! `default` catches everything else. Resolution order is exact age, then the
//! narrowest matching range (lower `min` on equal width), then `default`.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{WishError, WishResult};
use crate::logging::log_warn;

pub const DEFAULT_KEY: &str = "default";

// --- Keys -------------------------------------------------------------------------

/// Inclusive age range parsed from a `"min-max"` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }

    /// Number of ages covered minus one.
    pub fn width(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKey {
    Exact(u32),
    Range(AgeRange),
    Default,
}

impl CatalogKey {
    /// Classifies a document key. `Ok(None)` marks keys that are neither an age,
    /// a numeric range nor `default`; only inverted ranges are errors.
    fn classify(raw: &str) -> WishResult<Option<Self>> {
        let key = raw.trim();
        if key == DEFAULT_KEY {
            return Ok(Some(CatalogKey::Default));
        }
        if let Some((lo, hi)) = key.split_once('-') {
            let (Ok(min), Ok(max)) = (lo.trim().parse::<u32>(), hi.trim().parse::<u32>()) else {
                return Ok(None);
            };
            if min > max {
                return Err(WishError::Catalog(format!(
                    "range key '{raw}' has min greater than max"
                )));
            }
            return Ok(Some(CatalogKey::Range(AgeRange { min, max })));
        }
        Ok(key.parse::<u32>().ok().map(CatalogKey::Exact))
    }
}

impl FromStr for CatalogKey {
    type Err = WishError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::classify(raw)?
            .ok_or_else(|| WishError::Catalog(format!("unrecognised key '{raw}'")))
    }
}

// --- Resolution result ----------------------------------------------------------

/// Which catalog entry produced a [`ResolvedWishList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WishSource {
    Exact,
    Range(AgeRange),
    Default,
}

/// Non-empty list of wishes selected for one requested age.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWishList {
    age: u32,
    source: WishSource,
    wishes: Vec<String>,
}

impl ResolvedWishList {
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn source(&self) -> WishSource {
        self.source
    }

    pub fn wishes(&self) -> &[String] {
        &self.wishes
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    /// Always false for lists produced by [`Catalog::resolve`].
    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.wishes.get(index).map(String::as_str)
    }

    /// Message for a slot index, wrapping when the pool is larger than the list.
    pub fn wrapped(&self, index: usize) -> &str {
        &self.wishes[index % self.wishes.len()]
    }
}

// --- Catalog --------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    exact: BTreeMap<u32, Vec<String>>,
    ranges: Vec<(AgeRange, Vec<String>)>,
    default: Option<Vec<String>>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn from_json(text: &str) -> WishResult<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(text).map_err(|e| WishError::Catalog(e.to_string()))?;
        Self::from_entries(raw)
    }

    /// Builds a catalog from `(key, wishes)` pairs. Unrecognised keys and empty
    /// non-default lists are skipped; an empty `default` or an inverted range
    /// makes the catalog malformed.
    pub fn from_entries<K, I>(entries: I) -> WishResult<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Vec<String>)>,
    {
        let mut catalog = Catalog::default();
        for (key, wishes) in entries {
            let key = key.as_ref();
            let Some(parsed) = CatalogKey::classify(key)? else {
                log_warn!("ignoring unrecognised catalog key '{key}'");
                continue;
            };
            if wishes.is_empty() {
                if parsed == CatalogKey::Default {
                    return Err(WishError::Catalog("default list has no wishes".into()));
                }
                log_warn!("ignoring catalog key '{key}' with no wishes");
                continue;
            }
            match parsed {
                CatalogKey::Exact(age) => {
                    if catalog.exact.insert(age, wishes).is_some() {
                        return Err(WishError::Catalog(format!("duplicate age key '{key}'")));
                    }
                }
                CatalogKey::Range(range) => {
                    if catalog.ranges.iter().any(|(r, _)| *r == range) {
                        return Err(WishError::Catalog(format!("duplicate range key '{key}'")));
                    }
                    catalog.ranges.push((range, wishes));
                }
                CatalogKey::Default => catalog.default = Some(wishes),
            }
        }
        Ok(catalog)
    }

    /// Built-in catalog used when the real one cannot be loaded: a default list
    /// of `count` placeholder wishes (at least one).
    pub fn fallback(count: usize) -> Self {
        let wishes = (1..=count.max(1))
            .map(|n| format!("Wish #{n}: may this year bring you joy, laughter and cake!"))
            .collect();
        Catalog {
            default: Some(wishes),
            ..Catalog::default()
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn ranges(&self) -> impl Iterator<Item = AgeRange> + '_ {
        self.ranges.iter().map(|(r, _)| *r)
    }

    /// Number of keys in the catalog.
    pub fn len(&self) -> usize {
        self.exact.len() + self.ranges.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves `age` to its wish list: exact key, then narrowest matching
    /// range, then `default`.
    pub fn resolve(&self, age: u32) -> WishResult<ResolvedWishList> {
        let resolved = |source, wishes: &Vec<String>| ResolvedWishList {
            age,
            source,
            wishes: wishes.clone(),
        };

        if let Some(wishes) = self.exact.get(&age) {
            return Ok(resolved(WishSource::Exact, wishes));
        }

        let narrowest = self
            .ranges
            .iter()
            .filter(|(range, _)| range.contains(age))
            .min_by_key(|(range, _)| (range.width(), range.min));
        if let Some((range, wishes)) = narrowest {
            return Ok(resolved(WishSource::Range(*range), wishes));
        }

        match &self.default {
            Some(wishes) => Ok(resolved(WishSource::Default, wishes)),
            None => {
                log_warn!("no wishes for age {age} and no default list");
                Err(WishError::NotFound { age })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_key_forms() {
        assert_eq!("24".parse::<CatalogKey>(), Ok(CatalogKey::Exact(24)));
        assert_eq!(
            " 13-19 ".parse::<CatalogKey>(),
            Ok(CatalogKey::Range(AgeRange { min: 13, max: 19 }))
        );
        assert_eq!("default".parse::<CatalogKey>(), Ok(CatalogKey::Default));
        assert_eq!(
            "7-7".parse::<CatalogKey>(),
            Ok(CatalogKey::Range(AgeRange { min: 7, max: 7 }))
        );
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!("10-1".parse::<CatalogKey>(), Err(WishError::Catalog(_))));
        assert!(matches!("a-b".parse::<CatalogKey>(), Err(WishError::Catalog(_))));
        assert!(matches!("teen".parse::<CatalogKey>(), Err(WishError::Catalog(_))));
        assert!(matches!("-5".parse::<CatalogKey>(), Err(WishError::Catalog(_))));
    }

    #[test]
    fn range_contains_is_inclusive() {
        let r = AgeRange { min: 20, max: 29 };
        assert!(r.contains(20));
        assert!(r.contains(29));
        assert!(!r.contains(19));
        assert!(!r.contains(30));
        assert_eq!(r.width(), 9);
    }

    #[test]
    fn narrowest_range_wins_regardless_of_order() {
        let wide_first = Catalog::from_entries(vec![
            ("1-100", list(&["wide"])),
            ("20-29", list(&["narrow"])),
        ])
        .unwrap();
        let narrow_first = Catalog::from_entries(vec![
            ("20-29", list(&["narrow"])),
            ("1-100", list(&["wide"])),
        ])
        .unwrap();
        for catalog in [wide_first, narrow_first] {
            let r = catalog.resolve(25).unwrap();
            assert_eq!(r.wishes(), &["narrow".to_string()]);
            assert_eq!(r.source(), WishSource::Range(AgeRange { min: 20, max: 29 }));
        }
    }

    #[test]
    fn equal_width_ranges_prefer_lower_min() {
        let catalog = Catalog::from_entries(vec![
            ("15-25", list(&["upper"])),
            ("10-20", list(&["lower"])),
        ])
        .unwrap();
        assert_eq!(catalog.resolve(18).unwrap().get(0), Some("lower"));
    }

    #[test]
    fn empty_default_is_rejected() {
        let err = Catalog::from_json(r#"{"default": []}"#).unwrap_err();
        assert!(matches!(err, WishError::Catalog(_)));
    }

    #[test]
    fn unknown_keys_and_empty_lists_are_skipped() {
        let catalog = Catalog::from_json(
            r#"{"_note": ["skip"], "40": [], "a-b": ["x"], "30": ["Thirty!"], "default": ["d"]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve(30).unwrap().wishes(), &["Thirty!".to_string()]);
        // the empty "40" entry falls through to default instead of shadowing it
        assert_eq!(catalog.resolve(40).unwrap().source(), WishSource::Default);
    }

    #[test]
    fn inverted_range_still_rejects_catalog() {
        let err = Catalog::from_json(r#"{"10-1": ["x"], "default": ["d"]}"#).unwrap_err();
        assert!(matches!(err, WishError::Catalog(_)));
    }

    #[test]
    fn width_of_hand_built_inverted_range_saturates() {
        assert_eq!(AgeRange { min: 10, max: 1 }.width(), 0);
        assert!(!AgeRange { min: 10, max: 1 }.contains(5));
    }

    #[test]
    fn duplicate_keys_after_normalisation_are_rejected() {
        let err = Catalog::from_entries(vec![("5", list(&["a"])), ("05", list(&["b"]))])
            .unwrap_err();
        assert!(matches!(err, WishError::Catalog(_)));
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert!(Catalog::from_json(r#"{"default": [1, 2]}"#).is_err());
        assert!(Catalog::from_json("[]").is_err());
    }

    #[test]
    fn fallback_has_placeholder_default() {
        let catalog = Catalog::fallback(24);
        let r = catalog.resolve(24).unwrap();
        assert_eq!(r.source(), WishSource::Default);
        assert_eq!(r.len(), 24);
        assert!(r.get(0).unwrap().starts_with("Wish #1"));
        assert_eq!(Catalog::fallback(0).resolve(1).unwrap().len(), 1);
    }

    #[test]
    fn wrapped_addresses_modulo_len() {
        let catalog = Catalog::from_entries(vec![("default", list(&["a", "b", "c"]))]).unwrap();
        let r = catalog.resolve(1).unwrap();
        assert_eq!(r.wrapped(0), "a");
        assert_eq!(r.wrapped(4), "b");
        assert_eq!(r.wrapped(23), "c");
    }
}
