//! # Reference Nutrient Catalog
//!
//! An immutable mapping from canonical food key to a fully-known
//! [`NutrientProfile`]. The catalog is built once, validated at construction,
//! and then only read. It is `Send + Sync` and is meant to be shared behind an
//! `Arc` by any number of matchers.
//!
//! ## Invariants
//!
//! - Keys are non-empty, unique and already normalized (lowercase, trimmed).
//! - Every numeric field is finite and `>= 0`.
//! - Keys iterate in lexical (UTF-8 byte) order; matchers scan in this order.
//!
//! A violation of any invariant is a [`CatalogError`] returned from
//! construction. Queries never see it.
//!
//! ## Example
//!
//! ```
//! use catalog::{Catalog, NutrientProfile};
//!
//! let catalog = Catalog::builder()
//!     .entry("sweet potato", NutrientProfile::new(86.0, 1.6, 20.1, 0.1, 30.0, 0.0))
//!     .entry("chicken breast", NutrientProfile::new(165.0, 31.0, 0.0, 3.6, 15.0, 0.0))
//!     .build()
//!     .unwrap();
//!
//! let keys: Vec<&str> = catalog.ordered_keys().collect();
//! assert_eq!(keys, ["chicken breast", "sweet potato"]);
//! assert!(catalog.lookup("sweet potato").is_some());
//! ```

mod error;
mod profile;
mod reference;

use std::collections::BTreeMap;
use std::ops::Bound;

use canonical::{normalize, CanonicalHasher};
use tracing::{debug, warn};

pub use crate::error::CatalogError;
pub use crate::profile::{CatalogEntry, NutrientProfile};

/// Bump this value whenever the fingerprint encoding of entries changes.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Validated, read-only nutrient catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, NutrientProfile>,
}

impl Catalog {
    /// Start collecting entries for a new catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from entries, validating every one of them.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            if let Err(err) = validate_entry(&entry, &map) {
                warn!(key = %entry.canonical_key, error = %err, "rejecting catalog");
                return Err(err);
            }
            map.insert(entry.canonical_key, entry.profile);
        }

        let catalog = Self { entries: map };
        debug!(
            entries = catalog.len(),
            fingerprint = %catalog.fingerprint(),
            "catalog constructed"
        );
        Ok(catalog)
    }

    /// The bundled reference catalog of common foods.
    ///
    /// Values are per 100 g. Sugars and saturated fat are not populated.
    ///
    /// The bundled table is not re-validated here. Debug builds check it
    /// against the same rules as [`Catalog::from_entries`].
    pub fn reference() -> Self {
        let entries: BTreeMap<String, NutrientProfile> = reference::REFERENCE_FOODS
            .iter()
            .map(|(key, profile)| ((*key).to_string(), *profile))
            .collect();
        debug_assert_eq!(
            entries.len(),
            reference::REFERENCE_FOODS.len(),
            "duplicate reference key"
        );
        debug_assert!(
            reference::REFERENCE_FOODS.iter().all(|(key, profile)| {
                !key.is_empty() && normalize(key) == *key && profile.validate(key).is_ok()
            }),
            "reference table violates catalog invariants"
        );
        Self { entries }
    }

    /// Exact lookup by canonical key.
    pub fn lookup(&self, key: &str) -> Option<&NutrientProfile> {
        self.entries.get(key)
    }

    /// Exact lookup returning the stored key alongside the profile.
    pub fn get_entry(&self, key: &str) -> Option<(&str, &NutrientProfile)> {
        self.entries
            .get_key_value(key)
            .map(|(k, profile)| (k.as_str(), profile))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Canonical keys in lexical order. This is the documented scan order.
    pub fn ordered_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, profile)` pairs in lexical key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &NutrientProfile)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in lexical order that start with `prefix`.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> + 'a {
        let owned = prefix.to_owned();
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(k, _)| k.as_str())
            .take_while(move |k| k.starts_with(owned.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deterministic SHA-256 hex digest of the catalog content.
    ///
    /// Two catalogs with the same keys and bit-identical values share a
    /// fingerprint regardless of how they were built.
    pub fn fingerprint(&self) -> String {
        let mut hasher = CanonicalHasher::new(CATALOG_SCHEMA_VERSION);
        for (key, profile) in &self.entries {
            hasher.update(&(key.len() as u64).to_be_bytes());
            hasher.update(key.as_bytes());
            let values = [
                Some(profile.calories),
                Some(profile.protein_g),
                Some(profile.carbs_g),
                Some(profile.fat_g),
                Some(profile.calcium_mg),
                Some(profile.vitamin_d_ug),
                profile.sugars_g,
                profile.saturated_fat_g,
            ];
            for value in values {
                match value {
                    Some(v) => {
                        hasher.update(&[1]);
                        hasher.update(&v.to_bits().to_be_bytes());
                    }
                    None => hasher.update(&[0]),
                }
            }
        }
        hasher.finish_hex()
    }
}

fn validate_entry(
    entry: &CatalogEntry,
    seen: &BTreeMap<String, NutrientProfile>,
) -> Result<(), CatalogError> {
    let key = entry.canonical_key.as_str();
    if key.is_empty() {
        return Err(CatalogError::EmptyKey);
    }
    let expected = normalize(key);
    if expected.is_empty() {
        return Err(CatalogError::EmptyKey);
    }
    if expected != key {
        return Err(CatalogError::NonCanonicalKey {
            key: key.to_string(),
            expected,
        });
    }
    if seen.contains_key(key) {
        return Err(CatalogError::DuplicateKey {
            key: key.to_string(),
        });
    }
    entry.profile.validate(key)
}

/// Collects entries and validates them all at [`build`](CatalogBuilder::build).
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    pub fn entry(mut self, key: impl Into<String>, profile: NutrientProfile) -> Self {
        self.entries.push(CatalogEntry::new(key, profile));
        self
    }

    pub fn extend<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        self.entries.extend(entries);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_entries(self.entries)
    }
}
