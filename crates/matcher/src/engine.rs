use std::sync::Arc;
use std::time::Instant;

use canonical::Normalizer;
use catalog::Catalog;
use tracing::{trace, warn};

use crate::metrics::metrics_recorder;
use crate::types::{MatchConfig, MatchError, MatchKind, MatchResult};

#[cfg(test)]
mod tests;

/// Resolves food labels against a shared, immutable catalog.
///
/// A `Matcher` is cheap to clone and holds no mutable state; any number of
/// threads may resolve through the same instance.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
    normalizer: Normalizer,
    suggest_limit: usize,
}

impl Matcher {
    /// Construct a matcher with the default configuration.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            normalizer: Normalizer::default(),
            suggest_limit: MatchConfig::default_suggest_limit(),
        }
    }

    /// Construct a matcher with an explicit, validated configuration.
    ///
    /// Every catalog key must be a fixed point of the configured normalizer;
    /// otherwise that key could never be matched exactly and construction
    /// fails with [`MatchError::UnreachableKey`].
    pub fn with_config(catalog: Arc<Catalog>, cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        let normalizer = Normalizer::new(cfg.normalize)?;
        for key in catalog.ordered_keys() {
            let normalized = normalizer.normalize(key);
            if normalized != key {
                warn!(key, normalized = %normalized, "catalog key unreachable under match config");
                return Err(MatchError::UnreachableKey {
                    key: key.to_string(),
                    normalized,
                });
            }
        }
        Ok(Self {
            catalog,
            normalizer,
            suggest_limit: cfg.suggest_limit,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Normalize raw text with this matcher's normalizer.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Normalize `raw` and resolve the resulting key.
    pub fn estimate(&self, raw: &str) -> MatchResult {
        let key = self.normalizer.normalize(raw);
        self.resolve(&key)
    }

    /// Resolve an already-normalized key.
    ///
    /// 1. Exact catalog lookup.
    /// 2. For a non-empty key, the first catalog key in lexical order that
    ///    contains `key` or is contained in `key`.
    /// 3. Otherwise `Unresolved`.
    pub fn resolve(&self, key: &str) -> MatchResult {
        let start = Instant::now();
        let result = self.resolve_inner(key);

        trace!(
            query = key,
            matched = result.key().unwrap_or(""),
            kind = result.kind().map(|k| k.as_str()).unwrap_or("unresolved"),
            "resolved food label"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_resolve(result.kind(), start.elapsed());
        }

        result
    }

    fn resolve_inner(&self, key: &str) -> MatchResult {
        if let Some((stored, profile)) = self.catalog.get_entry(key) {
            return MatchResult::Resolved {
                key: stored.to_string(),
                profile: *profile,
                kind: MatchKind::Exact,
            };
        }

        if key.is_empty() {
            return MatchResult::Unresolved;
        }

        self.catalog
            .entries()
            .find(|(candidate, _)| contains_either(candidate, key))
            .map(|(candidate, profile)| MatchResult::Resolved {
                key: candidate.to_string(),
                profile: *profile,
                kind: MatchKind::Substring,
            })
            .unwrap_or(MatchResult::Unresolved)
    }

    /// Catalog keys starting with the normalized `prefix`, in lexical order,
    /// capped at `limit` and at the configured suggestion limit.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = self.normalizer.normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.catalog
            .keys_with_prefix(&prefix)
            .take(limit.min(self.suggest_limit))
            .collect()
    }

    pub fn suggest_limit(&self) -> usize {
        self.suggest_limit
    }
}

/// Bidirectional containment between a catalog key and a query key.
fn contains_either(candidate: &str, key: &str) -> bool {
    candidate.contains(key) || key.contains(candidate)
}
