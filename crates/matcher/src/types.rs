use canonical::{CanonicalError, NormalizeConfig};
use catalog::NutrientProfile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a resolved key was found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The normalized query is itself a catalog key.
    Exact,
    /// The query and the catalog key contain one another.
    Substring,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Substring => "substring",
        }
    }
}

/// Outcome of resolving one query against the catalog.
///
/// `Unresolved` is the explicit "nutrition data unavailable" state. It is
/// never represented as a zeroed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    Resolved {
        /// Canonical catalog key; always present in the catalog that produced it.
        key: String,
        profile: NutrientProfile,
        kind: MatchKind,
    },
    Unresolved,
}

impl MatchResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, MatchResult::Resolved { .. })
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            MatchResult::Resolved { key, .. } => Some(key),
            MatchResult::Unresolved => None,
        }
    }

    pub fn profile(&self) -> Option<&NutrientProfile> {
        match self {
            MatchResult::Resolved { profile, .. } => Some(profile),
            MatchResult::Unresolved => None,
        }
    }

    pub fn kind(&self) -> Option<MatchKind> {
        match self {
            MatchResult::Resolved { kind, .. } => Some(*kind),
            MatchResult::Unresolved => None,
        }
    }
}

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// How raw query text is normalized before resolution.
    #[serde(default)]
    pub normalize: NormalizeConfig,
    /// Upper bound on the number of autocomplete suggestions returned.
    #[serde(default = "MatchConfig::default_suggest_limit")]
    pub suggest_limit: usize,
}

impl MatchConfig {
    pub(crate) fn default_suggest_limit() -> usize {
        10
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        self.normalize.validate()?;
        if self.suggest_limit == 0 {
            return Err(MatchError::InvalidConfig(
                "suggest_limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::default(),
            suggest_limit: Self::default_suggest_limit(),
        }
    }
}

/// Errors produced while building a matcher. Resolution itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    /// A catalog key that the configured normalizer would rewrite, so no
    /// query could ever reach it exactly.
    #[error("catalog key {key:?} normalizes to {normalized:?} under the match config")]
    UnreachableKey { key: String, normalized: String },
}
