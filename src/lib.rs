//! Workspace umbrella crate for nutrition estimation and growth scoring.
//!
//! This crate stitches together the normalizer, the reference catalog, the
//! matcher and the score calculator so callers can turn a free-text food label
//! into a nutrient profile and a growth score through a single [`Engine`].
//!
//! ```
//! use nutrigrow::Engine;
//!
//! let engine = Engine::reference();
//! let assessment = engine.assess("Chicken Breast ");
//! assert!(assessment.nutrition_available());
//! assert_eq!(assessment.score.value(), 77);
//!
//! let unknown = engine.assess("xyzfood");
//! assert!(!unknown.nutrition_available());
//! assert_eq!(unknown.score.value(), 50);
//! ```

pub mod config;

pub use crate::config::{
    CanonicalYamlConfig, ConfigLoadError, MatchYamlConfig, NutrigrowConfig, ScoreYamlConfig,
};
pub use canonical::{collapse_whitespace, normalize, normalize_with, CanonicalError, NormalizeConfig};
pub use catalog::{Catalog, CatalogBuilder, CatalogEntry, CatalogError, NutrientProfile};
pub use matcher::{
    set_match_metrics, MatchConfig, MatchError, MatchKind, MatchMetrics, MatchResult, Matcher,
};
pub use score::{GrowthScore, ScoreBreakdown, ScoreError, ScoreWeights, Scorer, TermWeight};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while constructing an [`Engine`].
///
/// Queries themselves never fail: an unknown food is an
/// [`MatchResult::Unresolved`] outcome, not an error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid matcher configuration: {0}")]
    Match(#[from] MatchError),

    #[error("invalid score weights: {0}")]
    Score(#[from] ScoreError),

    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),
}

/// Metrics observer for engine assessments.
pub trait EngineMetrics: Send + Sync {
    fn record_assessment(&self, latency: Duration, resolved: bool, score: GrowthScore);
}

/// Install or clear the global engine metrics recorder.
pub fn set_engine_metrics(recorder: Option<Arc<dyn EngineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn EngineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn EngineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn EngineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn EngineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_assessment(self, assessment: &Assessment) {
        self.recorder.record_assessment(
            self.start.elapsed(),
            assessment.nutrition_available(),
            assessment.score,
        );
    }
}

/// Outcome of one end-to-end query.
///
/// `nutrition_available()` lets a UI render "nutrition data unavailable"
/// instead of a zeroed profile when the query did not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub query: String,
    pub result: MatchResult,
    pub score: GrowthScore,
}

impl Assessment {
    pub fn nutrition_available(&self) -> bool {
        self.result.is_resolved()
    }

    pub fn profile(&self) -> Option<&NutrientProfile> {
        self.result.profile()
    }
}

/// Normalize, match and score against one immutable catalog.
///
/// The engine is `Send + Sync` and cheap to clone; share it across threads
/// freely.
#[derive(Debug, Clone)]
pub struct Engine {
    matcher: Matcher,
    scorer: Scorer,
}

impl Engine {
    /// Engine over `catalog` with the default normalizer and score weights.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            matcher: Matcher::new(catalog),
            scorer: Scorer::default(),
        }
    }

    /// Engine over the bundled reference catalog.
    pub fn reference() -> Self {
        Self::new(Arc::new(Catalog::reference()))
    }

    /// Validate `entries` into a catalog and build an engine over it.
    pub fn from_entries<I>(entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let catalog = Catalog::from_entries(entries)?;
        Ok(Self::new(Arc::new(catalog)))
    }

    /// Engine with explicit matcher configuration and score weights.
    pub fn with_parts(
        catalog: Arc<Catalog>,
        match_cfg: MatchConfig,
        weights: ScoreWeights,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            matcher: Matcher::with_config(catalog, match_cfg)?,
            scorer: Scorer::new(weights)?,
        })
    }

    /// Engine configured from a loaded YAML configuration.
    pub fn from_config(catalog: Arc<Catalog>, cfg: &NutrigrowConfig) -> Result<Self, EngineError> {
        cfg.validate()?;
        let engine = Self::with_parts(catalog, cfg.match_config(), cfg.score_weights())?;
        debug!(
            config = cfg.name.as_deref().unwrap_or("unnamed"),
            foods = engine.catalog().len(),
            "engine configured"
        );
        Ok(engine)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.matcher.catalog()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Resolve a free-text food label to a catalog entry.
    pub fn estimate_nutrition(&self, food_text: &str) -> MatchResult {
        self.matcher.estimate(food_text)
    }

    /// Growth score for a match outcome, always within `[0, 100]`.
    pub fn growth_score(&self, result: &MatchResult) -> GrowthScore {
        self.scorer.score(result)
    }

    /// Per-term breakdown of [`Engine::growth_score`].
    pub fn explain(&self, result: &MatchResult) -> ScoreBreakdown {
        self.scorer.explain(result)
    }

    /// Canonical food keys in lexical order.
    pub fn list_canonical_foods(&self) -> Vec<&str> {
        self.catalog().ordered_keys().collect()
    }

    /// Autocomplete over canonical keys, capped at the configured limit.
    pub fn suggest(&self, prefix: &str) -> Vec<&str> {
        self.matcher.suggest(prefix, self.matcher.suggest_limit())
    }

    /// Estimate and score in one call.
    pub fn assess(&self, food_text: &str) -> Assessment {
        let span = MetricsSpan::start();
        let result = self.estimate_nutrition(food_text);
        let score = self.growth_score(&result);
        let assessment = Assessment {
            query: food_text.to_string(),
            result,
            score,
        };
        if let Some(span) = span {
            span.record_assessment(&assessment);
        }
        assessment
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::reference()
    }
}
