//! # Food Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns free-text food labels into catalog resolutions. It sits on
//! top of the normalizer (`canonical`) and the reference catalog (`catalog`)
//! and produces a [`MatchResult`] for every query. It never fails per query:
//! anything it cannot place is [`MatchResult::Unresolved`].
//!
//! ## Resolution order
//!
//! 1. Exact lookup of the normalized key.
//! 2. Bidirectional containment against catalog keys scanned in lexical
//!    order; the first candidate wins.
//! 3. `Unresolved`.
//!
//! Containment is a coarse heuristic: a short query such as `"rice"` resolves
//! to whichever key containing it sorts first (`"brown rice"`). The scan order
//! is what makes the outcome reproducible.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use catalog::{Catalog, NutrientProfile};
//! use matcher::{MatchKind, Matcher};
//!
//! let catalog = Catalog::builder()
//!     .entry("sweet potato", NutrientProfile::new(86.0, 1.6, 20.1, 0.1, 30.0, 0.0))
//!     .build()
//!     .unwrap();
//! let matcher = Matcher::new(Arc::new(catalog));
//!
//! let result = matcher.estimate("Sweet");
//! assert_eq!(result.key(), Some("sweet potato"));
//! assert_eq!(result.kind(), Some(MatchKind::Substring));
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-resolution latency and outcome.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{MatchConfig, MatchError, MatchKind, MatchResult};
