//! # Growth Score (`score`)
//!
//! Maps a [`matcher::MatchResult`] to a bounded [`GrowthScore`].
//!
//! An unresolved food scores the baseline. A resolved food starts at the
//! baseline and adds capped protein, calcium and vitamin D terms, then
//! subtracts capped sugar and saturated-fat penalties when the profile reports
//! them. The total is clamped to `[0, 100]` and rounded half up.
//!
//! ```
//! use catalog::NutrientProfile;
//! use matcher::{MatchKind, MatchResult};
//!
//! let chicken = MatchResult::Resolved {
//!     key: "chicken breast".into(),
//!     profile: NutrientProfile::new(165.0, 31.0, 0.0, 3.6, 15.0, 0.0),
//!     kind: MatchKind::Exact,
//! };
//! assert_eq!(score::score(&chicken).value(), 77);
//! assert_eq!(score::score(&MatchResult::Unresolved), score::GrowthScore::BASELINE);
//! ```

mod calculator;
mod weights;

pub use crate::calculator::{explain, score, GrowthScore, ScoreBreakdown, Scorer};
pub use crate::weights::{ScoreError, ScoreWeights, TermWeight};
