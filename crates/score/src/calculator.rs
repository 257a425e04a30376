use std::fmt;

use catalog::NutrientProfile;
use matcher::MatchResult;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::weights::{ScoreError, ScoreWeights};

/// Growth-impact score, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GrowthScore(u8);

impl GrowthScore {
    pub const MIN: GrowthScore = GrowthScore(0);
    pub const MAX: GrowthScore = GrowthScore(100);
    /// Score of an unresolved food under the default weights.
    pub const BASELINE: GrowthScore = GrowthScore(50);

    /// `None` when `value > 100`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Clamp to `[0, 100]`, then round half up.
    fn from_total(total: f64) -> Self {
        let clamped = if total.is_nan() {
            0.0
        } else {
            total.clamp(0.0, 100.0)
        };
        // `round` is half-away-from-zero, which is half-up for non-negative values.
        Self(clamped.round() as u8)
    }
}

impl fmt::Display for GrowthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GrowthScore> for u8 {
    fn from(score: GrowthScore) -> Self {
        score.0
    }
}

impl TryFrom<u8> for GrowthScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GrowthScore::new(value).ok_or_else(|| format!("growth score {value} exceeds 100"))
    }
}

/// Every term that went into a score, for audit trails and UI explanations.
///
/// Penalties are stored as the positive amount subtracted; `None` means the
/// profile did not report that nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub resolved: bool,
    pub baseline: f64,
    pub protein: f64,
    pub calcium: f64,
    pub vitamin_d: f64,
    pub sugar_penalty: Option<f64>,
    pub saturated_fat_penalty: Option<f64>,
    /// Sum before clamping and rounding.
    pub raw_total: f64,
    pub score: GrowthScore,
}

/// Applies [`ScoreWeights`] to match results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn score(&self, result: &MatchResult) -> GrowthScore {
        self.explain(result).score
    }

    pub fn explain(&self, result: &MatchResult) -> ScoreBreakdown {
        match result {
            MatchResult::Resolved { key, profile, .. } => {
                let breakdown = self.explain_profile(profile);
                trace!(key = %key, score = breakdown.score.value(), raw = breakdown.raw_total, "scored food");
                breakdown
            }
            MatchResult::Unresolved => {
                let baseline = self.weights.baseline;
                ScoreBreakdown {
                    resolved: false,
                    baseline,
                    protein: 0.0,
                    calcium: 0.0,
                    vitamin_d: 0.0,
                    sugar_penalty: None,
                    saturated_fat_penalty: None,
                    raw_total: baseline,
                    score: GrowthScore::from_total(baseline),
                }
            }
        }
    }

    /// Score a profile directly, including hand-built profiles outside any catalog.
    pub fn score_profile(&self, profile: &NutrientProfile) -> GrowthScore {
        self.explain_profile(profile).score
    }

    pub fn explain_profile(&self, profile: &NutrientProfile) -> ScoreBreakdown {
        let w = &self.weights;
        let protein = w.protein.contribution(profile.protein_g);
        let calcium = w.calcium.contribution(profile.calcium_mg);
        let vitamin_d = w.vitamin_d.contribution(profile.vitamin_d_ug);
        let sugar_penalty = profile.sugars_g.map(|v| w.sugar_penalty.contribution(v));
        let saturated_fat_penalty = profile
            .saturated_fat_g
            .map(|v| w.saturated_fat_penalty.contribution(v));

        let raw_total = w.baseline + protein + calcium + vitamin_d
            - sugar_penalty.unwrap_or(0.0)
            - saturated_fat_penalty.unwrap_or(0.0);

        ScoreBreakdown {
            resolved: true,
            baseline: w.baseline,
            protein,
            calcium,
            vitamin_d,
            sugar_penalty,
            saturated_fat_penalty,
            raw_total,
            score: GrowthScore::from_total(raw_total),
        }
    }
}

/// Score with the default weights.
pub fn score(result: &MatchResult) -> GrowthScore {
    Scorer::default().score(result)
}

/// Breakdown with the default weights.
pub fn explain(result: &MatchResult) -> ScoreBreakdown {
    Scorer::default().explain(result)
}
