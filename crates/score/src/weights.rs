//! Scoring weights.
//!
//! Every nutrient term has the shape `min(value * multiplier / divisor, cap)`,
//! floored at zero. The defaults reproduce the growth formula:
//!
//! | term            | multiplier | divisor | cap |
//! |-----------------|-----------:|--------:|----:|
//! | protein         | 2          | 1       | 25  |
//! | calcium         | 1          | 10      | 15  |
//! | vitamin D       | 5          | 1       | 10  |
//! | sugars (−)      | 1          | 1       | 10  |
//! | sat. fat (−)    | 2          | 1       | 10  |
//!
//! The baseline is 50.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by invalid scoring weights.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid score weights: {0}")]
    InvalidWeights(String),
}

/// One capped, linear nutrient term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    pub multiplier: f64,
    pub divisor: f64,
    pub cap: f64,
}

impl TermWeight {
    pub const fn new(multiplier: f64, divisor: f64, cap: f64) -> Self {
        Self {
            multiplier,
            divisor,
            cap,
        }
    }

    /// `min(value * multiplier / divisor, cap)`, floored at 0.
    ///
    /// NaN contributes nothing; +∞ saturates at the cap.
    pub fn contribution(&self, value: f64) -> f64 {
        let raw = value * self.multiplier / self.divisor;
        if raw.is_nan() {
            return 0.0;
        }
        raw.min(self.cap).max(0.0)
    }

    fn validate(&self, name: &str) -> Result<(), ScoreError> {
        let finite = self.multiplier.is_finite() && self.divisor.is_finite() && self.cap.is_finite();
        if !finite {
            return Err(ScoreError::InvalidWeights(format!(
                "{name} weights must be finite"
            )));
        }
        if self.multiplier < 0.0 || self.cap < 0.0 {
            return Err(ScoreError::InvalidWeights(format!(
                "{name}.multiplier and {name}.cap must be >= 0"
            )));
        }
        if self.divisor <= 0.0 {
            return Err(ScoreError::InvalidWeights(format!(
                "{name}.divisor must be > 0"
            )));
        }
        Ok(())
    }
}

/// Baseline and per-term weights of the growth score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "ScoreWeights::default_baseline")]
    pub baseline: f64,
    #[serde(default = "ScoreWeights::default_protein")]
    pub protein: TermWeight,
    #[serde(default = "ScoreWeights::default_calcium")]
    pub calcium: TermWeight,
    #[serde(default = "ScoreWeights::default_vitamin_d")]
    pub vitamin_d: TermWeight,
    #[serde(default = "ScoreWeights::default_sugar_penalty")]
    pub sugar_penalty: TermWeight,
    #[serde(default = "ScoreWeights::default_saturated_fat_penalty")]
    pub saturated_fat_penalty: TermWeight,
}

impl ScoreWeights {
    pub(crate) fn default_baseline() -> f64 {
        50.0
    }

    pub(crate) fn default_protein() -> TermWeight {
        TermWeight::new(2.0, 1.0, 25.0)
    }

    pub(crate) fn default_calcium() -> TermWeight {
        TermWeight::new(1.0, 10.0, 15.0)
    }

    pub(crate) fn default_vitamin_d() -> TermWeight {
        TermWeight::new(5.0, 1.0, 10.0)
    }

    pub(crate) fn default_sugar_penalty() -> TermWeight {
        TermWeight::new(1.0, 1.0, 10.0)
    }

    pub(crate) fn default_saturated_fat_penalty() -> TermWeight {
        TermWeight::new(2.0, 1.0, 10.0)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if !(self.baseline.is_finite() && (0.0..=100.0).contains(&self.baseline)) {
            return Err(ScoreError::InvalidWeights(
                "baseline must be within [0, 100]".into(),
            ));
        }
        self.protein.validate("protein")?;
        self.calcium.validate("calcium")?;
        self.vitamin_d.validate("vitamin_d")?;
        self.sugar_penalty.validate("sugar_penalty")?;
        self.saturated_fat_penalty.validate("saturated_fat_penalty")
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            baseline: Self::default_baseline(),
            protein: Self::default_protein(),
            calcium: Self::default_calcium(),
            vitamin_d: Self::default_vitamin_d(),
            sugar_penalty: Self::default_sugar_penalty(),
            saturated_fat_penalty: Self::default_saturated_fat_penalty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[test]
    fn contribution_caps_and_floors() {
        let protein = ScoreWeights::default_protein();
        assert_eq!(protein.contribution(31.0), 25.0);
        assert_eq!(protein.contribution(5.0), 10.0);
        assert_eq!(protein.contribution(-4.0), 0.0);
        assert_eq!(protein.contribution(f64::NAN), 0.0);
        assert_eq!(protein.contribution(f64::INFINITY), 25.0);
        assert_eq!(protein.contribution(f64::NEG_INFINITY), 0.0);

        let calcium = ScoreWeights::default_calcium();
        assert_eq!(calcium.contribution(15.0), 1.5);
        assert_eq!(calcium.contribution(721.0), 15.0);
    }

    #[test]
    fn baseline_out_of_range_rejected() {
        let weights = ScoreWeights {
            baseline: 120.0,
            ..ScoreWeights::default()
        };
        let err = weights.validate().expect_err("invalid");
        assert!(err.to_string().contains("baseline"));
    }

    #[test]
    fn zero_divisor_rejected() {
        let weights = ScoreWeights {
            calcium: TermWeight::new(1.0, 0.0, 15.0),
            ..ScoreWeights::default()
        };
        let err = weights.validate().expect_err("invalid");
        assert!(err.to_string().contains("calcium.divisor"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let weights: ScoreWeights =
            serde_json::from_str(r#"{"protein":{"multiplier":3.0,"divisor":1.0,"cap":30.0}}"#)
                .expect("deserialize");
        assert_eq!(weights.protein.cap, 30.0);
        assert_eq!(weights.calcium, ScoreWeights::default_calcium());
        assert_eq!(weights.baseline, 50.0);
    }
}
