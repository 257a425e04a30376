//! YAML configuration file support.
//!
//! All runtime knobs (normalizer, matcher, score weights) can be described in
//! one YAML file and loaded at startup. Every section is optional and falls
//! back to defaults that reproduce the plain lowercase-and-trim normalizer and
//! the standard growth formula.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "clinic build"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: false
//!   collapse_whitespace: true
//!
//! matcher:
//!   suggest_limit: 8
//!
//! score:
//!   baseline: 50
//!   protein: { multiplier: 2, divisor: 1, cap: 25 }
//!   calcium: { multiplier: 1, divisor: 10, cap: 15 }
//! ```

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use matcher::MatchConfig;
use score::{ScoreWeights, TermWeight};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NutrigrowConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,

    #[serde(default)]
    pub score: ScoreYamlConfig,
}

impl NutrigrowConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NutrigrowConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        self.matcher.validate()?;
        self.score.validate()?;

        Ok(())
    }

    pub fn normalize_config(&self) -> NormalizeConfig {
        self.canonical.to_normalize_config()
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            normalize: self.normalize_config(),
            suggest_limit: self.matcher.suggest_limit,
        }
    }

    pub fn score_weights(&self) -> ScoreWeights {
        self.score.to_weights()
    }
}

impl Default for NutrigrowConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
            score: ScoreYamlConfig::default(),
        }
    }
}

/// Normalizer YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub normalize_unicode: bool,

    #[serde(default)]
    pub collapse_whitespace: bool,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_normalize_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))
    }

    fn to_normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            version: self.version,
            normalize_unicode: self.normalize_unicode,
            collapse_whitespace: self.collapse_whitespace,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            collapse_whitespace: false,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchYamlConfig {
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.suggest_limit == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.suggest_limit must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            suggest_limit: default_suggest_limit(),
        }
    }
}

/// Score weight YAML configuration. Omitted terms keep their standard weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreYamlConfig {
    #[serde(default = "default_baseline")]
    pub baseline: f64,

    #[serde(default)]
    pub protein: Option<TermWeight>,

    #[serde(default)]
    pub calcium: Option<TermWeight>,

    #[serde(default)]
    pub vitamin_d: Option<TermWeight>,

    #[serde(default)]
    pub sugar_penalty: Option<TermWeight>,

    #[serde(default)]
    pub saturated_fat_penalty: Option<TermWeight>,
}

impl ScoreYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_weights()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("score: {err}")))
    }

    fn to_weights(&self) -> ScoreWeights {
        let defaults = ScoreWeights::default();
        ScoreWeights {
            baseline: self.baseline,
            protein: self.protein.unwrap_or(defaults.protein),
            calcium: self.calcium.unwrap_or(defaults.calcium),
            vitamin_d: self.vitamin_d.unwrap_or(defaults.vitamin_d),
            sugar_penalty: self.sugar_penalty.unwrap_or(defaults.sugar_penalty),
            saturated_fat_penalty: self
                .saturated_fat_penalty
                .unwrap_or(defaults.saturated_fat_penalty),
        }
    }
}

impl Default for ScoreYamlConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            protein: None,
            calcium: None,
            vitamin_d: None,
            sugar_penalty: None,
            saturated_fat_penalty: None,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_suggest_limit() -> usize {
    MatchConfig::default().suggest_limit
}
fn default_baseline() -> f64 {
    ScoreWeights::default().baseline
}
