//! Configuration types for food label normalization.
//!
//! This module defines [`NormalizeConfig`], which controls how a raw food
//! label is reduced to a comparable catalog key.
//!
//! # Versioning
//!
//! The `version` field tracks normalization behavior. Any change to the
//! produced keys (even bug fixes) must come with a version bump so that
//! catalog fingerprints and cached scores from different versions never mix.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.normalize_unicode);
//! assert!(!config.collapse_whitespace);
//! ```
//!
//! ## Folding Compatibility Characters
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig {
//!     normalize_unicode: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the food label normalizer.
///
/// The default configuration performs exactly two steps: locale-free Unicode
/// lowercasing followed by trimming of leading and trailing whitespace. Both
/// optional steps are off by default so that catalog keys written by hand
/// (for example `"sweet potato"`) are already in normalized form.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": false,
///   "collapse_whitespace": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Version of the normalization behavior.
    ///
    /// Must be >= 1. Version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before lowercasing.
    ///
    /// Useful when labels arrive from keyboards that emit decomposed accents
    /// or full-width characters:
    ///
    /// ```text
    /// "Cafe\u{0301} au lait" → "café au lait"
    /// "ＭＩＬＫ" → "milk"
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub normalize_unicode: bool,

    /// If true, collapse internal whitespace runs to a single ASCII space.
    ///
    /// ```text
    /// "sweet \t  potato" → "sweet potato"
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub collapse_whitespace: bool,
}

impl NormalizeConfig {
    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            collapse_whitespace: false,
        }
    }
}
