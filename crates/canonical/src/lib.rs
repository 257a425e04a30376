//! Food label normalization.
//!
//! This crate reduces free-text food labels to comparable catalog keys.
//! Downstream stages (catalog validation, matching) rely on it for a stable
//! notion of "the same label".
//!
//! ## What we do
//!
//! - Locale-free Unicode lowercasing
//! - Trimming of leading and trailing whitespace
//! - Optional NFKC folding and internal whitespace collapsing
//! - Versioned hashing so catalog fingerprints record the normalizer version
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config give
//! the same key on any machine, and normalizing a key again leaves it as is.

mod config;
mod error;
mod hash;
mod normalize;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_canonical_bytes, CanonicalHasher};
pub use crate::normalize::{normalize, normalize_with, Normalizer};
pub use crate::whitespace::collapse_whitespace;

/// Returns true when `key` is already in the form [`normalize`] produces.
pub fn is_normalized(key: &str) -> bool {
    normalize(key) == key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_keys_are_detected() {
        assert!(is_normalized("sweet potato"));
        assert!(is_normalized(""));
        assert!(!is_normalized("Sweet potato"));
        assert!(!is_normalized(" sweet potato"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = NormalizeConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back: NormalizeConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(cfg, back);
    }
}
