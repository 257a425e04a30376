use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::CanonicalError;
use crate::whitespace::collapse_whitespace;

/// Reduce a raw food label to a comparable catalog key.
///
/// Lowercases (locale-free Unicode mapping) and trims the input. The result
/// is idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// Whitespace-only input produces an empty key. That is not an error; the
/// matcher resolves an empty key to `Unresolved`.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("  Chicken Breast "), "chicken breast");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Normalize with an explicit configuration.
///
/// With [`NormalizeConfig::default`] this is identical to [`normalize`].
pub fn normalize_with(raw: &str, cfg: &NormalizeConfig) -> Result<String, CanonicalError> {
    Ok(Normalizer::new(cfg.clone())?.normalize(raw))
}

/// A normalizer bound to a validated [`NormalizeConfig`].
///
/// Validation happens once in [`Normalizer::new`], so [`Normalizer::normalize`]
/// cannot fail. Matchers hold one of these for their whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalizer {
    cfg: NormalizeConfig,
}

impl Normalizer {
    pub fn new(cfg: NormalizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.cfg
    }

    pub fn normalize(&self, raw: &str) -> String {
        // NFKC before lowercasing: full-width forms fold to uppercase ASCII.
        let folded: Cow<str> = if self.cfg.normalize_unicode {
            Cow::Owned(raw.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(raw)
        };

        let key = normalize(&folded);
        if self.cfg.collapse_whitespace {
            collapse_whitespace(&key)
        } else {
            key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("Chicken Breast "), "chicken breast");
        assert_eq!(normalize("\tGREEK Yogurt\n"), "greek yogurt");
    }

    #[test]
    fn keeps_internal_whitespace_by_default() {
        assert_eq!(normalize(" sweet   potato "), "sweet   potato");
    }

    #[test]
    fn empty_and_blank_inputs_become_empty_keys() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        let samples = [
            "  Milk ",
            "ÉCLAIR",
            "İstanbul kebab",
            "\u{00A0}Tofu\u{00A0}",
            "salmon, atlantic",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn default_config_matches_plain_normalize() {
        let cfg = NormalizeConfig::default();
        let out = normalize_with("  Sweet Potato ", &cfg).expect("valid config");
        assert_eq!(out, normalize("  Sweet Potato "));
    }

    #[test]
    fn unicode_folding_merges_equivalent_forms() {
        let cfg = NormalizeConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        let composed = normalize_with("Caf\u{00E9}", &cfg).expect("composed");
        let decomposed = normalize_with("Cafe\u{0301}", &cfg).expect("decomposed");
        assert_eq!(composed, decomposed);

        let wide = normalize_with("\u{FF2D}\u{FF29}\u{FF2C}\u{FF2B}", &cfg).expect("wide");
        assert_eq!(wide, "milk");
    }

    #[test]
    fn collapse_whitespace_option() {
        let cfg = NormalizeConfig {
            collapse_whitespace: true,
            ..Default::default()
        };
        let out = normalize_with(" Sweet \t  Potato ", &cfg).expect("valid config");
        assert_eq!(out, "sweet potato");
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        let res = normalize_with("milk", &cfg);
        assert!(matches!(res, Err(CanonicalError::InvalidConfig(_))));
        assert!(Normalizer::new(cfg).is_err());
    }

    #[test]
    fn default_normalizer_is_plain_normalize() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(" Oat Milk "), normalize(" Oat Milk "));
        assert_eq!(normalizer.config(), &NormalizeConfig::default());
    }
}
