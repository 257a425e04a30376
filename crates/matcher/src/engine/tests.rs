use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use canonical::NormalizeConfig;
use catalog::NutrientProfile;

use crate::metrics::{set_match_metrics, MatchMetrics};

fn profile(protein: f64, calcium: f64) -> NutrientProfile {
    NutrientProfile::new(100.0, protein, 0.0, 0.0, calcium, 0.0)
}

fn small_catalog() -> Arc<Catalog> {
    let catalog = Catalog::builder()
        .entry("chicken", profile(27.3, 15.0))
        .entry("chicken breast", profile(31.0, 15.0))
        .entry("egg", profile(12.6, 56.0))
        .entry("greek yogurt", profile(10.2, 110.0))
        .entry("sweet potato", profile(1.6, 30.0))
        .entry("yogurt", profile(3.5, 121.0))
        .build()
        .expect("valid catalog");
    Arc::new(catalog)
}

#[test]
fn exact_match_on_every_catalog_key() {
    let matcher = Matcher::new(small_catalog());
    for (key, profile) in matcher.catalog().entries() {
        let result = matcher.estimate(key);
        assert_eq!(
            result,
            MatchResult::Resolved {
                key: key.to_string(),
                profile: *profile,
                kind: MatchKind::Exact,
            }
        );
    }
}

#[test]
fn exact_match_wins_over_containment() {
    let matcher = Matcher::new(small_catalog());
    let result = matcher.estimate("chicken");
    assert_eq!(result.key(), Some("chicken"));
    assert_eq!(result.kind(), Some(MatchKind::Exact));
}

#[test]
fn query_contained_in_catalog_key() {
    let matcher = Matcher::new(small_catalog());
    let result = matcher.estimate("sweet");
    assert_eq!(result.key(), Some("sweet potato"));
    assert_eq!(result.kind(), Some(MatchKind::Substring));
}

#[test]
fn catalog_key_contained_in_query() {
    let matcher = Matcher::new(small_catalog());
    let result = matcher.estimate("Scrambled Eggs");
    assert_eq!(result.key(), Some("egg"));
    assert_eq!(result.kind(), Some(MatchKind::Substring));
}

#[test]
fn first_lexical_candidate_wins() {
    let matcher = Matcher::new(small_catalog());

    // "yogurt" is contained in both "greek yogurt" and "yogurt", but the
    // exact hit comes first.
    assert_eq!(matcher.estimate("yogurt").kind(), Some(MatchKind::Exact));

    // "gurt" is contained in "greek yogurt" and "yogurt"; "greek yogurt" sorts first.
    assert_eq!(matcher.estimate("gurt").key(), Some("greek yogurt"));

    // "chicken breast fillet" contains both "chicken" and "chicken breast".
    let result = matcher.estimate("chicken breast fillet");
    assert_eq!(result.key(), Some("chicken"));
    assert_eq!(result.kind(), Some(MatchKind::Substring));
}

#[test]
fn unrelated_query_is_unresolved() {
    let matcher = Matcher::new(small_catalog());
    assert_eq!(matcher.estimate("xyzfood"), MatchResult::Unresolved);
}

#[test]
fn empty_query_is_unresolved() {
    let matcher = Matcher::new(small_catalog());
    assert_eq!(matcher.estimate(""), MatchResult::Unresolved);
    assert_eq!(matcher.estimate("   \t"), MatchResult::Unresolved);
    assert_eq!(matcher.resolve(""), MatchResult::Unresolved);
}

#[test]
fn resolution_is_case_and_edge_whitespace_insensitive() {
    let matcher = Matcher::new(small_catalog());
    let result = matcher.estimate("  Chicken Breast ");
    assert_eq!(result.key(), Some("chicken breast"));
    assert_eq!(result.kind(), Some(MatchKind::Exact));
}

#[test]
fn repeated_resolution_is_identical() {
    let matcher = Matcher::new(small_catalog());
    let queries = ["gurt", "Eggs", "sweet", "xyzfood", "chicken breast fillet"];
    for query in queries {
        let first = matcher.estimate(query);
        for _ in 0..5 {
            assert_eq!(matcher.estimate(query), first, "unstable for {query:?}");
        }
    }
}

#[test]
fn collapse_whitespace_config_reaches_exact_match() {
    let cfg = MatchConfig {
        normalize: NormalizeConfig {
            collapse_whitespace: true,
            ..NormalizeConfig::default()
        },
        ..MatchConfig::default()
    };
    let matcher = Matcher::with_config(small_catalog(), cfg).expect("valid config");
    let result = matcher.estimate("sweet    potato");
    assert_eq!(result.key(), Some("sweet potato"));
    assert_eq!(result.kind(), Some(MatchKind::Exact));

    // With the default normalizer the doubled space blocks both matches.
    let plain = Matcher::new(small_catalog());
    assert_eq!(plain.estimate("sweet    potato"), MatchResult::Unresolved);
}

#[test]
fn keys_rewritten_by_configured_normalizer_are_rejected() {
    // Both keys pass plain lowercase-and-trim validation.
    let catalog = Arc::new(
        Catalog::builder()
            .entry("sweet  potato", profile(1.6, 30.0))
            .entry("\u{FB01}sh", profile(20.0, 12.0))
            .build()
            .expect("valid under the default normalizer"),
    );

    let collapse = MatchConfig {
        normalize: NormalizeConfig {
            collapse_whitespace: true,
            ..NormalizeConfig::default()
        },
        ..MatchConfig::default()
    };
    let err = Matcher::with_config(catalog.clone(), collapse).expect_err("doubled space");
    assert_eq!(
        err,
        MatchError::UnreachableKey {
            key: "sweet  potato".into(),
            normalized: "sweet potato".into(),
        }
    );

    let fold = MatchConfig {
        normalize: NormalizeConfig {
            normalize_unicode: true,
            ..NormalizeConfig::default()
        },
        ..MatchConfig::default()
    };
    let err = Matcher::with_config(catalog.clone(), fold).expect_err("ligature");
    assert!(matches!(
        err,
        MatchError::UnreachableKey { ref key, ref normalized }
            if key == "\u{FB01}sh" && normalized == "fish"
    ));

    // The default normalizer leaves both keys alone, so each resolves to itself.
    let plain = Matcher::with_config(catalog, MatchConfig::default()).expect("default config");
    for key in ["sweet  potato", "\u{FB01}sh"] {
        assert_eq!(plain.estimate(key).kind(), Some(MatchKind::Exact), "{key:?}");
    }
}

#[test]
fn invalid_config_rejected() {
    let cfg = MatchConfig {
        suggest_limit: 0,
        ..MatchConfig::default()
    };
    let err = Matcher::with_config(small_catalog(), cfg).expect_err("invalid");
    assert!(matches!(err, MatchError::InvalidConfig(_)));
}

#[test]
fn suggest_returns_prefix_matches_in_order() {
    let matcher = Matcher::new(small_catalog());
    assert_eq!(matcher.suggest("Chi", 10), vec!["chicken", "chicken breast"]);
    assert_eq!(matcher.suggest("chi", 1), vec!["chicken"]);
    assert!(matcher.suggest("", 10).is_empty());
    assert!(matcher.suggest("  ", 10).is_empty());
    assert!(matcher.suggest("chi", 0).is_empty());
    assert!(matcher.suggest("zzz", 10).is_empty());
}

#[test]
fn suggest_respects_configured_cap() {
    let cfg = MatchConfig {
        suggest_limit: 1,
        ..MatchConfig::default()
    };
    let matcher = Matcher::with_config(small_catalog(), cfg).expect("valid config");
    assert_eq!(matcher.suggest("chicken", 50), vec!["chicken"]);
}

#[derive(Default)]
struct RecordingMetrics {
    events: Mutex<Vec<Option<MatchKind>>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_resolve(&self, kind: Option<MatchKind>, _latency: Duration) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(kind);
    }
}

#[test]
fn metrics_recorder_sees_each_resolution() {
    let metrics = Arc::new(RecordingMetrics::default());
    set_match_metrics(Some(metrics.clone()));

    let matcher = Matcher::new(small_catalog());
    matcher.estimate("egg");
    matcher.estimate("sweet");
    matcher.estimate("xyzfood");

    set_match_metrics(None);

    let events = metrics.events.lock().unwrap().clone();
    // Other tests in this binary may resolve concurrently; only require ours.
    assert!(events.contains(&Some(MatchKind::Exact)));
    assert!(events.contains(&Some(MatchKind::Substring)));
    assert!(events.contains(&None));
}
