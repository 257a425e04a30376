use std::env;
use std::error::Error;
use std::sync::Arc;

use nutrigrow::{Catalog, Engine, NutrigrowConfig};
use tracing_subscriber::EnvFilter;

/// Score each command-line argument as a food label.
///
/// ```text
/// cargo run --example score_foods -- "Chicken Breast" rice xyzfood
/// NUTRIGROW_CONFIG=nutrigrow.yaml RUST_LOG=debug cargo run --example score_foods -- milk
/// ```
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let catalog = Arc::new(Catalog::reference());
    let engine = match env::var("NUTRIGROW_CONFIG") {
        Ok(path) => Engine::from_config(catalog, &NutrigrowConfig::from_file(path)?)?,
        Err(_) => Engine::new(catalog),
    };

    let mut queries: Vec<String> = env::args().skip(1).collect();
    if queries.is_empty() {
        queries = ["Chicken Breast ", "sweet", "Scrambled Eggs", "xyzfood"]
            .map(String::from)
            .to_vec();
    }

    println!("catalog fingerprint: {}", engine.catalog().fingerprint());
    for query in &queries {
        let assessment = engine.assess(query);
        match assessment.result.key() {
            Some(key) => {
                let breakdown = engine.explain(&assessment.result);
                println!(
                    "{query:?} -> {key} ({}) score {} [protein {:.1}, calcium {:.1}, vitamin D {:.1}]",
                    assessment.result.kind().map(|k| k.as_str()).unwrap_or("-"),
                    assessment.score,
                    breakdown.protein,
                    breakdown.calcium,
                    breakdown.vitamin_d,
                );
            }
            None => println!(
                "{query:?} -> nutrition data unavailable, score {}",
                assessment.score
            ),
        }
    }

    if let Some(first) = queries.first() {
        println!("suggestions for {first:?}: {:?}", engine.suggest(first));
    }

    Ok(())
}
