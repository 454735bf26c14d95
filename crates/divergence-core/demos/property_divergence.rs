//! Scores a small two-property batch and prints per-property means.
//!
//! Run with `RUST_LOG=divergence_core=debug` to see every aligned vector.

use anyhow::Result;
use divergence_core::{evaluate_all_rows, js, kl, Domain, Row};
use tracing_subscriber::EnvFilter;

const DOMAIN: &str = r#"
gender: [male, female]
political party: [Republican party, Democratic party]
"#;

const GOLD: &str = r#"[
    {"gender": {"male": 1.0}, "political party": {"Republican party": 0.5, "Democratic party": 0.5}},
    {"gender": {"male": 0.6, "female": 0.4}, "political party": {"Republican party": 0.3, "Democratic party": 0.7}},
    {"gender": {"female": 1.0}, "political party": {"Republican party": 0.5, "Democratic party": 0.3}}
]"#;

const SYSTEM: &str = r#"[
    {"gender": {"male": 0.8, "female": 0.2}, "political party": {"Republican party": 0.8, "Democratic party": 0.2}},
    {"gender": {"female": 0.5, "male": 0.5}, "political party": {"Republican party": 0.8, "Democratic party": 0.2}},
    {"gender": {"male": 1.0}, "political party": {"Republican party": 0.8, "Democratic party": 0.2}}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let a = [0.8, 0.2, 0.0];
    let c = [0.0, 0.0, 1.0];
    println!("kl(c, a) = {}", kl(&c, &a)?);
    println!("js(a, c) = {}", js(&a, &c)?);
    println!("js(c, a) = {}", js(&c, &a)?);

    let domain = Domain::from_yaml(DOMAIN)?;
    let gold: Vec<Row> = serde_json::from_str(GOLD)?;
    let system: Vec<Row> = serde_json::from_str(SYSTEM)?;

    let divergences = evaluate_all_rows(&domain, &gold, &system)?;
    println!("{}", serde_json::to_string_pretty(&divergences)?);

    for (property, mean) in divergences.means() {
        println!("{} {}", property, mean);
    }

    Ok(())
}
