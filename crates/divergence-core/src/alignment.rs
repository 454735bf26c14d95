//! Sparse-to-dense alignment against a domain's category list.

use crate::divergence::{js, DivergenceError};
use crate::types::Distribution;

/// Lay `distribution` out as a dense vector in `categories` order.
///
/// Categories missing from the distribution become `0.0`. Categories the
/// distribution carries but `categories` does not are dropped.
pub fn align(categories: &[String], distribution: &Distribution) -> Vec<f64> {
    categories.iter().map(|c| distribution.mass(c)).collect()
}

/// Jensen-Shannon divergence between a system and a gold distribution for
/// one property.
///
/// Both sides are aligned to `domain_values` first. The score is
/// `js(system, gold)`.
pub fn compute_property_divergence(
    domain_values: &[String],
    gold_values: &Distribution,
    sys_values: &Distribution,
) -> Result<f64, DivergenceError> {
    log_dropped(domain_values, gold_values, "gold");
    log_dropped(domain_values, sys_values, "system");

    let s = align(domain_values, sys_values);
    let g = align(domain_values, gold_values);

    let score = js(&s, &g)?;
    tracing::debug!(system = ?s, gold = ?g, score, "Property divergence computed");

    Ok(score)
}

fn log_dropped(domain_values: &[String], distribution: &Distribution, side: &str) {
    for category in distribution.categories() {
        if !domain_values.iter().any(|c| c == category) {
            tracing::debug!(side, category, "Category outside domain ignored");
        }
    }
}
