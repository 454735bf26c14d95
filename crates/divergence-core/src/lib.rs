//! # divergence-core
//!
//! Per-property divergence between gold and system probability distributions.
//!
//! Each evaluation row maps a property (e.g. `gender`) to a sparse
//! distribution over that property's categories. Rows are scored pairwise
//! against a fixed [`Domain`], one Jensen-Shannon score per property per row.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Visible failures**: Degenerate distributions are errors, never `0.0`
//! 3. **Stable layout**: Vectors are aligned in the domain's category order
//!
//! ## Example
//!
//! ```rust
//! use divergence_core::{evaluate_all_rows, Distribution, Domain, Row};
//!
//! let domain: Domain = [("gender", ["male", "female"])].into_iter().collect();
//! let gold: Row = [("gender", [("male", 1.0)].into_iter().collect::<Distribution>())]
//!     .into_iter()
//!     .collect();
//! let sys: Row = [(
//!     "gender",
//!     [("male", 0.8), ("female", 0.2)].into_iter().collect::<Distribution>(),
//! )]
//! .into_iter()
//! .collect();
//!
//! let results = evaluate_all_rows(&domain, &[gold], &[sys])?;
//! for (property, mean) in results.means() {
//!     println!("{}: {:.4}", property, mean);
//! }
//! # Ok::<(), divergence_core::EvaluationError>(())
//! ```

pub mod alignment;
pub mod divergence;
pub mod domain;
pub mod types;

// Re-export main types at crate root
pub use alignment::{align, compute_property_divergence};
pub use divergence::{js, kl, sanitize, DivergenceError, EPS};
pub use domain::{Domain, DomainError};
pub use types::{DivergenceResults, Distribution, Row};

use thiserror::Error;

/// Errors that can occur during batch evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Divergence error: {0}")]
    Divergence(#[from] DivergenceError),

    #[error("Row count mismatch: {gold} gold rows vs {system} system rows")]
    RowCountMismatch { gold: usize, system: usize },

    #[error("Property '{0}' is not declared in the domain")]
    UnknownProperty(String),

    #[error("System row {row} has no property '{property}'")]
    MissingProperty { row: usize, property: String },
}

/// Score every gold row against the system row at the same index.
///
/// Properties are driven by the gold row: each of its properties must be
/// declared in `domain` and present in the paired system row. Extra
/// properties on the system side are ignored.
///
/// # Returns
///
/// Scores per property, one entry per row that carried the property, in
/// row order. The first failing row/property aborts the whole pass.
pub fn evaluate_all_rows(
    domain: &Domain,
    gold_rows: &[Row],
    sys_rows: &[Row],
) -> Result<DivergenceResults, EvaluationError> {
    if gold_rows.len() != sys_rows.len() {
        return Err(EvaluationError::RowCountMismatch {
            gold: gold_rows.len(),
            system: sys_rows.len(),
        });
    }

    let mut divergences = DivergenceResults::new();

    for (index, (gold_row, sys_row)) in gold_rows.iter().zip(sys_rows).enumerate() {
        tracing::trace!(row = index, properties = gold_row.len(), "Evaluating row");

        for (property, gold_values) in gold_row.iter() {
            let domain_values = domain
                .categories(property)
                .ok_or_else(|| EvaluationError::UnknownProperty(property.to_string()))?;

            let sys_values =
                sys_row
                    .get(property)
                    .ok_or_else(|| EvaluationError::MissingProperty {
                        row: index,
                        property: property.to_string(),
                    })?;

            let score = compute_property_divergence(domain_values, gold_values, sys_values)?;
            tracing::trace!(row = index, property, score, "Recorded divergence");

            divergences.record(property, score);
        }
    }

    Ok(divergences)
}
