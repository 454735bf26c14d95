//! Divergence functions over dense probability vectors.
//!
//! Two measures are provided:
//! - [`kl`]: Kullback-Leibler divergence on epsilon-floored inputs
//! - [`js`]: Jensen-Shannon divergence on normalized raw inputs
//!
//! The two treat zeros differently. `kl` floors every
//! non-positive entry to [`EPS`] before taking logarithms and never
//! normalizes; `js` normalizes and relies on the `0 * ln(0 / x) = 0`
//! convention instead. All scores are in nats.

use thiserror::Error;

/// Floor substituted for non-positive entries by [`sanitize`].
pub const EPS: f64 = 1e-10;

/// Errors from vector-level divergence computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivergenceError {
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Degenerate distribution: {side} sums to zero and cannot be normalized")]
    DegenerateDistribution { side: &'static str },
}

fn ensure_same_len(p: &[f64], q: &[f64]) -> Result<(), DivergenceError> {
    if p.len() != q.len() {
        return Err(DivergenceError::LengthMismatch {
            left: p.len(),
            right: q.len(),
        });
    }
    Ok(())
}

/// Replace every entry `<= 0` with [`EPS`].
///
/// Positive entries pass through unchanged. The result is not renormalized.
pub fn sanitize(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v > 0.0 { v } else { EPS })
        .collect()
}

/// Kullback-Leibler divergence `D(p || q) = Σ p_i ln(p_i / q_i)`.
///
/// Both inputs are passed through [`sanitize`] first; neither is normalized.
/// Not symmetric.
pub fn kl(p: &[f64], q: &[f64]) -> Result<f64, DivergenceError> {
    ensure_same_len(p, q)?;

    let p = sanitize(p);
    let q = sanitize(q);

    Ok(p.iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| if pi != 0.0 { pi * (pi / qi).ln() } else { 0.0 })
        .sum())
}

/// Jensen-Shannon divergence `(D(p || m) + D(q || m)) / 2` with `m = (p + q) / 2`.
///
/// `p` and `q` are normalized to sum to one. No epsilon floor is applied, so
/// zero entries are allowed. A side that sums to zero is an error.
///
/// Bounded by `[0, ln 2]` and symmetric.
pub fn js(p: &[f64], q: &[f64]) -> Result<f64, DivergenceError> {
    ensure_same_len(p, q)?;

    let p = normalize(p, "p")?;
    let q = normalize(q, "q")?;

    let m: Vec<f64> = p
        .iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| (pi + qi) / 2.0)
        .collect();

    Ok((relative_entropy(&p, &m) + relative_entropy(&q, &m)) / 2.0)
}

/// Divide every element by the vector's own sum.
fn normalize(values: &[f64], side: &'static str) -> Result<Vec<f64>, DivergenceError> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return Err(DivergenceError::DegenerateDistribution { side });
    }
    Ok(values.iter().map(|v| v / total).collect())
}

/// `Σ rel_entr(p_i, m_i)` over two already-normalized vectors.
fn relative_entropy(p: &[f64], m: &[f64]) -> f64 {
    p.iter().zip(m.iter()).map(|(&x, &y)| rel_entr(x, y)).sum()
}

/// Elementwise relative entropy term.
///
/// `x ln(x / y)` when both are positive, `0` when `x == 0`, and `+inf`
/// otherwise. NaN propagates.
fn rel_entr(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else if x > 0.0 && y > 0.0 {
        x * (x / y).ln()
    } else if x == 0.0 && y >= 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::LN_2;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_sanitize_floors_non_positive() {
        assert_eq!(sanitize(&[0.0, -1.0, 0.5]), vec![EPS, EPS, 0.5]);
    }

    #[test]
    fn test_sanitize_keeps_input_untouched() {
        let input = vec![0.0, 0.3];
        let out = sanitize(&input);
        assert_eq!(input, vec![0.0, 0.3]);
        assert_eq!(out, vec![EPS, 0.3]);
    }

    #[test]
    fn test_kl_identical_is_zero() {
        let p = [0.2, 0.3, 0.5];
        assert!(kl(&p, &p).unwrap().abs() < TOL);
    }

    #[test]
    fn test_kl_is_asymmetric() {
        let p = [0.9, 0.1];
        let q = [0.5, 0.5];
        let forward = kl(&p, &q).unwrap();
        let backward = kl(&q, &p).unwrap();
        assert!(forward > 0.0);
        assert!(backward > 0.0);
        assert!((forward - backward).abs() > 1e-3);
    }

    #[test]
    fn test_kl_floors_zeros_in_q() {
        // c = [0, 0, 1] against a = [0.8, 0.2, 0]; only the last term matters
        let c = [0.0, 0.0, 1.0];
        let a = [0.8, 0.2, 0.0];
        let expected = EPS * (EPS / 0.8).ln() + EPS * (EPS / 0.2).ln() + (1.0 / EPS).ln();
        let d = kl(&c, &a).unwrap();
        assert!((d - expected).abs() < 1e-9);
        assert!(d > 20.0);
    }

    #[test]
    fn test_kl_length_mismatch() {
        let err = kl(&[0.5, 0.5], &[1.0]).unwrap_err();
        assert_eq!(err, DivergenceError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_js_disjoint_support_is_ln2() {
        let a = [0.8, 0.2, 0.0];
        let c = [0.0, 0.0, 1.0];
        let ac = js(&a, &c).unwrap();
        let ca = js(&c, &a).unwrap();
        assert!((ac - ca).abs() < TOL);
        assert!((ac - LN_2).abs() < 1e-12);
        assert!(ac >= 0.0 && ac <= LN_2 + TOL);
    }

    #[test]
    fn test_js_normalizes_inputs() {
        let scaled = js(&[8.0, 2.0], &[3.0, 3.0]).unwrap();
        let unit = js(&[0.8, 0.2], &[0.5, 0.5]).unwrap();
        assert!((scaled - unit).abs() < TOL);
    }

    #[test]
    fn test_js_identical_is_zero() {
        let p = [0.1, 0.0, 0.9];
        assert!(js(&p, &p).unwrap().abs() < TOL);
    }

    #[test]
    fn test_js_known_value() {
        // m = [0.9, 0.1]
        let expected = ((0.8 * (0.8f64 / 0.9).ln() + 0.2 * 2.0f64.ln()) + (1.0f64 / 0.9).ln()) / 2.0;
        let d = js(&[0.8, 0.2], &[1.0, 0.0]).unwrap();
        assert!((d - expected).abs() < TOL);
    }

    #[test]
    fn test_js_all_zero_is_degenerate() {
        let err = js(&[0.0, 0.0], &[0.5, 0.5]).unwrap_err();
        assert_eq!(err, DivergenceError::DegenerateDistribution { side: "p" });

        let err = js(&[0.5, 0.5], &[0.0, 0.0]).unwrap_err();
        assert_eq!(err, DivergenceError::DegenerateDistribution { side: "q" });
    }

    #[test]
    fn test_js_empty_is_degenerate() {
        assert!(matches!(
            js(&[], &[]),
            Err(DivergenceError::DegenerateDistribution { .. })
        ));
    }

    #[test]
    fn test_js_nan_propagates() {
        let d = js(&[f64::NAN, 0.5], &[0.5, 0.5]).unwrap();
        assert!(d.is_nan());
    }

    #[test]
    fn test_rel_entr_conventions() {
        assert_eq!(rel_entr(0.0, 0.0), 0.0);
        assert_eq!(rel_entr(0.0, 0.3), 0.0);
        assert_eq!(rel_entr(0.3, 0.0), f64::INFINITY);
        assert_eq!(rel_entr(-0.1, 0.3), f64::INFINITY);
        assert!((rel_entr(0.5, 0.25) - 0.5 * LN_2).abs() < TOL);
    }
}
