//! Floating-point utilities shared across the numdist crates
//!
//! Helpers here must stay well defined over the whole finite `f64` range,
//! including brackets such as `(-f64::MAX, f64::MAX)` whose width overflows.

/// Midpoint of two finite values that never overflows
///
/// `(a + b) / 2` overflows for `a = b = f64::MAX`; halving first does not.
#[inline]
pub fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * a + 0.5 * b
}

/// Whether a slice is strictly increasing (no duplicates)
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// Opposite-sign (or zero) test used by bracketing solvers
#[inline]
pub fn brackets_zero(fa: f64, fb: f64) -> bool {
    !((fa > 0.0 && fb > 0.0) || (fa < 0.0 && fb < 0.0))
}
