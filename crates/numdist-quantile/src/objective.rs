//! Objective functions handed to root finders

use numdist_core::{CumulativeDistribution, Error, Result};
use std::fmt;
use tracing::trace;

/// Scalar function whose root is sought
///
/// Evaluation is fallible so collaborator failures (for example an
/// integrator inside a numeric CDF) reach the caller unchanged.
pub trait Objective {
    /// Evaluate the objective at `y`
    fn value(&self, y: f64) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(f64) -> Result<f64>,
{
    #[inline]
    fn value(&self, y: f64) -> Result<f64> {
        self(y)
    }
}

/// `cdf(y) - target`, the function a quantile is the root of
///
/// Only finite `y` are accepted and a NaN cumulative value is rejected, so
/// a root finder can never return a NaN root through this objective.
pub struct QuantileObjective<'a, C: ?Sized> {
    cdf: &'a C,
    target: f64,
}

impl<'a, C: CumulativeDistribution + ?Sized> QuantileObjective<'a, C> {
    /// Objective for the quantile of `cdf` at probability `target`
    pub fn new(cdf: &'a C, target: f64) -> Self {
        Self { cdf, target }
    }

    /// Target probability
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<C: CumulativeDistribution + ?Sized> Objective for QuantileObjective<'_, C> {
    fn value(&self, y: f64) -> Result<f64> {
        if !y.is_finite() {
            return Err(Error::NumericFailure(format!(
                "quantile objective evaluated at non-finite point {y}"
            )));
        }
        let cumulative = self.cdf.cdf(y)?;
        if cumulative.is_nan() {
            return Err(Error::NumericFailure(format!(
                "cumulative distribution returned NaN at {y}"
            )));
        }
        let value = cumulative - self.target;
        trace!(y, cumulative, value, "quantile objective");
        Ok(value)
    }
}

impl<C: ?Sized> Clone for QuantileObjective<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for QuantileObjective<'_, C> {}

impl<C: ?Sized> fmt::Debug for QuantileObjective<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantileObjective")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
