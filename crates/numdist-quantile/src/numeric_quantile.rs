//! Quantiles of any cumulative distribution by bracketed root finding

use crate::objective::QuantileObjective;
use crate::roots::{BrentSolver, RootFinder};
use numdist_core::{CumulativeDistribution, Error, InverseCumulative, Result};
use std::fmt;
use tracing::debug;

/// Inverse of a cumulative distribution
///
/// Solves `cdf(y) = p` for `y` inside a fixed bracket. The default bracket
/// is the distribution's support clamped to the finite range, so an
/// unbounded distribution is searched over `[-f64::MAX, f64::MAX]`.
///
/// # Example
///
/// ```rust
/// use numdist_cdf::NumericCdf;
/// use numdist_core::adapters::StatrsDensity;
/// use numdist_quantile::NumericQuantile;
/// use statrs::distribution::Normal;
///
/// let pdf = StatrsDensity::new(Normal::new(0.0, 1.0).unwrap());
/// let cdf = NumericCdf::new(&pdf, [-3.0, -1.0, 0.0, 1.0, 3.0]).unwrap();
/// let quantile = NumericQuantile::new(&cdf).unwrap();
/// assert!((quantile.quantile(0.3).unwrap() + 0.5244).abs() < 1e-3);
/// ```
pub struct NumericQuantile<'a, C: ?Sized, R = BrentSolver> {
    cdf: &'a C,
    low: f64,
    high: f64,
    solver: R,
}

impl<'a, C: CumulativeDistribution + ?Sized> NumericQuantile<'a, C> {
    /// Solver bracketed by the distribution's support
    pub fn new(cdf: &'a C) -> Result<Self> {
        let (low, high) = cdf.support().finite_bracket();
        Self::with_bracket(cdf, low, high)
    }

    /// Solver over an explicit bracket
    pub fn with_bracket(cdf: &'a C, low: f64, high: f64) -> Result<Self> {
        Self::with_solver(cdf, low, high, BrentSolver::default())
    }
}

impl<'a, C, R> NumericQuantile<'a, C, R>
where
    C: CumulativeDistribution + ?Sized,
    R: RootFinder,
{
    /// Solver with an explicit bracket and root finder
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] unless both ends are finite and
    /// `low < high`.
    pub fn with_solver(cdf: &'a C, low: f64, high: f64, solver: R) -> Result<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(Error::InvalidArgument(format!(
                "Quantile bracket [{low}, {high}] must be finite with low < high"
            )));
        }
        Ok(Self {
            cdf,
            low,
            high,
            solver,
        })
    }

    /// Solve `cdf(y) = p`
    ///
    /// # Errors
    /// - [`Error::Domain`] if `p` is NaN or outside `[0, 1]`
    /// - [`Error::NumericFailure`] if the root finder cannot produce a
    ///   finite root, including when the bracket does not contain one
    ///   (for instance because the cumulative function is not increasing)
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        let objective = QuantileObjective::new(self.cdf, p);
        let root = self.solver.find_root(objective, self.low, self.high)?;
        debug!(p, root, "quantile solved");
        Ok(root)
    }

    /// Solve for several probabilities, stopping at the first failure
    pub fn quantiles(&self, ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile(p)).collect()
    }

    /// Search bracket `(low, high)`
    pub fn bracket(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Root finder in use
    pub fn solver(&self) -> &R {
        &self.solver
    }

    /// Distribution being inverted
    pub fn distribution(&self) -> &'a C {
        self.cdf
    }
}

impl<C, R> InverseCumulative for NumericQuantile<'_, C, R>
where
    C: CumulativeDistribution + ?Sized,
    R: RootFinder,
{
    #[inline]
    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        self.quantile(p)
    }
}

impl<C: ?Sized, R: Clone> Clone for NumericQuantile<'_, C, R> {
    fn clone(&self) -> Self {
        Self {
            cdf: self.cdf,
            low: self.low,
            high: self.high,
            solver: self.solver.clone(),
        }
    }
}

impl<C: ?Sized, R: fmt::Debug> fmt::Debug for NumericQuantile<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericQuantile")
            .field("low", &self.low)
            .field("high", &self.high)
            .field("solver", &self.solver)
            .finish_non_exhaustive()
    }
}
