//! Cumulative distribution of an arbitrary density
//!
//! The density is integrated once per sub-interval at construction. An
//! evaluation then costs one binary search over the breakpoints plus one
//! integral over the residual stretch from the nearest breakpoint below `x`,
//! independent of how far `x` is from the lower bound.

use crate::breakpoints::Breakpoints;
use crate::partials::{integrate_intervals, prefix_sums};
use numdist_core::{CumulativeDistribution, Density, Error, Result, Support, Tolerance};
use numdist_integrate::{AdaptiveGaussKronrod, Integrator};
use std::fmt;
use tracing::{debug, trace};

/// Numeric cumulative distribution `F(x) = integral of f over [a, x]`
///
/// # Example
///
/// ```rust
/// use numdist_cdf::NumericCdf;
/// use numdist_core::{adapters::StatrsDensity, CumulativeDistribution};
/// use statrs::distribution::Normal;
///
/// let pdf = StatrsDensity::new(Normal::new(0.0, 1.0).unwrap());
/// let cdf = NumericCdf::new(&pdf, [-3.0, -1.0, 0.0, 1.0, 3.0]).unwrap();
/// assert!((cdf.cdf(1.3).unwrap() - 0.90320).abs() < 1e-4);
/// assert_eq!(cdf.cdf(f64::INFINITY).unwrap(), 1.0);
/// ```
pub struct NumericCdf<'a, D: ?Sized, I = AdaptiveGaussKronrod> {
    density: &'a D,
    breakpoints: Breakpoints,
    /// `partials[0]` covers `[a, bp[0]]`, `partials[i]` covers `[bp[i-1], bp[i]]`
    partials: Vec<f64>,
    /// `prefix[i]` is the sum of `partials[..i]`
    prefix: Vec<f64>,
    lower: f64,
    tolerance: Tolerance,
    integrator: I,
}

impl<'a, D: Density + ?Sized> NumericCdf<'a, D> {
    /// Engine over `(-inf, x]` with default tolerance and integrator
    pub fn new(density: &'a D, breakpoints: impl Into<Vec<f64>>) -> Result<Self> {
        Self::with_lower_bound(density, breakpoints, f64::NEG_INFINITY)
    }

    /// Engine over `[lower, x]` with default tolerance and integrator
    pub fn with_lower_bound(
        density: &'a D,
        breakpoints: impl Into<Vec<f64>>,
        lower: f64,
    ) -> Result<Self> {
        Self::with_config(
            density,
            breakpoints,
            lower,
            Tolerance::default(),
            AdaptiveGaussKronrod::default(),
        )
    }
}

impl<'a, D, I> NumericCdf<'a, D, I>
where
    D: Density + ?Sized,
    I: Integrator,
{
    /// Fully configured engine
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] for malformed breakpoints, a lower bound
    ///   that is NaN or `+inf`, breakpoints not strictly above the lower
    ///   bound, or an invalid tolerance. No integration is attempted.
    /// - [`Error::NumericFailure`] if a sub-interval cannot be integrated.
    pub fn with_config(
        density: &'a D,
        breakpoints: impl Into<Vec<f64>>,
        lower: f64,
        tolerance: Tolerance,
        integrator: I,
    ) -> Result<Self> {
        tolerance.validate()?;
        if lower.is_nan() || lower == f64::INFINITY {
            return Err(Error::InvalidArgument(format!(
                "Lower bound {lower} must be finite or -inf"
            )));
        }
        let breakpoints = Breakpoints::new(breakpoints)?;
        breakpoints.check_above(lower)?;

        let intervals: Vec<(f64, f64)> = std::iter::once(lower)
            .chain(breakpoints.as_slice().iter().copied())
            .zip(breakpoints.as_slice().iter().copied())
            .collect();
        let partials = integrate_intervals(density, &integrator, &tolerance, &intervals)?;
        let prefix = prefix_sums(&partials);

        debug!(
            breakpoints = breakpoints.len(),
            lower,
            mass = prefix[prefix.len() - 1],
            "numeric CDF precomputed"
        );

        Ok(Self {
            density,
            breakpoints,
            partials,
            prefix,
            lower,
            tolerance,
            integrator,
        })
    }

    /// Evaluate the cumulative distribution at `x`
    ///
    /// - `-inf` gives exactly 0, `+inf` exactly 1, NaN gives NaN
    /// - finite `x <= a` gives exactly 0
    /// - otherwise the cached prefix below `x` plus one residual integral
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        if x == f64::NEG_INFINITY {
            return Ok(0.0);
        }
        if x == f64::INFINITY {
            return Ok(1.0);
        }
        if x <= self.lower {
            return Ok(0.0);
        }

        let i = self.breakpoints.count_below(x);
        let from = if i == 0 {
            self.lower
        } else {
            self.breakpoints[i - 1]
        };
        let residual = self
            .integrator
            .integral(|t| self.density.density(t), from, x, &self.tolerance)?;
        let value = self.prefix[i] + residual;
        trace!(x, bucket = i, residual, value, "numeric CDF evaluated");
        Ok(value)
    }

    /// Integral of the density from the lower bound to the last breakpoint
    pub fn total_mass(&self) -> f64 {
        self.prefix[self.partials.len()]
    }

    /// Cached sum of the first `i` partial integrals
    ///
    /// `prefix(k + 1)` is the integral from the lower bound to `bp[k]`.
    pub fn prefix(&self, i: usize) -> f64 {
        self.prefix[i]
    }

    /// Breakpoints the engine was built on
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Partial integrals, one per breakpoint
    pub fn partials(&self) -> &[f64] {
        &self.partials
    }

    /// Lower integration bound `a`
    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    /// Tolerance used for every integral
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Density being integrated
    pub fn density(&self) -> &'a D {
        self.density
    }
}

impl<D: ?Sized, I: Clone> Clone for NumericCdf<'_, D, I> {
    fn clone(&self) -> Self {
        Self {
            density: self.density,
            breakpoints: self.breakpoints.clone(),
            partials: self.partials.clone(),
            prefix: self.prefix.clone(),
            lower: self.lower,
            tolerance: self.tolerance,
            integrator: self.integrator.clone(),
        }
    }
}

impl<D: ?Sized, I: fmt::Debug> fmt::Debug for NumericCdf<'_, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericCdf")
            .field("breakpoints", &self.breakpoints)
            .field("partials", &self.partials)
            .field("lower", &self.lower)
            .field("tolerance", &self.tolerance)
            .field("integrator", &self.integrator)
            .finish_non_exhaustive()
    }
}

impl<D, I> CumulativeDistribution for NumericCdf<'_, D, I>
where
    D: Density + ?Sized,
    I: Integrator,
{
    #[inline]
    fn cdf(&self, x: f64) -> Result<f64> {
        self.evaluate(x)
    }

    fn support(&self) -> Support {
        Support::new(self.lower, f64::INFINITY)
    }
}
