//! Complementary cumulative distribution of an arbitrary density
//!
//! Mirror image of [`crate::NumericCdf`]: partial integrals run from each
//! breakpoint up to the next (the last one up to the upper bound `b`) and
//! are summed from the right.

use crate::breakpoints::Breakpoints;
use crate::partials::{integrate_intervals, suffix_sums};
use numdist_core::{ComplementaryCumulative, Density, Error, Result, Tolerance};
use numdist_integrate::{AdaptiveGaussKronrod, Integrator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Values returned for infinite arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CcdfBoundary {
    /// `ccdf(-inf) = 1`, `ccdf(+inf) = 0`, consistent with `1 - cdf`
    #[default]
    Complementary,
    /// `ccdf(-inf) = 0`, `ccdf(+inf) = 1`, the same values a CDF returns
    MirrorCdf,
}

impl CcdfBoundary {
    fn at_neg_infinity(self) -> f64 {
        match self {
            Self::Complementary => 1.0,
            Self::MirrorCdf => 0.0,
        }
    }

    fn at_pos_infinity(self) -> f64 {
        match self {
            Self::Complementary => 0.0,
            Self::MirrorCdf => 1.0,
        }
    }
}

/// Numeric complementary cumulative distribution `G(x) = integral of f over [x, b]`
///
/// # Example
///
/// ```rust
/// use numdist_cdf::NumericCcdf;
/// use numdist_core::{adapters::StatrsDensity, ComplementaryCumulative};
/// use statrs::distribution::Normal;
///
/// let pdf = StatrsDensity::new(Normal::new(0.0, 1.0).unwrap());
/// let ccdf = NumericCcdf::new(&pdf, [-3.0, -1.0, 0.0, 1.0, 3.0]).unwrap();
/// assert!((ccdf.ccdf(1.3).unwrap() - 0.09680).abs() < 1e-4);
/// assert_eq!(ccdf.ccdf(f64::NEG_INFINITY).unwrap(), 1.0);
/// ```
pub struct NumericCcdf<'a, D: ?Sized, I = AdaptiveGaussKronrod> {
    density: &'a D,
    breakpoints: Breakpoints,
    /// `partials[j]` covers `[bp[j], bp[j+1]]`, the last one `[bp[n-1], b]`
    partials: Vec<f64>,
    /// `suffix[j]` is the sum of `partials[j..]`
    suffix: Vec<f64>,
    upper: f64,
    boundary: CcdfBoundary,
    tolerance: Tolerance,
    integrator: I,
}

impl<'a, D: Density + ?Sized> NumericCcdf<'a, D> {
    /// Engine over `[x, +inf)` with default tolerance and integrator
    pub fn new(density: &'a D, breakpoints: impl Into<Vec<f64>>) -> Result<Self> {
        Self::with_upper_bound(density, breakpoints, f64::INFINITY)
    }

    /// Engine over `[x, upper]` with default tolerance and integrator
    pub fn with_upper_bound(
        density: &'a D,
        breakpoints: impl Into<Vec<f64>>,
        upper: f64,
    ) -> Result<Self> {
        Self::with_config(
            density,
            breakpoints,
            upper,
            Tolerance::default(),
            AdaptiveGaussKronrod::default(),
        )
    }
}

impl<'a, D, I> NumericCcdf<'a, D, I>
where
    D: Density + ?Sized,
    I: Integrator,
{
    /// Fully configured engine
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] for malformed breakpoints, an upper bound
    ///   that is NaN or `-inf`, breakpoints not strictly below the upper
    ///   bound, or an invalid tolerance. No integration is attempted.
    /// - [`Error::NumericFailure`] if a sub-interval cannot be integrated.
    pub fn with_config(
        density: &'a D,
        breakpoints: impl Into<Vec<f64>>,
        upper: f64,
        tolerance: Tolerance,
        integrator: I,
    ) -> Result<Self> {
        tolerance.validate()?;
        if upper.is_nan() || upper == f64::NEG_INFINITY {
            return Err(Error::InvalidArgument(format!(
                "Upper bound {upper} must be finite or +inf"
            )));
        }
        let breakpoints = Breakpoints::new(breakpoints)?;
        breakpoints.check_below(upper)?;

        let points = breakpoints.as_slice();
        let intervals: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .zip(points[1..].iter().copied().chain(std::iter::once(upper)))
            .collect();
        let partials = integrate_intervals(density, &integrator, &tolerance, &intervals)?;
        let suffix = suffix_sums(&partials);

        debug!(
            breakpoints = breakpoints.len(),
            upper,
            mass = suffix[0],
            "numeric CCDF precomputed"
        );

        Ok(Self {
            density,
            breakpoints,
            partials,
            suffix,
            upper,
            boundary: CcdfBoundary::default(),
            tolerance,
            integrator,
        })
    }

    /// Choose the values returned at the signed infinities
    pub fn boundary(mut self, boundary: CcdfBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Evaluate the complementary cumulative distribution at `x`
    ///
    /// - infinities follow the configured [`CcdfBoundary`], NaN gives NaN
    /// - finite `x >= b` gives exactly 0
    /// - otherwise the cached suffix above `x` plus one residual integral
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        if x == f64::NEG_INFINITY {
            return Ok(self.boundary.at_neg_infinity());
        }
        if x == f64::INFINITY {
            return Ok(self.boundary.at_pos_infinity());
        }
        if x >= self.upper {
            return Ok(0.0);
        }

        let j = self.breakpoints.first_above(x);
        let to = if j == self.breakpoints.len() {
            self.upper
        } else {
            self.breakpoints[j]
        };
        let residual = self
            .integrator
            .integral(|t| self.density.density(t), x, to, &self.tolerance)?;
        let value = self.suffix[j] + residual;
        trace!(x, bucket = j, residual, value, "numeric CCDF evaluated");
        Ok(value)
    }

    /// Integral of the density from the first breakpoint to the upper bound
    pub fn total_mass(&self) -> f64 {
        self.suffix[0]
    }

    /// Cached sum of the partial integrals from index `j` on
    ///
    /// `suffix(k)` is the integral from `bp[k]` to the upper bound.
    pub fn suffix(&self, j: usize) -> f64 {
        self.suffix[j]
    }

    /// Breakpoints the engine was built on
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Partial integrals, one per breakpoint
    pub fn partials(&self) -> &[f64] {
        &self.partials
    }

    /// Upper integration bound `b`
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Values returned at the signed infinities
    pub fn boundary_mode(&self) -> CcdfBoundary {
        self.boundary
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

impl<D: ?Sized, I: Clone> Clone for NumericCcdf<'_, D, I> {
    fn clone(&self) -> Self {
        Self {
            density: self.density,
            breakpoints: self.breakpoints.clone(),
            partials: self.partials.clone(),
            suffix: self.suffix.clone(),
            upper: self.upper,
            boundary: self.boundary,
            tolerance: self.tolerance,
            integrator: self.integrator.clone(),
        }
    }
}

impl<D: ?Sized, I: fmt::Debug> fmt::Debug for NumericCcdf<'_, D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericCcdf")
            .field("breakpoints", &self.breakpoints)
            .field("partials", &self.partials)
            .field("upper", &self.upper)
            .field("boundary", &self.boundary)
            .field("tolerance", &self.tolerance)
            .field("integrator", &self.integrator)
            .finish_non_exhaustive()
    }
}

impl<D, I> ComplementaryCumulative for NumericCcdf<'_, D, I>
where
    D: Density + ?Sized,
    I: Integrator,
{
    #[inline]
    fn ccdf(&self, x: f64) -> Result<f64> {
        self.evaluate(x)
    }
}
