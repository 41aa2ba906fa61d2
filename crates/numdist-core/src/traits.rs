//! Core capabilities of a probability distribution
//!
//! Each capability is a single evaluation operation. Closed-form
//! distributions and numeric engines implement the same traits, so a
//! quantile solver or a test harness can work with either.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Closed interval of the real line on which a distribution lives
///
/// Either end may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Lower end (may be `-inf`)
    pub lower: f64,
    /// Upper end (may be `+inf`)
    pub upper: f64,
}

impl Support {
    /// The whole real line
    pub const REAL_LINE: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    /// The nonnegative half line `[0, inf)`
    pub const NON_NEGATIVE: Self = Self {
        lower: 0.0,
        upper: f64::INFINITY,
    };

    /// Create a support interval
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether `x` lies in the support
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Whether both ends are finite
    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Support clamped to the representable finite range
    ///
    /// Unbounded ends become `-f64::MAX` / `f64::MAX`.
    pub fn finite_bracket(&self) -> (f64, f64) {
        (self.lower.max(f64::MIN), self.upper.min(f64::MAX))
    }
}

impl Default for Support {
    fn default() -> Self {
        Self::REAL_LINE
    }
}

/// Probability density function
///
/// Implementations return a nonnegative value inside the support and NaN
/// outside it. Evaluation must be pure: repeated calls with the same `x`
/// return the same value.
pub trait Density {
    /// Evaluate the density at `x`
    fn density(&self, x: f64) -> f64;
}

/// Cumulative distribution function `F(x) = P(X <= x)`
///
/// # Contract
///
/// - `cdf(-inf) == 0` and `cdf(+inf) == 1`
/// - `cdf(NaN)` is NaN (propagation, not an error)
/// - results for finite `x` lie in `[0, 1]` up to the implementation's
///   configured accuracy
pub trait CumulativeDistribution {
    /// Evaluate the cumulative distribution at `x`
    fn cdf(&self, x: f64) -> Result<f64>;

    /// Interval outside of which the distribution carries no mass
    fn support(&self) -> Support {
        Support::REAL_LINE
    }
}

/// Complementary cumulative distribution (survival function)
pub trait ComplementaryCumulative {
    /// Evaluate the complementary cumulative distribution at `x`
    fn ccdf(&self, x: f64) -> Result<f64>;
}

/// Quantile function, the inverse of a cumulative distribution
pub trait InverseCumulative {
    /// Smallest `x` with `cdf(x) == p`
    ///
    /// Returns [`crate::Error::Domain`] for `p` outside `[0, 1]`.
    fn inverse_cdf(&self, p: f64) -> Result<f64>;
}

impl<D: Density + ?Sized> Density for &D {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }
}

impl<D: Density + ?Sized> Density for Box<D> {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }
}

impl<C: CumulativeDistribution + ?Sized> CumulativeDistribution for &C {
    #[inline]
    fn cdf(&self, x: f64) -> Result<f64> {
        (**self).cdf(x)
    }

    fn support(&self) -> Support {
        (**self).support()
    }
}

impl<C: CumulativeDistribution + ?Sized> CumulativeDistribution for Box<C> {
    #[inline]
    fn cdf(&self, x: f64) -> Result<f64> {
        (**self).cdf(x)
    }

    fn support(&self) -> Support {
        (**self).support()
    }
}
