//! Adapters bridging external distributions to the numdist capabilities
//!
//! Closed-form distributions come from `statrs`; these wrappers expose them
//! through [`Density`], [`CumulativeDistribution`],
//! [`ComplementaryCumulative`] and [`InverseCumulative`] while enforcing the
//! contracts those traits promise (NaN outside the support, exact values at
//! the signed infinities, typed errors instead of panics).
//!
//! # Examples
//!
//! ```rust
//! use numdist_core::adapters::{density_fn, StatrsCdf, StatrsDensity};
//! use numdist_core::{CumulativeDistribution, Density};
//! use statrs::distribution::Normal;
//!
//! let normal = Normal::new(0.0, 1.0).unwrap();
//! let pdf = StatrsDensity::new(normal);
//! let cdf = StatrsCdf::new(normal);
//! assert!(pdf.density(0.0) > 0.39);
//! assert_eq!(cdf.cdf(f64::INFINITY).unwrap(), 1.0);
//!
//! let exponential = density_fn(|x: f64| if x >= 0.0 { (-x).exp() } else { f64::NAN });
//! assert_eq!(exponential.density(0.0), 1.0);
//! ```

use crate::traits::{
    ComplementaryCumulative, CumulativeDistribution, Density, InverseCumulative, Support,
};
use crate::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::statistics::{Max, Min};

/// Density given by a plain function or closure
#[derive(Clone, Copy, Debug)]
pub struct DensityFn<F> {
    f: F,
}

impl<F: Fn(f64) -> f64> DensityFn<F> {
    /// Wrap a function as a density
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Fn(f64) -> f64> Density for DensityFn<F> {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Convenience constructor for [`DensityFn`]
#[inline]
pub fn density_fn<F: Fn(f64) -> f64>(f: F) -> DensityFn<F> {
    DensityFn::new(f)
}

/// Density of a `statrs` continuous distribution
///
/// Points outside the distribution's support evaluate to NaN.
#[derive(Clone, Copy, Debug)]
pub struct StatrsDensity<D> {
    dist: D,
}

impl<D> StatrsDensity<D> {
    /// Wrap a `statrs` distribution
    #[inline]
    pub fn new(dist: D) -> Self {
        Self { dist }
    }

    /// Get reference to the underlying distribution
    #[inline]
    pub const fn inner(&self) -> &D {
        &self.dist
    }
}

impl<D> Density for StatrsDensity<D>
where
    D: Continuous<f64, f64> + Min<f64> + Max<f64>,
{
    fn density(&self, x: f64) -> f64 {
        if x < self.dist.min() || x > self.dist.max() || x.is_nan() {
            return f64::NAN;
        }
        self.dist.pdf(x)
    }
}

/// Closed-form cumulative distribution of a `statrs` distribution
#[derive(Clone, Copy, Debug)]
pub struct StatrsCdf<D> {
    dist: D,
}

impl<D> StatrsCdf<D> {
    /// Wrap a `statrs` distribution
    #[inline]
    pub fn new(dist: D) -> Self {
        Self { dist }
    }

    /// Get reference to the underlying distribution
    #[inline]
    pub const fn inner(&self) -> &D {
        &self.dist
    }

    /// Unwrap to get the underlying distribution
    #[inline]
    pub fn into_inner(self) -> D {
        self.dist
    }
}

impl<D: ContinuousCDF<f64, f64>> CumulativeDistribution for StatrsCdf<D> {
    fn cdf(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        if x == f64::NEG_INFINITY {
            return Ok(0.0);
        }
        if x == f64::INFINITY {
            return Ok(1.0);
        }
        Ok(self.dist.cdf(x))
    }

    fn support(&self) -> Support {
        Support::new(self.dist.min(), self.dist.max())
    }
}

impl<D: ContinuousCDF<f64, f64>> ComplementaryCumulative for StatrsCdf<D> {
    fn ccdf(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        if x == f64::NEG_INFINITY {
            return Ok(1.0);
        }
        if x == f64::INFINITY {
            return Ok(0.0);
        }
        Ok(self.dist.sf(x))
    }
}

impl<D: ContinuousCDF<f64, f64>> InverseCumulative for StatrsCdf<D> {
    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        // statrs panics outside [0, 1]
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        Ok(self.dist.inverse_cdf(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::{Gamma, Normal};

    #[test]
    fn test_statrs_density_support() {
        let gamma = StatrsDensity::new(Gamma::new(2.0, 1.0).unwrap());
        assert!(gamma.density(-1.0).is_nan());
        assert!(gamma.density(f64::NAN).is_nan());
        assert_relative_eq!(gamma.density(1.0), (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_statrs_cdf_boundaries() {
        let normal = StatrsCdf::new(Normal::new(0.0, 1.0).unwrap());
        assert_eq!(normal.cdf(f64::NEG_INFINITY).unwrap(), 0.0);
        assert_eq!(normal.cdf(f64::INFINITY).unwrap(), 1.0);
        assert!(normal.cdf(f64::NAN).unwrap().is_nan());
        assert_eq!(normal.ccdf(f64::NEG_INFINITY).unwrap(), 1.0);
        assert_eq!(normal.ccdf(f64::INFINITY).unwrap(), 0.0);
        assert_relative_eq!(normal.cdf(1.3).unwrap(), 0.9031995154, epsilon = 1e-8);
        assert_relative_eq!(
            normal.cdf(0.7).unwrap() + normal.ccdf(0.7).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_statrs_inverse_rejects_bad_probability() {
        let normal = StatrsCdf::new(Normal::new(0.0, 1.0).unwrap());
        assert!(matches!(normal.inverse_cdf(1.5), Err(Error::Domain(_))));
        assert!(matches!(normal.inverse_cdf(f64::NAN), Err(Error::Domain(_))));
        assert_relative_eq!(normal.inverse_cdf(0.3).unwrap(), -0.5244005, epsilon = 1e-6);
    }

    #[test]
    fn test_statrs_cdf_support() {
        let gamma = StatrsCdf::new(Gamma::new(2.0, 1.0).unwrap());
        assert_eq!(gamma.support(), Support::NON_NEGATIVE);
    }

    #[test]
    fn test_density_fn() {
        let half = density_fn(|x: f64| if (0.0..=2.0).contains(&x) { 0.5 } else { f64::NAN });
        assert_eq!(half.density(1.0), 0.5);
        assert!(half.density(3.0).is_nan());
    }
}
