//! Integration collaborator contract

use crate::QuadResult;
use numdist_core::{Result, Tolerance};

/// Definite integration of a scalar function
///
/// # Contract
///
/// - infinite bounds are accepted
/// - `lower == upper` yields zero, `lower > upper` yields the negated
///   integral over `[upper, lower]`
/// - the same inputs always produce bit-identical results
/// - failure to reach the tolerance within the implementation's budget, or
///   non-finite integrand values, is reported as
///   [`numdist_core::Error::NumericFailure`]
pub trait Integrator {
    /// Integrate `f` over `[lower, upper]`
    fn integrate<F>(&self, f: F, lower: f64, upper: f64, tolerance: &Tolerance) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64;

    /// Integrate and keep only the value
    fn integral<F>(&self, f: F, lower: f64, upper: f64, tolerance: &Tolerance) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.integrate(f, lower, upper, tolerance).map(|r| r.value)
    }
}

impl<I: Integrator + ?Sized> Integrator for &I {
    fn integrate<F>(&self, f: F, lower: f64, upper: f64, tolerance: &Tolerance) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        (**self).integrate(f, lower, upper, tolerance)
    }
}
