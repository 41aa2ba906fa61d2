//! One-time integration of a density over consecutive sub-intervals

use numdist_core::{Density, Result, Tolerance};
use numdist_integrate::Integrator;
use tracing::{instrument, trace};

/// Integrate `density` over each `(lo, hi)` interval, in order
///
/// Fails on the first interval the integrator cannot handle; nothing is
/// returned for the intervals already done.
#[instrument(level = "debug", skip_all, fields(intervals = intervals.len()))]
pub(crate) fn integrate_intervals<D, I>(
    density: &D,
    integrator: &I,
    tolerance: &Tolerance,
    intervals: &[(f64, f64)],
) -> Result<Vec<f64>>
where
    D: Density + ?Sized,
    I: Integrator,
{
    let mut partials = Vec::with_capacity(intervals.len());
    for &(lo, hi) in intervals {
        let result = integrator.integrate(|x| density.density(x), lo, hi, tolerance)?;
        trace!(lo, hi, value = result.value, error = result.abs_error, "partial integral");
        partials.push(result.value);
    }
    Ok(partials)
}

/// Running sums from the left: `out[i] = partials[0] + ... + partials[i - 1]`
///
/// Accumulated in index order, so `out[i] + partials[i] == out[i + 1]` holds
/// bit-for-bit.
pub(crate) fn prefix_sums(partials: &[f64]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(partials.len() + 1);
    let mut acc = 0.0;
    sums.push(acc);
    for &p in partials {
        acc += p;
        sums.push(acc);
    }
    sums
}

/// Running sums from the right: `out[j] = partials[j] + ... + partials[n - 1]`
///
/// `out[n]` is zero and `out[j + 1] + partials[j] == out[j]` bit-for-bit.
pub(crate) fn suffix_sums(partials: &[f64]) -> Vec<f64> {
    let mut sums = vec![0.0; partials.len() + 1];
    for j in (0..partials.len()).rev() {
        sums[j] = sums[j + 1] + partials[j];
    }
    sums
}
