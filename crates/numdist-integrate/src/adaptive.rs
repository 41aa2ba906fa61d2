//! Globally adaptive Gauss-Kronrod integration
//!
//! The range is first mapped onto pieces in a `t` coordinate, then the
//! segment with the largest error estimate is bisected until the summed
//! error fits the tolerance budget.
//!
//! Mappings (QUADPACK `qagi` style, `x = anchor +/- u` with `u = (1 - t) / t`):
//!
//! | range | pieces |
//! |---|---|
//! | `(-inf, inf)` | tails folded onto `t` in `(0, 1]` |
//! | `[a, inf)` | anchored at `a`, `t` in `(0, 1]` |
//! | `(-inf, b]` | anchored at `b`, `t` in `(0, 1]` |
//! | `[a, b]`, narrow | identity |
//! | `[a, b]`, wide | split at the midpoint, each half anchored at its own end |
//!
//! Every mapped piece starts out cut at `u = 1, 10, 100, ...`, one segment
//! per decade of distance from the anchor. Finite pieces are cut up to
//! their far end, half lines up to ten times `max(|anchor|, 1e6)`.

use crate::gauss_kronrod::{qk15, RuleEstimate, EVALUATIONS_PER_RULE};
use crate::{Integrator, QuadOptions, QuadResult};
use numdist_core::math::midpoint;
use numdist_core::{Error, Result, Tolerance};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Finite ranges wider than this are integrated through end-anchored maps
const WIDE_INTERVAL: f64 = 100.0;

/// Smallest distance from the anchor up to which half-line pieces are cut
const MIN_REACH: f64 = 1e6;

/// Change of variables from the `t` coordinate to `x`
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mapping {
    Identity,
    /// `x = anchor + (1 - t) / t`
    Above { anchor: f64 },
    /// `x = anchor - (1 - t) / t`
    Below { anchor: f64 },
    /// `x = +/- (1 - t) / t`
    Folded,
}

impl Mapping {
    #[inline]
    fn eval<F: Fn(f64) -> f64>(&self, f: &F, t: f64) -> f64 {
        match *self {
            Mapping::Identity => f(t),
            Mapping::Above { anchor } => jacobian(f, anchor + (1.0 - t) / t, t),
            Mapping::Below { anchor } => jacobian(f, anchor - (1.0 - t) / t, t),
            Mapping::Folded => {
                let u = (1.0 - t) / t;
                if u.is_finite() {
                    scale(f(u) + f(-u), t)
                } else {
                    0.0
                }
            }
        }
    }
}

/// `f(x) / t^2`; abscissae past the finite range carry no mass
#[inline]
fn jacobian<F: Fn(f64) -> f64>(f: &F, x: f64, t: f64) -> f64 {
    if x.is_finite() {
        scale(f(x), t)
    } else {
        0.0
    }
}

/// `fx / t^2`, with zero mass staying zero when `t^2` underflows
#[inline]
fn scale(fx: f64, t: f64) -> f64 {
    if fx == 0.0 {
        0.0
    } else {
        fx / t / t
    }
}

/// `t` coordinate of the point at distance `u` from the anchor
#[inline]
fn t_of(u: f64) -> f64 {
    1.0 / (1.0 + u)
}

/// Segments of a mapped piece covering `u` in `[0, u_max]`
///
/// Cuts fall at each power of ten below `u_max` that does not exceed
/// `reach`; `u_max` may be infinite.
fn decades(mapping: Mapping, u_max: f64, reach: f64) -> Vec<(Mapping, f64, f64)> {
    let mut cuts = vec![0.0];
    let mut u = 1.0;
    while u < u_max && u <= reach {
        cuts.push(u);
        u *= 10.0;
    }
    cuts.push(u_max);
    cuts.windows(2)
        .map(|w| (mapping, t_of(w[1]), t_of(w[0])))
        .collect()
}

/// Reach of a half-line piece anchored at `anchor`
#[inline]
fn half_line_reach(anchor: f64) -> f64 {
    10.0 * anchor.abs().max(MIN_REACH)
}

/// Segments `(mapping, t_lo, t_hi)` covering `[lower, upper]`, `lower < upper`
fn plan(lower: f64, upper: f64) -> Vec<(Mapping, f64, f64)> {
    match (lower.is_finite(), upper.is_finite()) {
        (false, false) => decades(Mapping::Folded, f64::INFINITY, MIN_REACH * 10.0),
        (true, false) => decades(
            Mapping::Above { anchor: lower },
            f64::INFINITY,
            half_line_reach(lower),
        ),
        (false, true) => decades(
            Mapping::Below { anchor: upper },
            f64::INFINITY,
            half_line_reach(upper),
        ),
        (true, true) => {
            if upper - lower <= WIDE_INTERVAL {
                return vec![(Mapping::Identity, lower, upper)];
            }
            let mid = midpoint(lower, upper);
            let mut pieces = decades(Mapping::Above { anchor: lower }, mid - lower, f64::INFINITY);
            pieces.extend(decades(
                Mapping::Below { anchor: upper },
                upper - mid,
                f64::INFINITY,
            ));
            pieces
        }
    }
}

/// A segment of one piece together with its rule estimate
#[derive(Debug, Clone, Copy)]
struct Segment {
    mapping: Mapping,
    lo: f64,
    hi: f64,
    estimate: RuleEstimate,
}

impl Segment {
    fn new<F: Fn(f64) -> f64>(f: &F, mapping: Mapping, lo: f64, hi: f64) -> Result<Self> {
        let estimate = qk15(&|t| mapping.eval(f, t), lo, hi);
        if !estimate.value.is_finite() || !estimate.error.is_finite() {
            return Err(Error::non_finite(&format!("integrand on [{lo}, {hi}]")));
        }
        Ok(Self {
            mapping,
            lo,
            hi,
            estimate,
        })
    }

    #[inline]
    fn key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.estimate.error)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Globally adaptive 15-point Gauss-Kronrod integrator
///
/// # Example
///
/// ```rust
/// use numdist_integrate::{AdaptiveGaussKronrod, Integrator};
/// use numdist_core::Tolerance;
///
/// let quad = AdaptiveGaussKronrod::default();
/// let r = quad
///     .integrate(|x: f64| (-x * x / 2.0).exp(), f64::NEG_INFINITY, f64::INFINITY, &Tolerance::default())
///     .unwrap();
/// assert!((r.value - (2.0 * std::f64::consts::PI).sqrt()).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptiveGaussKronrod {
    options: QuadOptions,
}

impl AdaptiveGaussKronrod {
    /// Create an integrator with the given options
    pub fn new(options: QuadOptions) -> Self {
        Self { options }
    }

    /// Configured options
    pub fn options(&self) -> &QuadOptions {
        &self.options
    }

    fn integrate_ordered<F>(&self, f: &F, lower: f64, upper: f64, tolerance: &Tolerance) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        let mut heap = BinaryHeap::new();
        for (mapping, lo, hi) in plan(lower, upper) {
            heap.push(Segment::new(f, mapping, lo, hi)?);
        }
        let mut evaluations = heap.len() * EVALUATIONS_PER_RULE;
        let mut subdivisions = 0;

        loop {
            let (value, error) = totals(&heap);
            if error <= tolerance.budget(value) {
                trace!(
                    lower,
                    upper,
                    value,
                    error,
                    subdivisions,
                    "integration converged"
                );
                return Ok(QuadResult {
                    value,
                    abs_error: error,
                    evaluations,
                    subdivisions,
                });
            }

            if subdivisions >= self.options.limit {
                debug!(lower, upper, value, error, "subdivision limit reached");
                return Err(Error::NumericFailure(format!(
                    "integral over [{lower}, {upper}] did not reach tolerance after {} subdivisions \
                     (estimate {value}, error {error})",
                    self.options.limit
                )));
            }

            let worst = match heap.pop() {
                Some(segment) => segment,
                None => return Ok(QuadResult::ZERO),
            };
            let mid = midpoint(worst.lo, worst.hi);
            if !(worst.lo < mid && mid < worst.hi) {
                return Err(Error::NumericFailure(format!(
                    "integral over [{lower}, {upper}]: segment [{}, {}] cannot be subdivided further",
                    worst.lo, worst.hi
                )));
            }
            heap.push(Segment::new(f, worst.mapping, worst.lo, mid)?);
            heap.push(Segment::new(f, worst.mapping, mid, worst.hi)?);
            evaluations += 2 * EVALUATIONS_PER_RULE;
            subdivisions += 1;
        }
    }
}

/// Summed value and error over all segments
fn totals(heap: &BinaryHeap<Segment>) -> (f64, f64) {
    heap.iter().fold((0.0, 0.0), |(value, error), s| {
        (value + s.estimate.value, error + s.estimate.error)
    })
}

impl Integrator for AdaptiveGaussKronrod {
    fn integrate<F>(&self, f: F, lower: f64, upper: f64, tolerance: &Tolerance) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        if lower.is_nan() || upper.is_nan() {
            return Err(Error::InvalidArgument(format!(
                "Integration bounds [{lower}, {upper}] must not be NaN"
            )));
        }
        tolerance.validate()?;

        match lower.partial_cmp(&upper) {
            Some(Ordering::Less) => self.integrate_ordered(&f, lower, upper, tolerance),
            Some(Ordering::Greater) => self
                .integrate_ordered(&f, upper, lower, tolerance)
                .map(QuadResult::negated),
            _ => Ok(QuadResult::ZERO),
        }
    }
}
