//! Bracketed root finding
//!
//! [`BrentSolver`] drives `argmin`'s Brent root finder. Brackets whose width
//! overflows `f64` (such as `(-f64::MAX, f64::MAX)`) are halved before the
//! solver sees them, keeping the half that still brackets the root.

use crate::objective::Objective;
use argmin::core::{CostFunction, Executor, State, TerminationReason};
use argmin::solver::brent::BrentRoot;
use numdist_core::math::{brackets_zero, midpoint};
use numdist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default absolute tolerance on the root location
pub const DEFAULT_X_TOLERANCE: f64 = 1e-12;

/// Default iteration budget
///
/// Bisecting the full finite range down to a unit interval already takes
/// about 1024 steps.
pub const DEFAULT_MAX_ITERS: u64 = 5000;

/// Root finder settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootOptions {
    /// Absolute tolerance on the root location
    pub x_tolerance: f64,
    /// Maximum number of solver iterations
    pub max_iters: u64,
}

impl RootOptions {
    /// Create validated options
    pub fn new(x_tolerance: f64, max_iters: u64) -> Result<Self> {
        let options = Self {
            x_tolerance,
            max_iters,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check the tolerance is positive and finite and the budget nonzero
    pub fn validate(&self) -> Result<()> {
        if !(self.x_tolerance.is_finite() && self.x_tolerance > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "Root tolerance {} must be positive and finite",
                self.x_tolerance
            )));
        }
        if self.max_iters == 0 {
            return Err(Error::InvalidArgument(
                "Root finder needs at least one iteration".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            x_tolerance: DEFAULT_X_TOLERANCE,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

/// Root finding over a bracket
///
/// # Contract
///
/// - `low` and `high` must be finite with `low < high`, otherwise
///   [`Error::InvalidArgument`]
/// - an interval that does not bracket a sign change is reported as
///   [`Error::NumericFailure`], never answered with an arbitrary point
/// - a returned root is finite
pub trait RootFinder {
    /// Find `y` in `[low, high]` with `objective(y) == 0`
    fn find_root<O: Objective>(&self, objective: O, low: f64, high: f64) -> Result<f64>;
}

impl<R: RootFinder + ?Sized> RootFinder for &R {
    fn find_root<O: Objective>(&self, objective: O, low: f64, high: f64) -> Result<f64> {
        (**self).find_root(objective, low, high)
    }
}

/// Brent's method via `argmin`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrentSolver {
    options: RootOptions,
}

impl BrentSolver {
    /// Create a solver with validated options
    pub fn new(options: RootOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Solver settings
    pub fn options(&self) -> &RootOptions {
        &self.options
    }
}

/// Adapts an [`Objective`] to `argmin`'s cost function interface
struct ArgminCost<O>(O);

impl<O: Objective> CostFunction for ArgminCost<O> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, y: &f64) -> std::result::Result<f64, argmin::core::Error> {
        self.0.value(*y).map_err(argmin::core::Error::new)
    }
}

/// Recover our error from `argmin`'s, keeping its variant
fn recover(err: anyhow::Error) -> Error {
    match err.downcast::<Error>() {
        Ok(inner) => inner,
        Err(other) => Error::NumericFailure(format!("root finder failed: {other}")),
    }
}

impl RootFinder for BrentSolver {
    fn find_root<O: Objective>(&self, objective: O, low: f64, high: f64) -> Result<f64> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(Error::InvalidArgument(format!(
                "Bracket [{low}, {high}] must be finite with low < high"
            )));
        }

        let (mut low, mut high) = (low, high);
        let mut f_low = objective.value(low)?;
        let mut f_high = objective.value(high)?;
        if f_low == 0.0 {
            return Ok(low);
        }
        if f_high == 0.0 {
            return Ok(high);
        }
        if !brackets_zero(f_low, f_high) {
            return Err(Error::NumericFailure(format!(
                "interval [{low}, {high}] does not bracket a root \
                 (f(low) = {f_low}, f(high) = {f_high})"
            )));
        }

        while !(high - low).is_finite() {
            let mid = midpoint(low, high);
            let f_mid = objective.value(mid)?;
            if f_mid == 0.0 {
                return Ok(mid);
            }
            if brackets_zero(f_low, f_mid) {
                high = mid;
                f_high = f_mid;
            } else {
                low = mid;
                f_low = f_mid;
            }
            debug!(low, high, f_low, f_high, "narrowed overflowing bracket");
        }

        let solver = BrentRoot::new(low, high, self.options.x_tolerance);
        let result = Executor::new(ArgminCost(objective), solver)
            .configure(|state| state.max_iters(self.options.max_iters))
            .run()
            .map_err(recover)?;

        let state = result.state();
        if !matches!(
            state.get_termination_reason(),
            Some(TerminationReason::SolverConverged)
        ) {
            return Err(Error::NumericFailure(format!(
                "Brent solver on [{low}, {high}] stopped without converging after {} iterations ({:?})",
                state.get_iter(),
                state.get_termination_reason()
            )));
        }
        let root = match state.get_param() {
            Some(&root) if root.is_finite() => root,
            other => {
                return Err(Error::NumericFailure(format!(
                    "Brent solver on [{low}, {high}] produced no finite root ({other:?})"
                )))
            }
        };
        debug!(root, iterations = state.get_iter(), "root found");
        Ok(root)
    }
}
