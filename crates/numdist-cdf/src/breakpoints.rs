//! Validated breakpoint sequences and the bucket search over them

use numdist_core::math::is_strictly_increasing;
use numdist_core::{Error, Result};
use std::ops::Index;

/// Non-empty, finite, strictly increasing sequence of subdivision points
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    points: Vec<f64>,
}

impl Breakpoints {
    /// Validate a sequence of breakpoints
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the sequence is empty, contains a
    /// non-finite value, or is not strictly increasing (unsorted or
    /// duplicated entries).
    pub fn new(points: impl Into<Vec<f64>>) -> Result<Self> {
        let points = points.into();
        if points.is_empty() {
            return Err(Error::invalid_breakpoints("must not be empty"));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(Error::invalid_breakpoints(&format!(
                "must be finite (found {bad})"
            )));
        }
        if !is_strictly_increasing(&points) {
            return Err(Error::invalid_breakpoints(
                "must be strictly increasing without duplicates",
            ));
        }
        Ok(Self { points })
    }

    /// Check every breakpoint lies strictly above `lower`
    pub fn check_above(&self, lower: f64) -> Result<()> {
        if self.first() <= lower {
            return Err(Error::invalid_breakpoints(&format!(
                "must lie strictly above the lower bound {lower} (first is {})",
                self.first()
            )));
        }
        Ok(())
    }

    /// Check every breakpoint lies strictly below `upper`
    pub fn check_below(&self, upper: f64) -> Result<()> {
        if self.last() >= upper {
            return Err(Error::invalid_breakpoints(&format!(
                "must lie strictly below the upper bound {upper} (last is {})",
                self.last()
            )));
        }
        Ok(())
    }

    /// Number of breakpoints
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no breakpoints, never the case once validated
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest breakpoint
    #[inline]
    pub fn first(&self) -> f64 {
        self.points[0]
    }

    /// Largest breakpoint
    #[inline]
    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Breakpoints as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Number of breakpoints strictly less than `x`
    ///
    /// A value equal to a breakpoint is not counted, so `count_below(bp[k])`
    /// is `k`: the breakpoint's own sub-interval is excluded from the prefix
    /// and recovered by the residual integral.
    #[inline]
    pub fn count_below(&self, x: f64) -> usize {
        self.points.partition_point(|&p| p < x)
    }

    /// Index of the first breakpoint strictly greater than `x`
    ///
    /// Equals `len()` when no breakpoint exceeds `x`. A value equal to
    /// `bp[k]` gives `k + 1`.
    #[inline]
    pub fn first_above(&self, x: f64) -> usize {
        self.points.partition_point(|&p| p <= x)
    }

    /// Number of breakpoints strictly greater than `x`
    #[inline]
    pub fn count_above(&self, x: f64) -> usize {
        self.len() - self.first_above(x)
    }
}

impl Index<usize> for Breakpoints {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.points[index]
    }
}

impl TryFrom<Vec<f64>> for Breakpoints {
    type Error = Error;

    fn try_from(points: Vec<f64>) -> Result<Self> {
        Self::new(points)
    }
}
