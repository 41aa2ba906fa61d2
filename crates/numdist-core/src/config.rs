//! Configuration types shared by the numeric engines

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default relative tolerance for numeric integration
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-6;

/// Default absolute tolerance for numeric integration
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 0.0;

/// Accuracy requested from an integrator
///
/// An integral estimate `I` with error estimate `E` is accepted once
/// `E <= max(absolute, relative * |I|)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Relative tolerance
    pub relative: f64,
    /// Absolute tolerance
    pub absolute: f64,
}

impl Tolerance {
    /// Create a validated tolerance
    ///
    /// Both values must be finite and nonnegative. A zero absolute tolerance
    /// needs a relative tolerance the integrator can actually reach, so
    /// `relative` must then be at least `50 * f64::EPSILON`.
    pub fn new(relative: f64, absolute: f64) -> Result<Self> {
        let tolerance = Self { relative, absolute };
        tolerance.validate()?;
        Ok(tolerance)
    }

    /// Relative-only tolerance
    pub fn relative(relative: f64) -> Result<Self> {
        Self::new(relative, 0.0)
    }

    /// Check the invariants of a tolerance built from public fields
    pub fn validate(&self) -> Result<()> {
        if !self.relative.is_finite() || self.relative < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "Relative tolerance {} must be finite and nonnegative",
                self.relative
            )));
        }
        if !self.absolute.is_finite() || self.absolute < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "Absolute tolerance {} must be finite and nonnegative",
                self.absolute
            )));
        }
        if self.absolute == 0.0 && self.relative < 50.0 * f64::EPSILON {
            return Err(Error::InvalidArgument(format!(
                "Relative tolerance {} is unreachable without an absolute tolerance",
                self.relative
            )));
        }
        Ok(())
    }

    /// Error budget for an estimate of the given magnitude
    #[inline]
    pub fn budget(&self, estimate: f64) -> f64 {
        self.absolute.max(self.relative * estimate.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE_TOLERANCE,
            absolute: DEFAULT_ABSOLUTE_TOLERANCE,
        }
    }
}
