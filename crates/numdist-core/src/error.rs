//! Error types for numeric distributions
//!
//! Provides a unified error type for all numdist crates.

use thiserror::Error;

/// Core error type for distribution construction and evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed construction parameter (breakpoints, bounds, tolerances, brackets)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Evaluation input outside the declared domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Integration or root finding could not produce a result
    #[error("Numeric failure: {0}")]
    NumericFailure(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::Domain(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for a malformed breakpoint sequence
    pub fn invalid_breakpoints(reason: &str) -> Self {
        Self::InvalidArgument(format!("Breakpoints {reason}"))
    }

    /// Create an error for NaN/Inf values produced by a computation
    pub fn non_finite(context: &str) -> Self {
        Self::NumericFailure(format!("{context} produced NaN or infinite values"))
    }

    /// Whether this error reports a numeric failure
    pub fn is_numeric_failure(&self) -> bool {
        matches!(self, Self::NumericFailure(_))
    }
}
