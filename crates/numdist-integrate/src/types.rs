//! Options and results for numeric integration

use serde::{Deserialize, Serialize};

/// Default maximum number of subdivisions
pub const DEFAULT_SUBDIVISION_LIMIT: usize = 200;

/// Options for adaptive quadrature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadOptions {
    /// Maximum number of segment bisections before giving up
    pub limit: usize,
}

impl QuadOptions {
    /// Options with a custom subdivision limit
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUBDIVISION_LIMIT,
        }
    }
}

/// Result of a definite integral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Integral estimate
    pub value: f64,
    /// Estimated absolute error
    pub abs_error: f64,
    /// Number of integrand evaluations
    pub evaluations: usize,
    /// Number of segment bisections performed
    pub subdivisions: usize,
}

impl QuadResult {
    /// Result of integrating over an empty range
    pub const ZERO: Self = Self {
        value: 0.0,
        abs_error: 0.0,
        evaluations: 0,
        subdivisions: 0,
    };

    /// Same result with the sign of the integral flipped
    pub fn negated(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}
