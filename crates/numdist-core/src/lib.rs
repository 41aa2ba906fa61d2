//! Core traits and types for numeric probability distributions
//!
//! This crate provides the capabilities every distribution in the workspace
//! speaks, plus the error type, configuration values and floating-point
//! helpers the engines share.
//!
//! # Capabilities
//!
//! - [`Density`]: evaluate a nonnegative density (NaN outside the support)
//! - [`CumulativeDistribution`]: evaluate `P(X <= x)`
//! - [`ComplementaryCumulative`]: evaluate `P(X > x)`
//! - [`InverseCumulative`]: evaluate the quantile function
//!
//! Closed-form distributions from `statrs` plug in through
//! [`adapters::StatrsDensity`] and [`adapters::StatrsCdf`]; numeric engines
//! live in `numdist-cdf` and `numdist-quantile`.
//!
//! # Example
//!
//! ```rust
//! use numdist_core::{adapters::StatrsCdf, CumulativeDistribution, InverseCumulative};
//! use statrs::distribution::Normal;
//!
//! let normal = StatrsCdf::new(Normal::new(0.0, 1.0).unwrap());
//! let p = normal.cdf(1.0).unwrap();
//! let x = normal.inverse_cdf(p).unwrap();
//! assert!((x - 1.0).abs() < 1e-8);
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod math;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use config::{Tolerance, DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE};

pub use traits::{
    ComplementaryCumulative, CumulativeDistribution, Density, InverseCumulative, Support,
};

pub use adapters::{density_fn, DensityFn, StatrsCdf, StatrsDensity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComplementaryCumulative, CumulativeDistribution, Density, Error, InverseCumulative,
        Result, Support, Tolerance,
    };
}
