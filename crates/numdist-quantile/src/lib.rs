//! Generic quantile solver
//!
//! [`NumericQuantile`] inverts any [`numdist_core::CumulativeDistribution`],
//! closed form or numeric, by bracketed root finding on
//! `cdf(y) - p`. The root finder is pluggable through [`RootFinder`]; the
//! default [`BrentSolver`] runs Brent's method from `argmin`.
//!
//! # Example
//!
//! ```rust
//! use numdist_core::adapters::StatrsCdf;
//! use numdist_quantile::NumericQuantile;
//! use statrs::distribution::Gamma;
//!
//! let gamma = StatrsCdf::new(Gamma::new(2.0, 1.0).unwrap());
//! let quantile = NumericQuantile::new(&gamma).unwrap();
//! let median = quantile.quantile(0.5).unwrap();
//! assert!((median - 1.678346990016661).abs() < 1e-9);
//! ```

pub mod numeric_quantile;
pub mod objective;
pub mod roots;

pub use numeric_quantile::NumericQuantile;
pub use objective::{Objective, QuantileObjective};
pub use roots::{BrentSolver, RootFinder, RootOptions, DEFAULT_MAX_ITERS, DEFAULT_X_TOLERANCE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BrentSolver, NumericQuantile, RootFinder, RootOptions};
}
