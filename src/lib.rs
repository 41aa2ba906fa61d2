//! # numdist
//!
//! Numeric cumulative distributions and quantile solvers for densities
//! that have no closed-form CDF.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`numdist_core`]: capabilities ([`Density`], [`CumulativeDistribution`],
//!   ...), errors, tolerances and `statrs` adapters
//! - [`numdist_integrate`]: adaptive Gauss-Kronrod integration over finite
//!   and infinite ranges
//! - [`numdist_cdf`]: [`NumericCdf`] and [`NumericCcdf`] engines
//! - [`numdist_quantile`]: the [`NumericQuantile`] inverse-CDF solver
//!
//! # Example
//!
//! ```rust
//! use numdist::prelude::*;
//! use numdist::StatrsDensity;
//! use statrs::distribution::Normal;
//!
//! let pdf = StatrsDensity::new(Normal::new(0.0, 1.0).unwrap());
//! let cdf = NumericCdf::new(&pdf, [-3.0, -1.0, 0.0, 1.0, 3.0]).unwrap();
//! let quantile = NumericQuantile::new(&cdf).unwrap();
//!
//! let y = quantile.quantile(0.3).unwrap();
//! assert!((cdf.cdf(y).unwrap() - 0.3).abs() < 1e-9);
//! ```

pub use numdist_cdf;
pub use numdist_core;
pub use numdist_integrate;
pub use numdist_quantile;

pub use numdist_cdf::{Breakpoints, CcdfBoundary, NumericCcdf, NumericCdf};
pub use numdist_core::{
    density_fn, ComplementaryCumulative, CumulativeDistribution, Density, DensityFn, Error,
    InverseCumulative, Result, StatrsCdf, StatrsDensity, Support, Tolerance,
};
pub use numdist_integrate::{AdaptiveGaussKronrod, Integrator, QuadOptions, QuadResult};
pub use numdist_quantile::{BrentSolver, NumericQuantile, RootFinder, RootOptions};

/// Prelude for convenient imports
pub mod prelude {
    pub use numdist_cdf::prelude::*;
    pub use numdist_core::prelude::*;
    pub use numdist_integrate::prelude::*;
    pub use numdist_quantile::prelude::*;
}
