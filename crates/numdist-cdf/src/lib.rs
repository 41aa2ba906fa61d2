//! Numeric cumulative distributions for arbitrary densities
//!
//! Given only a density and a set of breakpoints, [`NumericCdf`] and
//! [`NumericCcdf`] integrate the density once over every sub-interval at
//! construction and answer each evaluation with a binary search plus a
//! single residual integral.
//!
//! # Example
//!
//! ```rust
//! use numdist_cdf::{NumericCcdf, NumericCdf};
//! use numdist_core::{density_fn, ComplementaryCumulative, CumulativeDistribution};
//!
//! let pdf = density_fn(|x: f64| if x >= 0.0 { (-x).exp() } else { f64::NAN });
//! let cdf = NumericCdf::with_lower_bound(&pdf, [1.0, 2.0, 5.0], 0.0).unwrap();
//! let ccdf = NumericCcdf::new(&pdf, [1.0, 2.0, 5.0]).unwrap();
//!
//! let x = 3.0;
//! assert!((cdf.cdf(x).unwrap() + ccdf.ccdf(x).unwrap() - 1.0).abs() < 1e-6);
//! ```

pub mod breakpoints;
pub mod numeric_ccdf;
pub mod numeric_cdf;
mod partials;

pub use breakpoints::Breakpoints;
pub use numeric_ccdf::{CcdfBoundary, NumericCcdf};
pub use numeric_cdf::NumericCdf;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Breakpoints, CcdfBoundary, NumericCcdf, NumericCdf};
}
