//! Numeric integration for density functions
//!
//! This crate provides the integration collaborator the cumulative engines
//! are built on: the [`Integrator`] contract and a default
//! [`AdaptiveGaussKronrod`] implementation that accepts infinite bounds.
//!
//! # Example
//!
//! ```rust
//! use numdist_core::Tolerance;
//! use numdist_integrate::{AdaptiveGaussKronrod, Integrator};
//!
//! let quad = AdaptiveGaussKronrod::default();
//! let area = quad.integral(|x: f64| (-x).exp(), 0.0, f64::INFINITY, &Tolerance::default()).unwrap();
//! assert!((area - 1.0).abs() < 1e-6);
//! ```

pub mod adaptive;
pub mod gauss_kronrod;
pub mod traits;
pub mod types;

pub use adaptive::AdaptiveGaussKronrod;
pub use traits::Integrator;
pub use types::{QuadOptions, QuadResult, DEFAULT_SUBDIVISION_LIMIT};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AdaptiveGaussKronrod, Integrator, QuadOptions, QuadResult};
}
