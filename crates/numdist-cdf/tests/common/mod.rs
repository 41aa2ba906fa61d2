//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use numdist_core::{Density, StatrsDensity};
use statrs::distribution::Normal;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Breakpoints used across the normal reference tests
pub const NORMAL_BREAKPOINTS: [f64; 5] = [-3.0, -1.0, 0.0, 1.0, 3.0];

pub fn standard_normal() -> StatrsDensity<Normal> {
    StatrsDensity::new(Normal::new(0.0, 1.0).unwrap())
}

/// Density wrapper that records how often it is evaluated
pub struct CountingDensity<D> {
    inner: D,
    calls: AtomicUsize,
}

impl<D> CountingDensity<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<D: Density> Density for CountingDensity<D> {
    fn density(&self, x: f64) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.density(x)
    }
}
