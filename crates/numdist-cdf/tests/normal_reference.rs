//! Numeric engines over closed-form densities, checked against statrs

mod common;

use common::{assert_relative_eq, standard_normal, NORMAL_BREAKPOINTS};
use numdist_cdf::{CcdfBoundary, NumericCcdf, NumericCdf};
use numdist_core::{
    ComplementaryCumulative, CumulativeDistribution, Density, StatrsDensity, Tolerance,
};
use numdist_integrate::AdaptiveGaussKronrod;
use proptest::prelude::*;
use statrs::distribution::{ContinuousCDF, Gamma, LogNormal, Normal};

#[test]
fn test_normal_cdf_matches_closed_form() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let pdf = standard_normal();
    let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    let ccdf = NumericCcdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();

    for &x in &[-6.0, -3.5, -3.0, -2.2, -0.4, 0.0, 0.9, 1.3, 2.999, 4.5, 8.0] {
        assert_relative_eq!(cdf.cdf(x).unwrap(), normal.cdf(x), epsilon = 1e-7);
        assert_relative_eq!(ccdf.ccdf(x).unwrap(), normal.sf(x), epsilon = 1e-7);
    }
}

#[test]
fn test_breakpoint_values_equal_cached_sums() {
    let pdf = standard_normal();
    let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    let ccdf = NumericCcdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    for (k, &bp) in NORMAL_BREAKPOINTS.iter().enumerate() {
        assert_eq!(cdf.cdf(bp).unwrap(), cdf.prefix(k + 1));
        assert_eq!(ccdf.ccdf(bp).unwrap(), ccdf.suffix(k));
    }
}

#[test]
fn test_complement_sums_to_one() {
    let pdf = standard_normal();
    let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    let ccdf = NumericCcdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    for &x in &[-5.0, -1.0, -0.25, 0.0, 0.7, 2.0, 3.0, 6.0] {
        let total = cdf.cdf(x).unwrap() + ccdf.ccdf(x).unwrap();
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }
    // Holds at the infinities only in the complementary mode
    assert_eq!(
        cdf.cdf(f64::NEG_INFINITY).unwrap() + ccdf.ccdf(f64::NEG_INFINITY).unwrap(),
        1.0
    );
    let mirrored = ccdf.clone().boundary(CcdfBoundary::MirrorCdf);
    assert_eq!(
        cdf.cdf(f64::INFINITY).unwrap() + mirrored.ccdf(f64::INFINITY).unwrap(),
        2.0
    );
}

#[test]
fn test_single_breakpoint() {
    let pdf = standard_normal();
    let cdf = NumericCdf::new(&pdf, [0.0]).unwrap();
    assert_eq!(cdf.partials().len(), 1);
    assert_relative_eq!(cdf.cdf(0.0).unwrap(), 0.5, epsilon = 1e-7);
    assert_relative_eq!(cdf.cdf(-2.0).unwrap(), 0.022750131948179195, epsilon = 1e-7);
    assert_relative_eq!(cdf.cdf(2.0).unwrap(), 0.9772498680518208, epsilon = 1e-7);
}

#[test]
fn test_gamma_with_lower_bound() {
    let gamma = Gamma::new(2.0, 1.0).unwrap();
    let pdf = StatrsDensity::new(gamma);
    let cdf = NumericCdf::with_lower_bound(&pdf, [0.5, 1.0, 2.0, 4.0, 8.0], 0.0).unwrap();
    let ccdf = NumericCcdf::new(&pdf, [0.5, 1.0, 2.0, 4.0, 8.0]).unwrap();

    for &x in &[0.01, 0.3, 1.0, 2.5, 6.0, 15.0] {
        assert_relative_eq!(cdf.cdf(x).unwrap(), gamma.cdf(x), epsilon = 1e-7);
        assert_relative_eq!(ccdf.ccdf(x).unwrap(), gamma.sf(x), max_relative = 1e-5);
    }
    // Far beyond the last breakpoint the residual reaches the whole tail
    assert_relative_eq!(cdf.cdf(1e200).unwrap(), 1.0, epsilon = 1e-7);
}

#[test]
fn test_lognormal_tail() {
    let lognormal = LogNormal::new(0.0, 0.75).unwrap();
    let pdf = StatrsDensity::new(lognormal);
    let ccdf = NumericCcdf::new(&pdf, [0.5, 1.0, 2.0, 5.0]).unwrap();
    for &x in &[3.0, 7.0, 12.0] {
        assert_relative_eq!(ccdf.ccdf(x).unwrap(), lognormal.sf(x), max_relative = 1e-5);
    }
}

#[test]
fn test_concurrent_evaluation() {
    let pdf = standard_normal();
    let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    let points: Vec<f64> = (0..64).map(|i| -4.0 + i as f64 * 0.125).collect();
    let sequential: Vec<f64> = points.iter().map(|&x| cdf.cdf(x).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| points.iter().map(|&x| cdf.cdf(x).unwrap()).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            let values = handle.join().unwrap();
            assert_eq!(values, sequential);
        }
    });
}

#[test]
fn test_custom_tolerance() {
    let pdf = standard_normal();
    let normal = Normal::new(0.0, 1.0).unwrap();
    let tight = Tolerance::new(1e-12, 0.0).unwrap();
    let cdf = NumericCdf::with_config(
        &pdf,
        NORMAL_BREAKPOINTS,
        f64::NEG_INFINITY,
        tight,
        AdaptiveGaussKronrod::default(),
    )
    .unwrap();
    assert_eq!(cdf.tolerance(), &tight);
    assert_relative_eq!(cdf.cdf(0.4).unwrap(), normal.cdf(0.4), epsilon = 1e-11);
}

proptest! {
    #[test]
    fn prop_cdf_monotone(x in -8.0f64..8.0, dx in 0.0f64..4.0) {
        let pdf = standard_normal();
        let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
        let lo = cdf.cdf(x).unwrap();
        let hi = cdf.cdf(x + dx).unwrap();
        prop_assert!(hi >= lo - 1e-9, "cdf({}) = {} > cdf({}) = {}", x, lo, x + dx, hi);
    }

    #[test]
    fn prop_ccdf_antitone(x in -8.0f64..8.0, dx in 0.0f64..4.0) {
        let pdf = standard_normal();
        let ccdf = NumericCcdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
        let lo = ccdf.ccdf(x).unwrap();
        let hi = ccdf.ccdf(x + dx).unwrap();
        prop_assert!(hi <= lo + 1e-9);
    }

    #[test]
    fn prop_cdf_difference_is_interval_mass(x in -4.0f64..4.0, dx in 0.01f64..3.0) {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let pdf = standard_normal();
        let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
        let mass = cdf.cdf(x + dx).unwrap() - cdf.cdf(x).unwrap();
        prop_assert!((mass - (normal.cdf(x + dx) - normal.cdf(x))).abs() < 1e-7);
    }

    #[test]
    fn prop_repeatable(x in -10.0f64..10.0) {
        let pdf = standard_normal();
        let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
        prop_assert_eq!(cdf.cdf(x).unwrap().to_bits(), cdf.cdf(x).unwrap().to_bits());
        prop_assert!(pdf.density(x) >= 0.0);
    }
}
