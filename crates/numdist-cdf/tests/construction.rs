//! Construction validation happens before any density evaluation

mod common;

use common::{standard_normal, CountingDensity, NORMAL_BREAKPOINTS};
use numdist_cdf::{NumericCcdf, NumericCdf};
use numdist_core::{CumulativeDistribution, Error, Tolerance};
use numdist_integrate::{AdaptiveGaussKronrod, QuadOptions};

#[test]
fn test_invalid_breakpoints_never_touch_density() {
    let pdf = CountingDensity::new(standard_normal());
    let cases: Vec<Vec<f64>> = vec![
        vec![],
        vec![0.0, 0.0],
        vec![1.0, -1.0],
        vec![0.0, f64::NAN],
        vec![f64::NEG_INFINITY, 0.0],
    ];
    for bps in cases {
        assert!(matches!(
            NumericCdf::new(&pdf, bps.clone()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            NumericCcdf::new(&pdf, bps),
            Err(Error::InvalidArgument(_))
        ));
    }
    assert_eq!(pdf.calls(), 0);
}

#[test]
fn test_bounds_outside_breakpoints_never_touch_density() {
    let pdf = CountingDensity::new(standard_normal());
    assert!(NumericCdf::with_lower_bound(&pdf, NORMAL_BREAKPOINTS, -3.0).is_err());
    assert!(NumericCdf::with_lower_bound(&pdf, NORMAL_BREAKPOINTS, 0.5).is_err());
    assert!(NumericCdf::with_lower_bound(&pdf, NORMAL_BREAKPOINTS, f64::INFINITY).is_err());
    assert!(NumericCcdf::with_upper_bound(&pdf, NORMAL_BREAKPOINTS, 3.0).is_err());
    assert!(NumericCcdf::with_upper_bound(&pdf, NORMAL_BREAKPOINTS, f64::NAN).is_err());
    assert_eq!(pdf.calls(), 0);
}

#[test]
fn test_invalid_tolerance_never_touches_density() {
    let pdf = CountingDensity::new(standard_normal());
    let tol = Tolerance {
        relative: 0.0,
        absolute: 0.0,
    };
    let result = NumericCdf::with_config(
        &pdf,
        NORMAL_BREAKPOINTS,
        f64::NEG_INFINITY,
        tol,
        AdaptiveGaussKronrod::default(),
    );
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(pdf.calls(), 0);
}

#[test]
fn test_precompute_integrates_each_interval_once() {
    let pdf = CountingDensity::new(standard_normal());
    let cdf = NumericCdf::new(&pdf, NORMAL_BREAKPOINTS).unwrap();
    let after_build = pdf.calls();
    assert!(after_build > 0);

    // Evaluations at infinities, NaN and below the support cost nothing
    cdf.cdf(f64::INFINITY).unwrap();
    cdf.cdf(f64::NEG_INFINITY).unwrap();
    cdf.cdf(f64::NAN).unwrap();
    assert_eq!(pdf.calls(), after_build);

    // A finite evaluation performs one residual integral
    cdf.cdf(0.5).unwrap();
    assert!(pdf.calls() > after_build);
}

#[test]
fn test_subdivision_limit_surfaces_as_numeric_failure() {
    // Jump discontinuity inside an interval with a single-rule budget
    let pdf = numdist_core::density_fn(|x: f64| if x < 0.3 { 0.0 } else { 1.0 });
    let quad = AdaptiveGaussKronrod::new(QuadOptions::with_limit(1));
    let err = NumericCdf::with_config(
        &pdf,
        [1.0],
        0.0,
        Tolerance::new(1e-12, 0.0).unwrap(),
        quad,
    )
    .unwrap_err();
    assert!(err.is_numeric_failure());
}
