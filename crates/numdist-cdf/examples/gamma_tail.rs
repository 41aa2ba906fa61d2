//! Compares numeric CDF and CCDF of a gamma density against closed forms

use numdist_cdf::{NumericCcdf, NumericCdf};
use numdist_core::{ComplementaryCumulative, CumulativeDistribution, StatrsDensity};
use statrs::distribution::{ContinuousCDF, Gamma};

fn main() {
    let gamma = Gamma::new(3.0, 2.0).unwrap();
    let pdf = StatrsDensity::new(gamma);

    // Denser breakpoints where the mass is
    let breakpoints = vec![0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 8.0];
    let cdf = NumericCdf::with_lower_bound(&pdf, breakpoints.clone(), 0.0).unwrap();
    let ccdf = NumericCcdf::new(&pdf, breakpoints).unwrap();

    println!("=== Gamma(shape = 3, rate = 2) ===");
    println!("Mass below last breakpoint: {:.10}", cdf.total_mass());
    println!();
    println!("{:>8} {:>14} {:>14} {:>14} {:>14}", "x", "cdf", "exact", "ccdf", "exact");
    for &x in &[0.1, 0.5, 1.0, 2.0, 4.0, 7.5, 12.0, 20.0] {
        println!(
            "{:>8.2} {:>14.10} {:>14.10} {:>14.4e} {:>14.4e}",
            x,
            cdf.cdf(x).unwrap(),
            gamma.cdf(x),
            ccdf.ccdf(x).unwrap(),
            gamma.sf(x)
        );
    }
}
