//! Quantiles of a density known only pointwise

use numdist_cdf::NumericCdf;
use numdist_core::{density_fn, CumulativeDistribution};
use numdist_quantile::NumericQuantile;

fn main() {
    // Two-component normal mixture, no closed-form quantile
    let mixture = density_fn(|x: f64| {
        let phi = |z: f64| (-0.5 * z * z).exp() / (2.0 * std::f64::consts::PI).sqrt();
        0.7 * phi(x) + 0.3 * phi((x - 4.0) / 0.5) / 0.5
    });

    let cdf = NumericCdf::new(&mixture, vec![-3.0, -1.0, 0.0, 1.0, 3.0, 4.0, 5.0]).unwrap();
    let quantile = NumericQuantile::new(&cdf).unwrap();

    println!("=== Normal mixture 0.7 N(0, 1) + 0.3 N(4, 0.25) ===");
    println!("{:>8} {:>14} {:>14}", "p", "quantile", "cdf(quantile)");
    for &p in &[0.01, 0.1, 0.25, 0.5, 0.7, 0.75, 0.9, 0.99] {
        let y = quantile.quantile(p).unwrap();
        println!("{:>8.2} {:>14.8} {:>14.10}", p, y, cdf.cdf(y).unwrap());
    }
}
