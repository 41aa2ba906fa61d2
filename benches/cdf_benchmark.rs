use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numdist::prelude::*;
use numdist::StatrsDensity;
use rand::prelude::*;
use rand_distr::Uniform;
use statrs::distribution::Normal;

/// Evenly spaced breakpoints over [-4, 4]
fn grid(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| -4.0 + 8.0 * (i as f64 + 0.5) / n as f64)
        .collect()
}

/// Random evaluation points, mostly inside the breakpoint range
fn evaluation_points(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform = Uniform::new(-5.0, 5.0);
    (0..count).map(|_| uniform.sample(&mut rng)).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("NumericCdf construction");
    let pdf = StatrsDensity::new(Normal::new(0.0, 1.0).unwrap());

    for &n in &[4, 16, 64, 256] {
        let breakpoints = grid(n);
        group.bench_with_input(BenchmarkId::new("breakpoints", n), &breakpoints, |b, bps| {
            b.iter(|| NumericCdf::new(&pdf, black_box(bps.clone())).unwrap())
        });
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("NumericCdf evaluation");
    let pdf = StatrsDensity::new(Normal::new(0.0, 1.0).unwrap());
    let points = evaluation_points(256, 42);

    for &n in &[4, 16, 64, 256] {
        let cdf = NumericCdf::new(&pdf, grid(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("cdf", n), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&x| cdf.cdf(black_box(x)).unwrap())
                    .sum::<f64>()
            })
        });

        let ccdf = NumericCcdf::new(&pdf, grid(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("ccdf", n), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&x| ccdf.ccdf(black_box(x)).unwrap())
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_evaluation);
criterion_main!(benches);
