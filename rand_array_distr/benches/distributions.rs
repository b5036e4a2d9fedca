// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_array_distr::*;

use rand_pcg::Pcg64Mcg;

macro_rules! distr_int {
    ($group:ident, $fnn:expr, $ty:ty, $distr:expr) => {
        $group.bench_function($fnn, |c| {
            let mut rng = Pcg64Mcg::seed_from_u64(123);
            let distr = $distr;

            c.iter(|| Distribution::<$ty>::sample(&distr, &mut rng));
        });
    };
}

macro_rules! distr_float {
    ($group:ident, $fnn:expr, $ty:ty, $distr:expr) => {
        $group.bench_function($fnn, |c| {
            let mut rng = Pcg64Mcg::seed_from_u64(123);
            let distr = $distr;

            c.iter(|| Distribution::<$ty>::sample(&distr, &mut rng));
        });
    };
}

fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("exp");
    distr_float!(g, "exp", f64, Exp::new(1.23 * 4.56).unwrap());
    distr_float!(g, "exp1", f64, Exp1);
    distr_float!(g, "exp1_f32", f32, Exp1);
    g.finish();

    let mut g = c.benchmark_group("normal");
    distr_float!(g, "normal", f64, Normal::new(-1.23, 4.56).unwrap());
    distr_float!(g, "normal_f32", f32, Normal::new(-1.23f32, 4.56).unwrap());
    distr_float!(g, "standardnormal", f64, StandardNormal);
    distr_float!(g, "log_normal", f64, LogNormal::new(-1.23, 4.56).unwrap());
    g.finish();

    let mut g = c.benchmark_group("gamma");
    distr_float!(g, "gamma_large_shape", f64, Gamma::new(10., 1.0).unwrap());
    distr_float!(g, "gamma_small_shape", f64, Gamma::new(0.1, 1.0).unwrap());
    distr_float!(g, "chi_squared", f64, ChiSquared::new(1.5).unwrap());
    distr_float!(g, "student_t", f64, StudentT::new(11.).unwrap());
    distr_float!(g, "fisher_f", f64, FisherF::new(2., 32.).unwrap());
    g.finish();

    let mut g = c.benchmark_group("extreme");
    distr_float!(g, "gumbel", f64, Gumbel::new(0.5, 2.0).unwrap());
    distr_float!(g, "weibull", f64, Weibull::new(1.5, 0.5).unwrap());
    distr_float!(g, "cauchy", f64, Cauchy::new(4.2, 6.9).unwrap());
    g.finish();

    let mut g = c.benchmark_group("integer");
    distr_int!(g, "binomial_small", u64, Binomial::new(1_000_000, 1e-5).unwrap());
    distr_int!(g, "binomial_large", u64, Binomial::new(1_000_000, 0.5).unwrap());
    distr_int!(g, "poisson_small", u64, Poisson::new(4.0).unwrap());
    distr_int!(g, "poisson_large", u64, Poisson::new(400.0).unwrap());
    distr_int!(g, "negative_binomial", u64, NegativeBinomial::new(8, 0.25).unwrap());
    distr_int!(g, "geometric", u64, Geometric::new(0.1).unwrap());
    distr_int!(g, "discrete", usize, Discrete::new([1.0, 2.0, 3.0, 0.0, 5.0]).unwrap());
    g.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench
);
criterion_main!(benches);
