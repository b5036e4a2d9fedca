// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The array generator: one engine plus the distribution catalog.

use crate::array::ArrayViewMut;
use crate::dispatch::{self, RealParams};
use crate::distr::Distr;
use crate::params::{
    CauchyParams, ChiSquareParams, ExponentialParams, FisherFParams, GammaParams, GumbelParams,
    LogNormalParams, NormalParams, StandardTParams, UniformParams, WeibullParams,
};
use crate::rngs::Engine;
use crate::Error;
use rand_array_distr::{
    Binomial, BinomialError, Discrete, Distribution, Geometric, NegativeBinomial, Poisson,
    PoissonError, WeightError,
};
use rand::Rng;
use rand_core::{OsRng, RngCore};

const N_NEGATIVE: Error = Error::InvalidParameter("n must be a non-negative value");

/// A pseudo-random engine together with the seed it was last set from.
///
/// Every catalog operation writes one draw into each element of the target
/// view, consuming the engine in the order the view enumerates its elements.
/// Each operation checks, in this order, that the view's element kind
/// belongs to the family the distribution produces and that the parameters
/// are valid; a failed check returns before the view is written or the
/// engine advanced.
///
/// Real-valued distributions accept `float32` and `float64` views and sample
/// in the view's width. Integer-valued distributions accept the eight integer
/// kinds; counts too large for the element type are stored as its maximum.
///
/// # Example
///
/// ```
/// use rand_array::{ArrayViewMut, Generator};
/// use rand_array::rngs::Pcg64;
///
/// let mut gen = Generator::<Pcg64>::new(Some(7));
/// let mut counts = [0i32; 5];
/// gen.binomial(&mut ArrayViewMut::contiguous(&mut counts), 10, 0.5)
///     .unwrap();
/// assert!(counts.iter().all(|&c| (0..=10).contains(&c)));
/// ```
#[derive(Clone, Debug)]
pub struct Generator<E: Engine> {
    rng: E,
    seed: u64,
}

impl<E: Engine> Generator<E> {
    /// Construct a generator.
    ///
    /// With `None`, one `u64` is read from the operating system's entropy
    /// source and used as the seed; [`Generator::seed`] reports it.
    ///
    /// # Panics
    ///
    /// If the entropy source fails, as [`OsRng`] does.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = match seed {
            Some(seed) => seed,
            None => {
                let seed = OsRng.next_u64();
                debug!("Generator<{}>: seeded from OsRng", E::NAME);
                seed
            }
        };
        Generator {
            rng: E::seeded(seed),
            seed,
        }
    }

    /// Reset the engine as if freshly constructed from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        trace!("Generator<{}>: reseeding with {}", E::NAME, seed);
        self.rng.reseed(seed);
        self.seed = seed;
    }

    /// The seed last set, verbatim.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One draw from `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.rng.gen()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &E {
        &self.rng
    }

    fn real<P: RealParams>(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        name: &str,
        params: P,
    ) -> Result<(), Error> {
        let result =
            dispatch::real::<E, P>(x.kind()).and_then(|fill| fill(x, &mut self.rng, &params));
        rejected(E::NAME, name, result)
    }

    fn integer<D, C>(&mut self, x: &mut ArrayViewMut<'_>, name: &str, build: C) -> Result<(), Error>
    where
        D: Distribution<u64>,
        C: FnOnce() -> Result<D, Error>,
    {
        let result = dispatch::integer::<E, D>(x.kind()).and_then(|fill| {
            let distr = build()?;
            fill(x, &mut self.rng, &distr)
        });
        rejected(E::NAME, name, result)
    }

    /// Uniform over `[low, high)`. Requires `high - low >= 0` and finite.
    pub fn uniform(&mut self, x: &mut ArrayViewMut<'_>, low: f64, high: f64) -> Result<(), Error> {
        self.real(x, "uniform", UniformParams { low, high })
    }

    /// Normal with mean `loc` and standard deviation `scale >= 0`.
    pub fn normal(&mut self, x: &mut ArrayViewMut<'_>, loc: f64, scale: f64) -> Result<(), Error> {
        self.real(x, "normal", NormalParams { loc, scale })
    }

    /// Log-normal: `exp` of a normal with mean `mean` and standard deviation
    /// `sigma >= 0`.
    pub fn lognormal(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        mean: f64,
        sigma: f64,
    ) -> Result<(), Error> {
        self.real(x, "lognormal", LogNormalParams { mean, sigma })
    }

    /// Exponential with `scale > 0`, i.e. rate `1 / scale`.
    pub fn exponential(&mut self, x: &mut ArrayViewMut<'_>, scale: f64) -> Result<(), Error> {
        self.real(x, "exponential", ExponentialParams { scale })
    }

    /// Gamma with shape `k > 0` and `scale > 0`.
    pub fn gamma(&mut self, x: &mut ArrayViewMut<'_>, k: f64, scale: f64) -> Result<(), Error> {
        self.real(x, "gamma", GammaParams { k, scale })
    }

    /// Gumbel (type I extreme value) with location `loc` and `scale > 0`.
    pub fn gumbel(&mut self, x: &mut ArrayViewMut<'_>, loc: f64, scale: f64) -> Result<(), Error> {
        self.real(x, "gumbel", GumbelParams { loc, scale })
    }

    /// Weibull with shape `k > 0` and `scale > 0`.
    pub fn weibull(&mut self, x: &mut ArrayViewMut<'_>, k: f64, scale: f64) -> Result<(), Error> {
        self.real(x, "weibull", WeibullParams { k, scale })
    }

    /// Cauchy with median `loc` and `scale >= 0`.
    pub fn cauchy(&mut self, x: &mut ArrayViewMut<'_>, loc: f64, scale: f64) -> Result<(), Error> {
        self.real(x, "cauchy", CauchyParams { loc, scale })
    }

    /// Chi-squared with `df > 0` degrees of freedom.
    pub fn chisquare(&mut self, x: &mut ArrayViewMut<'_>, df: f64) -> Result<(), Error> {
        self.real(x, "chisquare", ChiSquareParams { df })
    }

    /// Fisher F with `dfnum > 0` and `dfden > 0` degrees of freedom.
    pub fn fisher_f(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        dfnum: f64,
        dfden: f64,
    ) -> Result<(), Error> {
        self.real(x, "fisher_f", FisherFParams { dfnum, dfden })
    }

    /// Student's t with `df > 0` degrees of freedom.
    pub fn standard_t(&mut self, x: &mut ArrayViewMut<'_>, df: f64) -> Result<(), Error> {
        self.real(x, "standard_t", StandardTParams { df })
    }

    /// Binomial: successes in `n >= 0` trials of probability `0 <= p <= 1`.
    pub fn binomial(&mut self, x: &mut ArrayViewMut<'_>, n: i64, p: f64) -> Result<(), Error> {
        self.integer(x, "binomial", || {
            let n = u64::try_from(n).map_err(|_| N_NEGATIVE)?;
            Binomial::new(n, p).map_err(|e| match e {
                BinomialError::ProbabilityTooSmall | BinomialError::ProbabilityTooLarge => {
                    Error::InvalidParameter("p must be >= 0 and <= 1")
                }
            })
        })
    }

    /// Negative binomial: failures before the `n`-th success, with success
    /// probability `0 < p <= 1`. With `n == 0` every element is zero.
    pub fn negative_binomial(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        n: i64,
        p: f64,
    ) -> Result<(), Error> {
        self.integer(x, "negative_binomial", || {
            let n = u64::try_from(n).map_err(|_| N_NEGATIVE)?;
            NegativeBinomial::new(n, p)
                .map_err(|_| Error::InvalidParameter("p must be > 0 and <= 1"))
        })
    }

    /// Geometric: failures before the first success, `0 < p < 1`.
    pub fn geometric(&mut self, x: &mut ArrayViewMut<'_>, p: f64) -> Result<(), Error> {
        self.integer(x, "geometric", || {
            Geometric::new(p).map_err(|_| Error::InvalidParameter("p must be > 0 and < 1"))
        })
    }

    /// Poisson with finite `mean > 0`.
    pub fn poisson(&mut self, x: &mut ArrayViewMut<'_>, mean: f64) -> Result<(), Error> {
        self.integer(x, "poisson", || {
            Poisson::new(mean).map_err(|e| match e {
                PoissonError::ShapeTooSmall => Error::InvalidParameter("mean must be > 0"),
                PoissonError::ShapeTooLarge => Error::InvalidParameter("mean must be finite"),
            })
        })
    }

    /// Categorical: the index of a category drawn with probability
    /// proportional to its weight.
    ///
    /// The weights are copied before sampling. There must be at least one,
    /// each must be finite and non-negative, and at least one must be
    /// positive.
    pub fn discrete<I>(&mut self, x: &mut ArrayViewMut<'_>, weights: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        self.integer(x, "discrete", || {
            Discrete::new(weights).map_err(|e| match e {
                WeightError::InvalidInput => Error::InvalidParameter("length of weight must be > 0"),
                WeightError::InvalidWeight => {
                    Error::InvalidParameter("weight must be a non-negative finite value")
                }
                WeightError::InsufficientNonZero => {
                    Error::InvalidParameter("sum of weight must be > 0")
                }
                WeightError::Overflow => Error::InvalidParameter("sum of weight must be finite"),
            })
        })
    }

    /// Fill `x` from the distribution described by `distr`.
    pub fn sample(&mut self, x: &mut ArrayViewMut<'_>, distr: &Distr) -> Result<(), Error> {
        match *distr {
            Distr::Uniform { low, high } => self.uniform(x, low, high),
            Distr::Normal { loc, scale } => self.normal(x, loc, scale),
            Distr::LogNormal { mean, sigma } => self.lognormal(x, mean, sigma),
            Distr::Exponential { scale } => self.exponential(x, scale),
            Distr::Gamma { k, scale } => self.gamma(x, k, scale),
            Distr::Gumbel { loc, scale } => self.gumbel(x, loc, scale),
            Distr::Weibull { k, scale } => self.weibull(x, k, scale),
            Distr::Cauchy { loc, scale } => self.cauchy(x, loc, scale),
            Distr::ChiSquare { df } => self.chisquare(x, df),
            Distr::FisherF { dfnum, dfden } => self.fisher_f(x, dfnum, dfden),
            Distr::StandardT { df } => self.standard_t(x, df),
            Distr::Binomial { n, p } => self.binomial(x, n, p),
            Distr::NegativeBinomial { n, p } => self.negative_binomial(x, n, p),
            Distr::Geometric { p } => self.geometric(x, p),
            Distr::Poisson { mean } => self.poisson(x, mean),
            Distr::Discrete { ref weights } => self.discrete(x, weights.iter().copied()),
        }
    }
}

fn rejected(engine: &str, name: &str, result: Result<(), Error>) -> Result<(), Error> {
    if let Err(ref err) = result {
        debug!("Generator<{}>: {} rejected: {}", engine, name, err);
    }
    result
}

impl<E: Engine> RngCore for Generator<E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::{Mt19937, Mt19937_64, Pcg32, Pcg64};
    use crate::{ElementKind, KindFamily};

    #[test]
    fn test_seed_round_trip() {
        fn check<E: Engine>() {
            let mut gen = Generator::<E>::new(Some(123));
            assert_eq!(gen.seed(), 123);
            gen.set_seed(u64::MAX);
            assert_eq!(gen.seed(), u64::MAX);
        }
        check::<Mt19937>();
        check::<Mt19937_64>();
        check::<Pcg32>();
        check::<Pcg64>();
    }

    #[test]
    fn test_set_seed_restarts_stream() {
        let mut gen = Generator::<Mt19937_64>::new(Some(5));
        let first = gen.random();
        gen.random();
        gen.set_seed(5);
        assert_eq!(gen.random(), first);
    }

    #[test]
    fn test_random_range() {
        let mut gen = Generator::<Mt19937>::new(Some(3));
        for _ in 0..1000 {
            let v = gen.random();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_family_checked_before_parameters() {
        let mut gen = Generator::<Pcg64>::new(Some(1));
        let mut data = [0.0f64; 4];
        let err = gen
            .poisson(&mut ArrayViewMut::contiguous(&mut data), -1.0)
            .unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                expected: KindFamily::Integer,
                found: ElementKind::Float64
            }
        );

        let mut ints = [0i32; 4];
        let err = gen
            .gamma(&mut ArrayViewMut::contiguous(&mut ints), 0.0, 1.0)
            .unwrap_err();
        assert!(err.is_kind_mismatch());
    }

    #[test]
    fn test_rejection_leaves_engine_untouched() {
        let mut gen = Generator::<Pcg32>::new(Some(11));
        let fresh = gen.clone();
        let mut data = [7u16; 3];
        let mut view = ArrayViewMut::contiguous(&mut data);
        assert!(gen.binomial(&mut view, 10, 1.5).is_err());
        assert!(gen.normal(&mut view, 0.0, 1.0).is_err());
        assert_eq!(gen.engine(), fresh.engine());
        assert_eq!(data, [7; 3]);
    }

    #[test]
    fn test_parameter_messages() {
        let mut gen = Generator::<Pcg64>::new(Some(2));
        let mut ints = [0u8; 2];
        let mut view = ArrayViewMut::contiguous(&mut ints);
        assert_eq!(gen.binomial(&mut view, -1, 0.5), Err(N_NEGATIVE));
        assert_eq!(
            gen.geometric(&mut view, 1.0),
            Err(Error::InvalidParameter("p must be > 0 and < 1"))
        );
        assert_eq!(
            gen.poisson(&mut view, f64::NAN),
            Err(Error::InvalidParameter("mean must be > 0"))
        );
        assert_eq!(
            gen.discrete(&mut view, [0.0, 0.0]),
            Err(Error::InvalidParameter("sum of weight must be > 0"))
        );
        assert_eq!(
            gen.discrete(&mut view, Vec::<f64>::new()),
            Err(Error::InvalidParameter("length of weight must be > 0"))
        );
    }

    #[test]
    fn test_saturating_store() {
        let mut gen = Generator::<Pcg64>::new(Some(4));
        let mut data = [0i8; 16];
        gen.poisson(&mut ArrayViewMut::contiguous(&mut data), 1e6)
            .unwrap();
        assert!(data.iter().all(|&v| v == i8::MAX));
    }

    #[test]
    fn test_extreme_counts_saturate() {
        let mut gen = Generator::<Pcg32>::new(Some(5));
        let mut data = [0u64; 32];
        for &mean in &[1e306, f64::MAX] {
            gen.poisson(&mut ArrayViewMut::contiguous(&mut data), mean)
                .unwrap();
            assert!(data.iter().all(|&v| v == u64::MAX));
        }
        let mut small = [0i16; 32];
        gen.negative_binomial(&mut ArrayViewMut::contiguous(&mut small), 3, 1e-310)
            .unwrap();
        assert!(small.iter().all(|&v| v == i16::MAX));
    }

    #[test]
    fn test_negative_binomial_degenerate() {
        let mut gen = Generator::<Mt19937>::new(Some(8));
        let mut data = [9u32; 8];
        let mut view = ArrayViewMut::contiguous(&mut data);
        gen.negative_binomial(&mut view, 0, 0.3).unwrap();
        assert_eq!(data, [0; 8]);
        let mut view = ArrayViewMut::contiguous(&mut data);
        gen.negative_binomial(&mut view, 5, 1.0).unwrap();
        assert_eq!(data, [0; 8]);
    }

    #[test]
    fn test_sample_matches_named_operation() {
        let mut a = Generator::<Pcg64>::new(Some(21));
        let mut b = a.clone();
        let mut x = [0.0f32; 10];
        let mut y = [0.0f32; 10];
        a.gumbel(&mut ArrayViewMut::contiguous(&mut x), 1.0, 2.0)
            .unwrap();
        b.sample(
            &mut ArrayViewMut::contiguous(&mut y),
            &Distr::Gumbel {
                loc: 1.0,
                scale: 2.0,
            },
        )
        .unwrap();
        assert_eq!(x, y);
    }
}
