// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A generator whose engine is chosen at run time.

use crate::array::ArrayViewMut;
use crate::distr::Distr;
use crate::rngs::{Mt19937, Mt19937_64, Pcg32, Pcg64};
use crate::{Error, Generator};
use core::fmt;
use core::str::FromStr;

/// The engine algorithms available to [`AnyGenerator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// [`Mt19937`]
    Mt32,
    /// [`Mt19937_64`]
    Mt64,
    /// [`Pcg32`]
    Pcg32,
    /// [`Pcg64`]
    #[default]
    Pcg64,
}

impl Algorithm {
    /// All algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Mt32,
        Algorithm::Mt64,
        Algorithm::Pcg32,
        Algorithm::Pcg64,
    ];

    /// The lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Mt32 => "mt32",
            Algorithm::Mt64 => "mt64",
            Algorithm::Pcg32 => "pcg32",
            Algorithm::Pcg64 => "pcg64",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown algorithm, expected one of mt32, mt64, pcg32, pcg64")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or(ParseAlgorithmError)
    }
}

/// A [`Generator`] over one of the four engines, selected by [`Algorithm`].
///
/// The variant is fixed at construction. All operations forward to the
/// wrapped generator, so a request gives the same result as on the
/// statically typed generator with the same engine and seed.
///
/// ```
/// use rand_array::{AnyGenerator, ArrayViewMut};
///
/// let mut gen = AnyGenerator::new("mt64".parse().unwrap(), Some(42));
/// let mut data = [0.0f64; 3];
/// gen.exponential(&mut ArrayViewMut::contiguous(&mut data), 2.0)
///     .unwrap();
/// assert!(data.iter().all(|&v| v >= 0.0));
/// ```
#[derive(Clone, Debug)]
pub enum AnyGenerator {
    /// 32-bit Mersenne Twister.
    Mt32(Generator<Mt19937>),
    /// 64-bit Mersenne Twister.
    Mt64(Generator<Mt19937_64>),
    /// PCG, 32-bit output.
    Pcg32(Generator<Pcg32>),
    /// PCG, 64-bit output.
    Pcg64(Generator<Pcg64>),
}

macro_rules! with_generator {
    ($self:expr, $gen:ident => $body:expr) => {
        match $self {
            AnyGenerator::Mt32($gen) => $body,
            AnyGenerator::Mt64($gen) => $body,
            AnyGenerator::Pcg32($gen) => $body,
            AnyGenerator::Pcg64($gen) => $body,
        }
    };
}

impl AnyGenerator {
    /// Construct a generator of the given algorithm; see [`Generator::new`].
    pub fn new(algorithm: Algorithm, seed: Option<u64>) -> Self {
        match algorithm {
            Algorithm::Mt32 => AnyGenerator::Mt32(Generator::new(seed)),
            Algorithm::Mt64 => AnyGenerator::Mt64(Generator::new(seed)),
            Algorithm::Pcg32 => AnyGenerator::Pcg32(Generator::new(seed)),
            Algorithm::Pcg64 => AnyGenerator::Pcg64(Generator::new(seed)),
        }
    }

    /// The algorithm of the wrapped engine.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyGenerator::Mt32(_) => Algorithm::Mt32,
            AnyGenerator::Mt64(_) => Algorithm::Mt64,
            AnyGenerator::Pcg32(_) => Algorithm::Pcg32,
            AnyGenerator::Pcg64(_) => Algorithm::Pcg64,
        }
    }

    /// See [`Generator::set_seed`].
    pub fn set_seed(&mut self, seed: u64) {
        with_generator!(self, gen => gen.set_seed(seed))
    }

    /// See [`Generator::seed`].
    pub fn seed(&self) -> u64 {
        with_generator!(self, gen => gen.seed())
    }

    /// See [`Generator::random`].
    pub fn random(&mut self) -> f64 {
        with_generator!(self, gen => gen.random())
    }

    /// See [`Generator::uniform`].
    pub fn uniform(&mut self, x: &mut ArrayViewMut<'_>, low: f64, high: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.uniform(x, low, high))
    }

    /// See [`Generator::normal`].
    pub fn normal(&mut self, x: &mut ArrayViewMut<'_>, loc: f64, scale: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.normal(x, loc, scale))
    }

    /// See [`Generator::lognormal`].
    pub fn lognormal(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        mean: f64,
        sigma: f64,
    ) -> Result<(), Error> {
        with_generator!(self, gen => gen.lognormal(x, mean, sigma))
    }

    /// See [`Generator::exponential`].
    pub fn exponential(&mut self, x: &mut ArrayViewMut<'_>, scale: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.exponential(x, scale))
    }

    /// See [`Generator::gamma`].
    pub fn gamma(&mut self, x: &mut ArrayViewMut<'_>, k: f64, scale: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.gamma(x, k, scale))
    }

    /// See [`Generator::gumbel`].
    pub fn gumbel(&mut self, x: &mut ArrayViewMut<'_>, loc: f64, scale: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.gumbel(x, loc, scale))
    }

    /// See [`Generator::weibull`].
    pub fn weibull(&mut self, x: &mut ArrayViewMut<'_>, k: f64, scale: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.weibull(x, k, scale))
    }

    /// See [`Generator::cauchy`].
    pub fn cauchy(&mut self, x: &mut ArrayViewMut<'_>, loc: f64, scale: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.cauchy(x, loc, scale))
    }

    /// See [`Generator::chisquare`].
    pub fn chisquare(&mut self, x: &mut ArrayViewMut<'_>, df: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.chisquare(x, df))
    }

    /// See [`Generator::fisher_f`].
    pub fn fisher_f(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        dfnum: f64,
        dfden: f64,
    ) -> Result<(), Error> {
        with_generator!(self, gen => gen.fisher_f(x, dfnum, dfden))
    }

    /// See [`Generator::standard_t`].
    pub fn standard_t(&mut self, x: &mut ArrayViewMut<'_>, df: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.standard_t(x, df))
    }

    /// See [`Generator::binomial`].
    pub fn binomial(&mut self, x: &mut ArrayViewMut<'_>, n: i64, p: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.binomial(x, n, p))
    }

    /// See [`Generator::negative_binomial`].
    pub fn negative_binomial(
        &mut self,
        x: &mut ArrayViewMut<'_>,
        n: i64,
        p: f64,
    ) -> Result<(), Error> {
        with_generator!(self, gen => gen.negative_binomial(x, n, p))
    }

    /// See [`Generator::geometric`].
    pub fn geometric(&mut self, x: &mut ArrayViewMut<'_>, p: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.geometric(x, p))
    }

    /// See [`Generator::poisson`].
    pub fn poisson(&mut self, x: &mut ArrayViewMut<'_>, mean: f64) -> Result<(), Error> {
        with_generator!(self, gen => gen.poisson(x, mean))
    }

    /// See [`Generator::discrete`].
    pub fn discrete<I>(&mut self, x: &mut ArrayViewMut<'_>, weights: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        with_generator!(self, gen => gen.discrete(x, weights))
    }

    /// See [`Generator::sample`].
    pub fn sample(&mut self, x: &mut ArrayViewMut<'_>, distr: &Distr) -> Result<(), Error> {
        with_generator!(self, gen => gen.sample(x, distr))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
        assert_eq!("PCG64".parse::<Algorithm>(), Err(ParseAlgorithmError));
        assert_eq!(Algorithm::default(), Algorithm::Pcg64);
    }

    #[test]
    fn test_forwards_to_typed_generator() {
        let mut any = AnyGenerator::new(Algorithm::Mt32, Some(5489));
        let mut typed = Generator::<Mt19937>::new(Some(5489));
        assert_eq!(any.algorithm(), Algorithm::Mt32);
        assert_eq!(any.random(), typed.random());

        let mut x = [0u64; 6];
        let mut y = [0u64; 6];
        any.poisson(&mut ArrayViewMut::contiguous(&mut x), 3.0)
            .unwrap();
        typed
            .poisson(&mut ArrayViewMut::contiguous(&mut y), 3.0)
            .unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn test_seed_round_trip() {
        for algorithm in Algorithm::ALL {
            let mut gen = AnyGenerator::new(algorithm, Some(17));
            assert_eq!(gen.seed(), 17);
            let first = gen.random();
            gen.set_seed(17);
            assert_eq!(gen.random(), first);
        }
    }
}
