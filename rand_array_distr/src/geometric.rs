// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The geometric distribution.

use crate::{Distribution, Exp, Float};
use core::fmt;
use rand::Rng;

/// The geometric distribution `Geometric(p)` bounded to `[0, u64::MAX]`.
///
/// This is the probability distribution of the number of failures before the
/// first success in a series of Bernoulli trials. It has the density function
/// `f(k) = (1 - p)^k p` for `k >= 0`, where `p` is the probability of success
/// on each trial.
///
/// Samples are `floor(X)` where `X ~ Exp(-ln(1 - p))`, so this is the discrete
/// analogue of the [exponential distribution](crate::Exp).
///
/// # Example
///
/// ```
/// use rand_array_distr::{Geometric, Distribution};
///
/// let geo = Geometric::new(0.25).unwrap();
/// let v = geo.sample(&mut rand::thread_rng());
/// println!("{} is from a Geometric(0.25) distribution", v);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometric {
    exp: Exp<f64>,
}

/// Error type returned from `Geometric::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `p <= 0 || p >= 1` or `nan`
    InvalidProbability,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidProbability => {
                "p is NaN or outside the interval (0, 1) in geometric distribution"
            }
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Geometric {
    /// Construct a new `Geometric` with the given shape parameter `p`
    /// (probability of success on each trial).
    ///
    /// Both end points are rejected: `p = 0` never succeeds and `p = 1` is
    /// degenerate.
    pub fn new(p: f64) -> Result<Self, Error> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidProbability);
        }
        let lambda = -(-p).ln_1p();
        match Exp::new(lambda) {
            Ok(exp) => Ok(Geometric { exp }),
            Err(_) => Err(Error::InvalidProbability),
        }
    }
}

impl Distribution<u64> for Geometric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        self.exp.sample(rng).floor().to_count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_geo_invalid_p() {
        assert!(Geometric::new(f64::NAN).is_err());
        assert!(Geometric::new(f64::INFINITY).is_err());
        assert!(Geometric::new(f64::NEG_INFINITY).is_err());

        assert!(Geometric::new(-0.5).is_err());
        assert!(Geometric::new(0.0).is_err());
        assert!(Geometric::new(1.0).is_err());
        assert!(Geometric::new(2.0).is_err());
        assert!(Geometric::new(0.5).is_ok());
    }

    #[test]
    fn test_geo_tiny_p_saturates() {
        let mut rng = crate::test::rng(12346);
        let distr = Geometric::new(1e-300).unwrap();
        for _ in 0..100 {
            assert_eq!(distr.sample(&mut rng), u64::MAX);
        }
    }

    fn test_geo_mean_and_variance<R: Rng>(p: f64, rng: &mut R) {
        let distr = Geometric::new(p).unwrap();

        let expected_mean = (1.0 - p) / p;
        let expected_variance = (1.0 - p) / (p * p);

        let (mean, variance) = crate::test::moments(10_000, || distr.sample(rng) as f64);
        assert!((mean - expected_mean).abs() < expected_mean / 20.0);
        assert!((variance - expected_variance).abs() < expected_variance / 5.0);
    }

    #[test]
    fn test_geometric() {
        let mut rng = crate::test::rng(12345);

        test_geo_mean_and_variance(0.10, &mut rng);
        test_geo_mean_and_variance(0.25, &mut rng);
        test_geo_mean_and_variance(0.50, &mut rng);
        test_geo_mean_and_variance(0.75, &mut rng);
        test_geo_mean_and_variance(0.90, &mut rng);
    }
}
