// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The negative binomial distribution.

use crate::{Distribution, Float, Gamma, Poisson, PoissonError};
use core::fmt;
use rand::Rng;

// Stores the trivial cases (p == 1 or r == 0) apart from the general one:
// the PMF is then 1 for k = 0 and 0 elsewhere, so no Gamma is needed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
enum NegativeBinomialRepr {
    /// Always generates 0.
    Zero,

    /// `(1 - p)/p` is not representable: every count saturates.
    Saturated,

    /// The stored Gamma distribution is Gamma(r, (1 - p)/p), where `r` is the
    /// number of successes and `p` is the probability of success.
    Mixture(Gamma<f64>),
}

/// The negative binomial distribution `NegativeBinomial(r, p)`.
///
/// The number of failures in a sequence of Bernoulli trials that continue
/// until `r` successes occur, where `p` is the probability of success in a
/// single trial. The density function of this distribution is
///
/// ```text
/// f(k; r, p) = C(k + r - 1, k) (1 - p)^k p^r
/// ```
///
/// where `C(m, k)` is the binomial coefficient, read "m choose k".
///
/// # Example
///
/// ```
/// use rand_array_distr::{Distribution, NegativeBinomial};
///
/// let nb = NegativeBinomial::new(10, 0.02).unwrap();
/// let v: u64 = nb.sample(&mut rand::thread_rng());
/// println!("{} is from a NegativeBinomial(10, 0.02) distribution", v);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeBinomial {
    repr: NegativeBinomialRepr,
}

/// Error type returned from `NegativeBinomial::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `p <= 0 || p > 1` or `p` is `nan`
    InvalidProbability,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidProbability => {
                "p is NaN or outside the interval (0, 1] in negative binomial distribution"
            }
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl NegativeBinomial {
    /// Construct a new `NegativeBinomial` with the given parameters `r`
    /// (number of successes) and `p` (probability of success on each trial).
    pub fn new(r: u64, p: f64) -> Result<Self, Error> {
        if !(p > 0.0 && p <= 1.0) {
            return Err(Error::InvalidProbability);
        }
        if p == 1.0 || r == 0 {
            return Ok(NegativeBinomial {
                repr: NegativeBinomialRepr::Zero,
            });
        }
        // r > 0 and p in (0, 1), so the scale is positive
        let scale = (1.0 - p) / p;
        if scale.is_infinite() {
            return Ok(NegativeBinomial {
                repr: NegativeBinomialRepr::Saturated,
            });
        }
        let gamma = Gamma::new(r as f64, scale).map_err(|_| Error::InvalidProbability)?;
        Ok(NegativeBinomial {
            repr: NegativeBinomialRepr::Mixture(gamma),
        })
    }
}

impl Distribution<u64> for NegativeBinomial {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match &self.repr {
            NegativeBinomialRepr::Zero => 0,
            NegativeBinomialRepr::Saturated => u64::MAX,
            NegativeBinomialRepr::Mixture(gamma) => {
                // Generate a Gamma(r, (1-p)/p) variate and use it as the
                // parameter of Poisson, see section X.4.7 of *Non-Uniform
                // Random Variate Generation* by Luc Devroye (Springer-Verlag,
                // 1986). A new Poisson is needed for each variate.
                let lambda = gamma.sample(rng);
                match Poisson::new(lambda) {
                    Ok(poisson) => poisson.sample(rng),
                    // the gamma draw underflowed to zero
                    Err(PoissonError::ShapeTooSmall) => 0,
                    // or overflowed to infinity
                    Err(PoissonError::ShapeTooLarge) => lambda.to_count(),
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_nb_invalid_p() {
        assert!(NegativeBinomial::new(1, f64::NAN).is_err());
        assert!(NegativeBinomial::new(1, f64::INFINITY).is_err());
        assert!(NegativeBinomial::new(1, f64::NEG_INFINITY).is_err());

        assert!(NegativeBinomial::new(1, -0.5).is_err());
        assert!(NegativeBinomial::new(1, 0.0).is_err());
        assert!(NegativeBinomial::new(1, 0.2).is_ok());
        assert!(NegativeBinomial::new(1, 1.0).is_ok());
        assert!(NegativeBinomial::new(1, 2.0).is_err());
    }

    fn test_nb_mean_and_variance<R: Rng>(r: u64, p: f64, rng: &mut R) {
        let distr = NegativeBinomial::new(r, p).unwrap();

        let expected_mean = r as f64 * (1.0 - p) / p;
        let expected_variance = r as f64 * (1.0 - p) / (p * p);

        let (mean, variance) = crate::test::moments(10_000, || distr.sample(rng) as f64);
        assert!((mean - expected_mean).abs() < 0.03 * expected_mean);
        assert!((variance - expected_variance).abs() < 0.1 * expected_variance);
    }

    #[test]
    fn test_negative_binomial() {
        let mut rng = crate::test::rng(1894736523008208032);

        test_nb_mean_and_variance(8, 0.10, &mut rng);
        test_nb_mean_and_variance(200, 0.10, &mut rng);
        test_nb_mean_and_variance(8, 0.25, &mut rng);
        test_nb_mean_and_variance(4, 0.50, &mut rng);
        test_nb_mean_and_variance(10, 0.90, &mut rng);
    }

    #[test]
    fn test_tiny_p_saturates() {
        let mut rng = crate::test::rng(1894736523008208034);
        for &p in &[1e-310, 1e-306, f64::MIN_POSITIVE] {
            let nb = NegativeBinomial::new(3, p).unwrap();
            for _ in 0..100 {
                assert_eq!(nb.sample(&mut rng), u64::MAX);
            }
        }
        assert_eq!(
            NegativeBinomial::new(3, 1e-310).unwrap().repr,
            NegativeBinomialRepr::Saturated
        );
    }

    #[test]
    fn test_trivial_cases_return_zero() {
        let mut rng = crate::test::rng(1894736523008208033);
        for nb in &[
            NegativeBinomial::new(1, 1.0).unwrap(),
            NegativeBinomial::new(0, 0.3).unwrap(),
        ] {
            for _ in 0..10 {
                assert_eq!(nb.sample(&mut rng), 0);
            }
        }
    }
}
