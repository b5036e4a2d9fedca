// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Poisson distribution.

use crate::utils::log_gamma;
use crate::{Cauchy, Distribution, Float, StandardNormal};
use core::fmt;
use rand::Rng;

// Above this mean the normal approximation replaces the rejection method.
// Every count it produces is far beyond `u64::MAX`.
const NORMAL_THRESHOLD: f64 = 1e20;

/// The Poisson distribution `Poisson(lambda)`.
///
/// This distribution has a density function:
/// `f(k) = lambda^k * exp(-lambda) / k!` for `k >= 0`.
///
/// # Example
///
/// ```
/// use rand_array_distr::{Poisson, Distribution};
///
/// let poi = Poisson::new(2.0).unwrap();
/// let v: u64 = poi.sample(&mut rand::thread_rng());
/// println!("{} is from a Poisson(2) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Poisson {
    lambda: f64,
    // precalculated values
    exp_lambda: f64,
    log_lambda: f64,
    sqrt_2lambda: f64,
    magic_val: f64,
}

/// Error type returned from `Poisson::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `lambda <= 0` or `nan`.
    ShapeTooSmall,
    /// `lambda` is infinite.
    ShapeTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ShapeTooSmall => "lambda is not positive in Poisson distribution",
            Error::ShapeTooLarge => "lambda is not finite in Poisson distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Poisson {
    /// Construct a new `Poisson` with the given shape parameter
    /// `lambda`.
    pub fn new(lambda: f64) -> Result<Poisson, Error> {
        if !(lambda > 0.0) {
            return Err(Error::ShapeTooSmall);
        }
        if lambda.is_infinite() {
            return Err(Error::ShapeTooLarge);
        }
        let log_lambda = lambda.ln();
        // only the rejection method needs the magic value; past the normal
        // threshold `lambda * log_lambda` may overflow
        let magic_val = if lambda < NORMAL_THRESHOLD {
            lambda * log_lambda - log_gamma(1.0 + lambda)
        } else {
            0.0
        };
        Ok(Poisson {
            lambda,
            exp_lambda: (-lambda).exp(),
            log_lambda,
            sqrt_2lambda: (2.0 * lambda).sqrt(),
            magic_val,
        })
    }

    /// Returns the mean (`lambda`) of the distribution.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution<f64> for Poisson {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // using the algorithm from Numerical Recipes in C

        // for very high expected values the normal approximation is exact to
        // well below the resolution of f64
        if self.lambda >= NORMAL_THRESHOLD {
            let z: f64 = rng.sample(StandardNormal);
            return (self.lambda + self.lambda.sqrt() * z).floor().max(0.0);
        }

        // for low expected values use the Knuth method
        if self.lambda < 12.0 {
            let mut result = 0.;
            let mut p = 1.0;
            while p > self.exp_lambda {
                p *= rng.gen::<f64>();
                result += 1.;
            }
            result - 1.
        }
        // high expected values - rejection method
        else {
            // we use the Cauchy distribution as the comparison distribution
            // f(x) ~ 1/(1+x^2)
            let cauchy = Cauchy::<f64>::standard();
            let mut result;

            loop {
                let mut comp_dev;

                loop {
                    // draw from the Cauchy distribution
                    comp_dev = rng.sample(cauchy);
                    // shift the peak of the comparison distribution
                    result = self.sqrt_2lambda * comp_dev + self.lambda;
                    // repeat the drawing until we are in the range of possible values
                    if result >= 0.0 {
                        break;
                    }
                }
                // now the result is a random variable greater than 0 with Cauchy distribution
                // the result should be an integer value
                result = result.floor();

                // this is the ratio of the Poisson distribution to the comparison distribution
                // the magic value scales the distribution function to a range of approximately 0-1
                // since it is not exact, we multiply the ratio by 0.9 to avoid ratios greater than 1
                // this doesn't change the resulting distribution, only increases the rate of failed drawings
                let check = 0.9
                    * (1.0 + comp_dev * comp_dev)
                    * (result * self.log_lambda - log_gamma(1.0 + result) - self.magic_val).exp();

                // check with uniform random value - if below the threshold, we are within the target distribution
                if rng.gen::<f64>() <= check {
                    break;
                }
            }
            result
        }
    }
}

impl Distribution<u64> for Poisson {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let result: f64 = self.sample(rng);
        result.to_count()
    }
}
