// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Cauchy distribution.

use crate::{Distribution, Float};
use core::fmt;
use rand::Rng;

/// The Cauchy distribution `Cauchy(median, scale)`.
///
/// This distribution has a density function:
/// `f(x) = 1 / (pi * scale * (1 + ((x - median) / scale)^2))`
///
/// A scale of zero is accepted; every sample is then `median`.
///
/// # Example
///
/// ```
/// use rand_array_distr::{Cauchy, Distribution};
///
/// let cau = Cauchy::new(2.0, 5.0).unwrap();
/// let v: f64 = cau.sample(&mut rand::thread_rng());
/// println!("{} is from a Cauchy(2, 5) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Cauchy<F> {
    median: F,
    scale: F,
}

/// Error type returned from `Cauchy::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `scale < 0` or `nan`.
    ScaleTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ScaleTooSmall => "scale is negative or NaN in Cauchy distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl<F: Float> Cauchy<F> {
    /// Construct a new `Cauchy` with the given shape parameters
    /// `median` the peak location and `scale` the scale factor.
    pub fn new(median: F, scale: F) -> Result<Cauchy<F>, Error> {
        if !(scale >= F::zero()) {
            return Err(Error::ScaleTooSmall);
        }
        Ok(Cauchy { median, scale })
    }

    /// The standard Cauchy distribution, `Cauchy(0, 1)`.
    pub(crate) fn standard() -> Cauchy<F> {
        Cauchy {
            median: F::zero(),
            scale: F::one(),
        }
    }
}

impl<F: Float> Distribution<F> for Cauchy<F> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        // sample from [0, 1)
        let x = F::standard(rng);
        // get standard cauchy random number
        // note that π/2 is not exactly representable, even if x=0.5 the result is finite
        let comp_dev = (F::PI() * x).tan();
        // shift and scale according to parameters
        self.median + self.scale * comp_dev
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn median(numbers: &mut [f64]) -> f64 {
        numbers.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mid = numbers.len() / 2;
        numbers[mid]
    }

    #[test]
    fn test_cauchy_median() {
        let cauchy = Cauchy::new(10.0, 5.0).unwrap();
        let mut rng = crate::test::rng(123);
        let mut numbers: [f64; 1000] = [0.0; 1000];
        for number in &mut numbers[..] {
            *number = cauchy.sample(&mut rng);
        }
        let median = median(&mut numbers);
        assert!((median - 10.0).abs() < 0.8); // not 100% certain, but probable enough
    }

    #[test]
    fn test_cauchy_zero_scale() {
        let cauchy = Cauchy::new(-1.5f32, 0.0).unwrap();
        let mut rng = crate::test::rng(124);
        for _ in 0..10 {
            assert_eq!(cauchy.sample(&mut rng), -1.5);
        }
    }

    #[test]
    fn test_cauchy_invalid_scale() {
        assert_eq!(Cauchy::new(0.0, -1.0), Err(Error::ScaleTooSmall));
        assert_eq!(Cauchy::new(0.0, f64::NAN), Err(Error::ScaleTooSmall));
    }
}
