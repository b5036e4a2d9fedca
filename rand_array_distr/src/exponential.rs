// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The exponential distribution.

use crate::{Distribution, Float};
use core::fmt;
use rand::Rng;

/// Samples floating-point numbers according to the exponential distribution,
/// with rate parameter `λ = 1`. This is equivalent to `Exp::new(1.0)`.
///
/// See `Exp` for the general exponential distribution.
///
/// Implemented by inversion: `-ln(u)` with `u` drawn from `(0, 1]`, so the
/// result is always finite.
///
/// # Example
/// ```
/// use rand::prelude::*;
/// use rand_array_distr::Exp1;
///
/// let val: f64 = thread_rng().sample(Exp1);
/// println!("{}", val);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Exp1;

impl<F: Float> Distribution<F> for Exp1 {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        -F::open_closed01(rng).ln()
    }
}

/// The exponential distribution `Exp(lambda)`.
///
/// This distribution has density function: `f(x) = lambda * exp(-lambda * x)`
/// for `x > 0`, when `lambda > 0`. For `lambda = 0`, all samples yield
/// infinity.
///
/// Note that [`Exp1`](crate::Exp1) is an optimised implementation for `lambda = 1`.
///
/// # Example
///
/// ```
/// use rand_array_distr::{Exp, Distribution};
///
/// let exp = Exp::new(2.0).unwrap();
/// let v: f64 = exp.sample(&mut rand::thread_rng());
/// println!("{} is from a Exp(2) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Exp<F> {
    /// `lambda` stored as `1/lambda`, since this is what we scale by.
    lambda_inverse: F,
}

/// Error type returned from `Exp::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `lambda < 0` or `nan`.
    LambdaTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::LambdaTooSmall => "lambda is negative or NaN in exponential distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl<F: Float> Exp<F> {
    /// Construct a new `Exp` with the given shape parameter
    /// `lambda`.
    #[inline]
    pub fn new(lambda: F) -> Result<Exp<F>, Error> {
        if !(lambda >= F::zero()) {
            return Err(Error::LambdaTooSmall);
        }
        Ok(Exp {
            lambda_inverse: F::one() / lambda,
        })
    }

    /// Construct a new `Exp` from its scale `1 / lambda`.
    ///
    /// The scale must be strictly positive; this is the parameterisation the
    /// array catalog exposes.
    #[inline]
    pub fn from_scale(scale: F) -> Result<Exp<F>, Error> {
        if !(scale > F::zero()) {
            return Err(Error::LambdaTooSmall);
        }
        Exp::new(F::one() / scale)
    }
}

impl<F: Float> Distribution<F> for Exp<F> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let e: F = rng.sample(Exp1);
        e * self.lambda_inverse
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exp() {
        let exp = Exp::new(10.0).unwrap();
        let mut rng = crate::test::rng(221);
        for _ in 0..1000 {
            let x: f64 = exp.sample(&mut rng);
            assert!(x >= 0.0);
        }
    }

    #[test]
    fn test_zero() {
        let d = Exp::new(0.0).unwrap();
        let x: f64 = d.sample(&mut crate::test::rng(21));
        assert_eq!(x, f64::INFINITY);
    }

    #[test]
    fn test_exp_invalid_lambda() {
        assert_eq!(Exp::new(-10.0), Err(Error::LambdaTooSmall));
        assert_eq!(Exp::new(f64::NAN), Err(Error::LambdaTooSmall));
        assert_eq!(Exp::from_scale(0.0), Err(Error::LambdaTooSmall));
    }

    #[test]
    fn test_exp_scale_mean() {
        let exp = Exp::from_scale(2.0f64).unwrap();
        let mut rng = crate::test::rng(222);
        let (mean, variance) = crate::test::moments(10_000, || exp.sample(&mut rng));
        assert!((mean - 2.0).abs() < 0.1);
        assert!((variance - 4.0).abs() < 0.5);
    }
}
