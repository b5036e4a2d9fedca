// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The continuous uniform distribution.

use crate::{Distribution, Float};
use core::fmt;
use rand::Rng;

/// The uniform distribution over the half-open interval `[low, high)`.
///
/// Samples are computed as `low + (high - low) * u` with `u` drawn from
/// `[0, 1)` in the working type. A result that rounds up to `high` is
/// replaced by the largest value below `high`. A degenerate interval
/// (`low == high`) is allowed and always yields `low`.
///
/// # Example
///
/// ```
/// use rand_array_distr::{Distribution, UniformReal};
///
/// let between = UniformReal::new(-1.5f64, 1.5).unwrap();
/// let v = between.sample(&mut rand::thread_rng());
/// assert!((-1.5..1.5).contains(&v));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformReal<F> {
    low: F,
    range: F,
    max: F,
}

/// Error type returned from `UniformReal::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `high - low < 0` or `nan`.
    EmptyRange,
    /// `high - low` is infinite.
    NonFinite,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::EmptyRange => "high - low must be >= 0 in uniform distribution",
            Error::NonFinite => "high - low is not finite in uniform distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl<F: Float> UniformReal<F> {
    /// Construct a new `UniformReal` over `[low, high)`.
    pub fn new(low: F, high: F) -> Result<UniformReal<F>, Error> {
        let range = high - low;
        if !(range >= F::zero()) {
            return Err(Error::EmptyRange);
        }
        if !range.is_finite() {
            return Err(Error::NonFinite);
        }
        let max = if range > F::zero() { high.next_below() } else { low };
        Ok(UniformReal { low, range, max })
    }
}

impl<F: Float> Distribution<F> for UniformReal<F> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let u = F::standard(rng);
        let v = self.low + self.range * u;
        if v > self.max {
            self.max
        } else {
            v
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_uniform_bounds() {
        let mut rng = crate::test::rng(251);
        let d = UniformReal::new(-2.0f32, 3.0).unwrap();
        for _ in 0..1000 {
            let x = d.sample(&mut rng);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_uniform_degenerate() {
        let mut rng = crate::test::rng(252);
        let d = UniformReal::new(4.0f64, 4.0).unwrap();
        for _ in 0..10 {
            assert_eq!(d.sample(&mut rng), 4.0);
        }
    }

    #[test]
    fn test_uniform_invalid() {
        assert_eq!(UniformReal::new(1.0, 0.0), Err(Error::EmptyRange));
        assert_eq!(UniformReal::new(f64::NAN, 0.0), Err(Error::EmptyRange));
        assert_eq!(
            UniformReal::new(f64::NEG_INFINITY, 0.0),
            Err(Error::NonFinite)
        );
    }

    #[test]
    fn test_uniform_excludes_high() {
        // the largest possible unit draw
        let mut rng = StepRng::new(u64::MAX, 0);
        let d = UniformReal::new(1.0f32, 2.0).unwrap();
        assert!(d.sample(&mut rng) < 2.0);
        let d = UniformReal::new(1.0f64, 2.0).unwrap();
        assert!(d.sample(&mut rng) < 2.0);
        let d = UniformReal::new(-3.0f32, 1e-30).unwrap();
        assert!(d.sample(&mut rng) < 1e-30);
    }

    #[test]
    fn test_uniform_mean() {
        let mut rng = crate::test::rng(253);
        let d = UniformReal::new(10.0f64, 20.0).unwrap();
        let (mean, variance) = crate::test::moments(5000, || d.sample(&mut rng));
        assert!((mean - 15.0).abs() < 0.3);
        assert!((variance - 100.0 / 12.0).abs() < 0.8);
    }
}
