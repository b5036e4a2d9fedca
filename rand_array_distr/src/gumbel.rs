// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Gumbel distribution.

use crate::{Distribution, Float};
use core::fmt;
use rand::Rng;

/// Samples floating-point numbers according to the Gumbel distribution
///
/// Computed as `location - scale * ln(-ln(u))` with `u` drawn from `(0, 1]`.
///
/// # Example
/// ```
/// use rand::prelude::*;
/// use rand_array_distr::Gumbel;
///
/// let val: f64 = thread_rng().sample(Gumbel::new(1., 10.).unwrap());
/// println!("{}", val);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Gumbel<F> {
    location: F,
    scale: F,
}

/// Error type returned from `Gumbel::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// location is infinite or NaN
    LocationNotValid,
    /// scale is not finite positive number
    ScaleNotValid,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ScaleNotValid => "scale is not positive and finite in Gumbel distribution",
            Error::LocationNotValid => "location is not finite in Gumbel distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl<F: Float> Gumbel<F> {
    /// Construct a new `Gumbel` distribution with given `location` and `scale`.
    pub fn new(location: F, scale: F) -> Result<Gumbel<F>, Error> {
        if !(scale > F::zero()) || scale.is_infinite() {
            return Err(Error::ScaleNotValid);
        }
        if !location.is_finite() {
            return Err(Error::LocationNotValid);
        }
        Ok(Gumbel { location, scale })
    }
}

impl<F: Float> Distribution<F> for Gumbel<F> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let x = F::open_closed01(rng);
        self.location - self.scale * (-x.ln()).ln()
    }
}
