// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Math helper functions

use crate::{Open01, OpenClosed01, Standard};
use core::fmt;
use rand::Rng;

/// Trait for the floating-point working types of the samplers
///
/// Every sampler in this crate is generic over `F: Float` and performs all of
/// its arithmetic in `F`, so an `f32` sampler never widens to `f64`
/// internally. Besides the arithmetic of [`num_traits::Float`], the trait
/// provides the three unit-interval primitives the samplers are built on.
///
/// The bounds and methods are based purely on internal requirements, and will
/// change as needed. The trait is implemented for `f32` and `f64` only.
pub trait Float:
    num_traits::Float + num_traits::FloatConst + fmt::Debug + Send + Sync + 'static
{
    /// Support approximate representation of a `f64` value
    fn cast(x: f64) -> Self;

    /// Sample from the half-open interval `[0, 1)`
    fn standard<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Sample from the open interval `(0, 1)`
    fn open01<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Sample from the half-open interval `(0, 1]`
    fn open_closed01<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// The largest representable value below `self`, for finite `self`.
    fn next_below(self) -> Self;

    /// Convert to an unsigned count, saturating at `u64::MAX`.
    ///
    /// Negative values and NaN map to zero.
    fn to_count(self) -> u64;
}

macro_rules! float_impl {
    ($ty:ident) => {
        impl Float for $ty {
            #[inline]
            fn cast(x: f64) -> Self {
                x as $ty
            }

            #[inline]
            fn standard<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.sample(Standard)
            }

            #[inline]
            fn open01<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.sample(Open01)
            }

            #[inline]
            fn open_closed01<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.sample(OpenClosed01)
            }

            #[inline]
            fn next_below(self) -> Self {
                if self > 0.0 {
                    <$ty>::from_bits(self.to_bits() - 1)
                } else if self < 0.0 {
                    <$ty>::from_bits(self.to_bits() + 1)
                } else {
                    -<$ty>::from_bits(1)
                }
            }

            #[inline]
            fn to_count(self) -> u64 {
                // `as` saturates: NaN becomes 0, +inf becomes u64::MAX
                self as u64
            }
        }
    };
}

float_impl!(f32);
float_impl!(f64);

/// Calculates ln(gamma(x)) (natural logarithm of the gamma
/// function) using the Lanczos approximation.
///
/// The approximation expresses the gamma function as:
/// `gamma(z+1) = sqrt(2*pi)*(z+g+0.5)^(z+0.5)*exp(-z-g-0.5)*Ag(z)`
/// `g` is an arbitrary constant; we use the approximation with `g=5`.
///
/// Noting that `gamma(z+1) = z*gamma(z)` and applying `ln` to both sides:
/// `ln(gamma(z)) = (z+0.5)*ln(z+g+0.5)-(z+g+0.5) + ln(sqrt(2*pi)*Ag(z)/z)`
///
/// `Ag(z)` is an infinite series with coefficients that can be calculated
/// ahead of time - we use just the first 6 terms, which is good enough
/// for most purposes.
pub(crate) fn log_gamma<F: Float>(x: F) -> F {
    // precalculated 6 coefficients for the first 6 terms of the series
    let coefficients: [F; 6] = [
        F::cast(76.18009172947146),
        F::cast(-86.50532032941677),
        F::cast(24.01409824083091),
        F::cast(-1.231739572450155),
        F::cast(0.1208650973866179e-2),
        F::cast(-0.5395239384953e-5),
    ];

    // (x+0.5)*ln(x+g+0.5)-(x+g+0.5)
    let tmp = x + F::cast(5.5);
    let log = (x + F::cast(0.5)) * tmp.ln() - tmp;

    // the first few terms of the series for Ag(x)
    let mut a = F::cast(1.000000000190015);
    let mut denom = x;
    for &coeff in &coefficients {
        denom = denom + F::one();
        a = a + coeff / denom;
    }

    // get everything together
    // a is Ag(x)
    // 2.5066... is sqrt(2pi)
    log + (F::cast(2.5066282746310005) * a / x).ln()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn log_gamma_known_values() {
        // ln(Γ(1)) = ln(Γ(2)) = 0, ln(Γ(5)) = ln(24)
        assert!(log_gamma(1.0f64).abs() < 1e-9);
        assert!(log_gamma(2.0f64).abs() < 1e-9);
        assert!((log_gamma(5.0f64) - 24f64.ln()).abs() < 1e-9);
        assert!((log_gamma(5.0f32) - 24f32.ln()).abs() < 1e-4);
    }

    #[test]
    fn unit_intervals() {
        let mut rng = crate::test::rng(101);
        for _ in 0..1000 {
            let x: f32 = Float::standard(&mut rng);
            assert!((0.0..1.0).contains(&x));
            let y: f64 = Float::open01(&mut rng);
            assert!(y > 0.0 && y < 1.0);
            let z: f64 = Float::open_closed01(&mut rng);
            assert!(z > 0.0 && z <= 1.0);
        }
    }

    #[test]
    fn next_below_steps_one_ulp() {
        assert_eq!(1.0f32.next_below(), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(2.0f64.next_below(), 2.0 - f64::EPSILON);
        assert_eq!((-1.0f64).next_below(), -1.0 - f64::EPSILON);
        assert!(0.0f32.next_below() < 0.0);
        assert!(f64::MIN_POSITIVE.next_below() < f64::MIN_POSITIVE);
    }

    #[test]
    fn to_count_saturates() {
        assert_eq!(3.7f64.to_count(), 3);
        assert_eq!((-1.0f32).to_count(), 0);
        assert_eq!(f64::NAN.to_count(), 0);
        assert_eq!(f64::INFINITY.to_count(), u64::MAX);
    }
}
