// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weighted index sampling

use crate::Distribution;
use alloc::vec::Vec;
use core::fmt;
use rand::distributions::Uniform;
use rand::Rng;

/// A distribution using weighted sampling of discrete items
///
/// Sampling a `Discrete` distribution returns the index of a randomly
/// selected element from the iterator used when the `Discrete` was created.
/// The chance of a given element being picked is proportional to the weight
/// of the element. Elements with zero weight are never picked.
///
/// The weights are stored as a table of `N - 1` cumulative sums; sampling
/// draws one uniform value in `[0, total)` and binary-searches the table, so
/// it takes `O(log N)` time.
///
/// # Example
///
/// ```
/// use rand::prelude::*;
/// use rand_array_distr::Discrete;
///
/// let choices = ['a', 'b', 'c'];
/// let weights = [2.0, 1.0, 1.0];
/// let dist = Discrete::new(weights).unwrap();
/// let mut rng = thread_rng();
/// for _ in 0..100 {
///     // 50% chance to print 'a', 25% chance to print 'b', 25% chance to print 'c'
///     let i: usize = dist.sample(&mut rng);
///     println!("{}", choices[i]);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Discrete {
    cumulative_weights: Vec<f64>,
    total_weight: f64,
    weight_distribution: Uniform<f64>,
}

/// Invalid weight errors
///
/// This type represents errors from [`Discrete::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightError {
    /// The input weight sequence is empty.
    InvalidInput,

    /// A weight is negative, too large for the distribution, or not a valid
    /// number.
    InvalidWeight,

    /// Not enough non-zero weights are available to sample values.
    InsufficientNonZero,

    /// Overflow when calculating the sum of weights.
    Overflow,
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            WeightError::InvalidInput => "Weights sequence is empty",
            WeightError::InvalidWeight => "A weight is negative, too large or not a valid number",
            WeightError::InsufficientNonZero => "Not enough weights > zero",
            WeightError::Overflow => "Overflow when summing weights",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WeightError {}

impl Discrete {
    /// Creates a new `Discrete` [`Distribution`] using the values in
    /// `weights`.
    ///
    /// Error cases:
    /// -   [`WeightError::InvalidInput`] when the iterator `weights` is empty.
    /// -   [`WeightError::InvalidWeight`] when a weight is not-a-number,
    ///     negative or infinite.
    /// -   [`WeightError::InsufficientNonZero`] when the sum of all weights is zero.
    /// -   [`WeightError::Overflow`] when the sum of all weights overflows.
    pub fn new<I>(weights: I) -> Result<Discrete, WeightError>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        let mut iter = weights.into_iter();
        let mut total_weight: f64 = iter.next().ok_or(WeightError::InvalidInput)?.into();
        if !(total_weight >= 0.0 && total_weight.is_finite()) {
            return Err(WeightError::InvalidWeight);
        }

        let mut cumulative_weights = Vec::with_capacity(iter.size_hint().0);
        for w in iter {
            let w: f64 = w.into();
            // Note that `!(w >= x)` is not equivalent to `w < x` because of
            // NaNs which are equal to nothing.
            if !(w >= 0.0 && w.is_finite()) {
                return Err(WeightError::InvalidWeight);
            }
            cumulative_weights.push(total_weight);
            total_weight += w;
            if total_weight.is_infinite() {
                return Err(WeightError::Overflow);
            }
        }

        if total_weight == 0.0 {
            return Err(WeightError::InsufficientNonZero);
        }

        Ok(Discrete {
            cumulative_weights,
            total_weight,
            // 0 < total_weight < inf was checked above
            weight_distribution: Uniform::new(0.0, total_weight),
        })
    }

    /// Number of categories, i.e. the length of the weight sequence.
    pub fn len(&self) -> usize {
        self.cumulative_weights.len() + 1
    }

    /// Always `false`: an empty weight sequence is rejected by `new`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

impl Distribution<usize> for Discrete {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let chosen_weight = self.weight_distribution.sample(rng);
        // Find the first item which has a weight *higher* than the chosen weight.
        self.cumulative_weights
            .partition_point(|w| *w <= chosen_weight)
    }
}

impl Distribution<u64> for Discrete {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let index: usize = self.sample(rng);
        index as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accepting_nan() {
        assert_eq!(
            Discrete::new([f64::NAN, 0.5]).unwrap_err(),
            WeightError::InvalidWeight,
        );
        assert_eq!(
            Discrete::new([f64::NAN]).unwrap_err(),
            WeightError::InvalidWeight,
        );
        assert_eq!(
            Discrete::new([0.5, f64::NAN]).unwrap_err(),
            WeightError::InvalidWeight,
        );
    }

    #[test]
    fn test_rejecting_infinite() {
        assert_eq!(
            Discrete::new([1.0, f64::INFINITY]).unwrap_err(),
            WeightError::InvalidWeight,
        );
        assert_eq!(
            Discrete::new([f64::MAX, f64::MAX]).unwrap_err(),
            WeightError::Overflow,
        );
    }

    #[test]
    fn test_weighted_index() {
        let mut r = crate::test::rng(700);
        const N_REPS: u32 = 20_000;
        let weights = [1u32, 2, 3, 0, 5, 6, 7, 1, 2, 3, 4, 5, 6, 7];
        let total_weight = weights.iter().sum::<u32>() as f32;

        let verify = |result: [i32; 14]| {
            for (i, count) in result.iter().enumerate() {
                let exp = (weights[i] * N_REPS) as f32 / total_weight;
                let mut err = (*count as f32 - exp).abs();
                if err != 0.0 {
                    err /= exp;
                }
                assert!(err <= 0.25);
            }
        };

        let mut chosen = [0i32; 14];
        let distr = Discrete::new(weights).unwrap();
        assert_eq!(distr.len(), 14);
        for _ in 0..N_REPS {
            let i: usize = distr.sample(&mut r);
            chosen[i] += 1;
        }
        verify(chosen);

        // Zero-weight entries at either end are never picked
        for _ in 0..1000 {
            let i: usize = Discrete::new([0.0, 1.0, 0.0]).unwrap().sample(&mut r);
            assert_eq!(i, 1);
        }

        assert_eq!(
            Discrete::new(Vec::<f64>::new()).unwrap_err(),
            WeightError::InvalidInput
        );
        assert_eq!(
            Discrete::new([0.0, 0.0]).unwrap_err(),
            WeightError::InsufficientNonZero
        );
        assert_eq!(
            Discrete::new([10.0, 20.0, -1.0, 30.0]).unwrap_err(),
            WeightError::InvalidWeight
        );
    }

    #[test]
    fn test_single_category() {
        let mut r = crate::test::rng(701);
        let distr = Discrete::new([0.3f32]).unwrap();
        for _ in 0..100 {
            let i: u64 = distr.sample(&mut r);
            assert_eq!(i, 0);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            WeightError::InsufficientNonZero.to_string(),
            "Not enough weights > zero"
        );
    }
}
