// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random number generators and the engine capability.
//!
//! ## Engines
//!
//! Four engines drive the array generator:
//!
//! -   [`Mt19937`]: the 32-bit Mersenne Twister
//! -   [`Mt19937_64`]: the 64-bit Mersenne Twister
//! -   [`Pcg32`]: PCG with 64-bit state and 32-bit output (`rand_pcg`)
//! -   [`Pcg64`]: PCG with 128-bit state and 64-bit output (`rand_pcg`)
//!
//! None of them is suitable for cryptographic use. All of them are
//! reproducible: the same seed always yields the same stream, on every
//! platform.
//!
//! ## The `Engine` trait
//!
//! [`Generator`](crate::Generator) is written once against [`Engine`]: a
//! [`RngCore`] that can be built from, and reset to, a single `u64` seed.

mod mt;
mod mt64;

pub use self::mt::Mt19937;
pub use self::mt64::Mt19937_64;
pub use rand_pcg::{Pcg32, Pcg64};

use core::fmt;
use rand_core::{RngCore, SeedableRng};

/// A seedable source of random words usable by [`Generator`](crate::Generator).
pub trait Engine: RngCore + Clone + fmt::Debug + Send {
    /// Short identifier used in log output.
    const NAME: &'static str;

    /// Construct the engine from an integer seed.
    fn seeded(seed: u64) -> Self;

    /// Replace the state as if freshly constructed from `seed`.
    fn reseed(&mut self, seed: u64) {
        *self = Self::seeded(seed);
    }
}

impl Engine for Mt19937 {
    const NAME: &'static str = "mt32";

    /// Only the low 32 bits of `seed` are used.
    fn seeded(seed: u64) -> Self {
        Mt19937::new(seed as u32)
    }

    fn reseed(&mut self, seed: u64) {
        Mt19937::reseed(self, seed as u32)
    }
}

impl Engine for Mt19937_64 {
    const NAME: &'static str = "mt64";

    fn seeded(seed: u64) -> Self {
        Mt19937_64::new(seed)
    }

    fn reseed(&mut self, seed: u64) {
        Mt19937_64::reseed(self, seed)
    }
}

impl Engine for Pcg32 {
    const NAME: &'static str = "pcg32";

    fn seeded(seed: u64) -> Self {
        Pcg32::seed_from_u64(seed)
    }
}

impl Engine for Pcg64 {
    const NAME: &'static str = "pcg64";

    fn seeded(seed: u64) -> Self {
        Pcg64::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn check_reseed<E: Engine + PartialEq>() {
        let mut rng = E::seeded(99);
        for _ in 0..10 {
            rng.next_u64();
        }
        rng.reseed(100);
        assert_eq!(rng, E::seeded(100));
    }

    #[test]
    fn reseed_equals_fresh() {
        check_reseed::<Mt19937>();
        check_reseed::<Mt19937_64>();
        check_reseed::<Pcg32>();
        check_reseed::<Pcg64>();
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = Pcg64::seeded(1);
        let mut b = Pcg64::seeded(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
