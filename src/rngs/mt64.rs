// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 64-bit Mersenne Twister

use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xb502_6f5a_a966_19e9;
const UPPER_MASK: u64 = 0xffff_ffff_8000_0000;
const LOWER_MASK: u64 = 0x7fff_ffff;

/// The MT19937-64 Mersenne Twister, producing 64-bit words.
///
/// Seeding follows the reference `init_genrand64` with the multiplier
/// `6364136223846793005`. A generator seeded with `5489` produces
/// `9981545732273789042` as its 10000th value.
///
/// `next_u32` returns the low half of a 64-bit word, so every call
/// consumes one full output.
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937_64 {
    state: [u64; NN],
    index: usize,
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Mt19937_64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mt19937_64 {{}}")
    }
}

impl Mt19937_64 {
    /// Construct a generator seeded with `seed`, as `init_genrand64` does.
    pub fn new(seed: u64) -> Mt19937_64 {
        let mut rng = Mt19937_64 {
            state: [0; NN],
            index: NN,
        };
        rng.reseed(seed);
        rng
    }

    /// Reinitialise the state in place from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.state[0] = seed;
        for i in 1..NN {
            let prev = self.state[i - 1];
            self.state[i] = 6_364_136_223_846_793_005u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.index = NN;
    }

    fn twist(&mut self) {
        for i in 0..NN {
            let x = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % NN] & LOWER_MASK);
            let mut next = self.state[(i + MM) % NN] ^ (x >> 1);
            if x & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl RngCore for Mt19937_64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }
        let mut x = self.state[self.index];
        self.index += 1;

        // tempering
        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71d6_7fff_eda6_0000;
        x ^= (x << 37) & 0xfff7_eee0_0000_0000;
        x ^ (x >> 43)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937_64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 1];
        le::read_u64_into(&seed, &mut seed_u64);
        Mt19937_64::new(seed_u64[0])
    }

    /// Seeds with `state` verbatim.
    fn seed_from_u64(state: u64) -> Self {
        Mt19937_64::new(state)
    }
}
