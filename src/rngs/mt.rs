// Copyright 2024 Developers of the Rand Array project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 32-bit Mersenne Twister

use core::fmt;
use rand_core::{impls, le, Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// The MT19937 Mersenne Twister[^1], producing 32-bit words.
///
/// Seeding follows the reference `init_genrand`: the state is expanded from
/// a single 32-bit value with the multiplier `1812433253`. A generator seeded
/// with `5489` reproduces the reference output stream, whose 10000th value is
/// `4123659995`.
///
/// The Mersenne Twister is not suitable for cryptographic purposes.
///
/// [^1]: Matsumoto, M. and Nishimura, T. (1998). "Mersenne Twister: a
///       623-dimensionally equidistributed uniform pseudo-random number
///       generator". *ACM Trans. Model. Comput. Simul.* 8, 1, 3–30.
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mt19937 {{}}")
    }
}

impl Mt19937 {
    /// Construct a generator seeded with `seed`, as `init_genrand` does.
    pub fn new(seed: u32) -> Mt19937 {
        let mut rng = Mt19937 {
            state: [0; N],
            index: N,
        };
        rng.reseed(seed);
        rng
    }

    /// Reinitialise the state in place from `seed`.
    pub fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    // Regenerate all N words of the state in one pass.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u32 = [0u32; 1];
        le::read_u32_into(&seed, &mut seed_u32);
        Mt19937::new(seed_u32[0])
    }

    /// Seeds with the low 32 bits of `state`, unlike the default
    /// implementation which scrambles the value first.
    fn seed_from_u64(state: u64) -> Self {
        Mt19937::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mt19937_reference() {
        let mut rng = Mt19937::new(5489);
        assert_eq!(rng.next_u32(), 3_499_211_612);
        assert_eq!(rng.next_u32(), 581_869_302);
        for _ in 2..9999 {
            rng.next_u32();
        }
        assert_eq!(rng.next_u32(), 4_123_659_995);
    }

    #[test]
    fn test_mt19937_construction() {
        let mut rng1 = Mt19937::from_seed(5489u32.to_le_bytes());
        let mut rng2 = Mt19937::seed_from_u64(5489);
        let mut rng3 = Mt19937::seed_from_u64((1 << 32) | 5489);
        for _ in 0..100 {
            let x = rng1.next_u32();
            assert_eq!(x, rng2.next_u32());
            assert_eq!(x, rng3.next_u32());
        }
    }

    #[test]
    fn test_mt19937_reseed() {
        let mut rng = Mt19937::new(1);
        for _ in 0..1000 {
            rng.next_u32();
        }
        rng.reseed(7);
        assert_eq!(rng, Mt19937::new(7));
    }

    #[test]
    fn test_mt19937_debug() {
        assert_eq!(format!("{:?}", Mt19937::new(0)), "Mt19937 {}");
    }
}
