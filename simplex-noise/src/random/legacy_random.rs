//! 48-bit linear congruential generator compatible with `java.util.Random`.

use super::Random;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
/// `2^-53`, the spacing of the 53-bit doubles produced by [`LegacyRandom::next_f64`].
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Largest seed that maps to a distinct generator state.
///
/// The generator keeps 48 bits of state, so any seed above this aliases a
/// smaller one.
pub const MAX_SEED: u64 = MASK;

/// Java-compatible linear congruential generator.
///
/// Produces the same stream as `new java.util.Random(seed)` for every seed in
/// `0..=MAX_SEED`.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: u64,
}

impl LegacyRandom {
    /// Create a generator from `seed`. Bits above the 48th are discarded.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns its top `bits` bits.
    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");

        if bound & -bound == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        // Reject the tail of the 31-bit range that would bias `% bound`.
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }

    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
