//! Lattice hashing through a shuffled permutation of `0..256`.

use crate::error::NoiseError;
use crate::random::Random;

/// Number of entries in a permutation table.
pub const PERMUTATION_SIZE: usize = 256;

/// A permutation of `0..256` used to hash integer lattice coordinates.
///
/// Lookups mask their index with `0xFF`, so nested lookups such as
/// `p(i + p(j))` never index out of bounds and no mirrored second half is
/// needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; PERMUTATION_SIZE],
}

impl PermutationTable {
    /// Shuffle the identity permutation with `random`.
    ///
    /// Walks forward through the table, swapping entry `i` with a uniformly
    /// chosen entry from `i..256` (Fisher-Yates).
    pub(crate) fn shuffled<R: Random>(random: &mut R) -> Self {
        let mut p = [0u8; PERMUTATION_SIZE];
        for (i, val) in p.iter_mut().enumerate() {
            *val = i as u8;
        }

        for i in 0..PERMUTATION_SIZE {
            let offset = random.next_i32_bounded((PERMUTATION_SIZE - i) as i32) as usize;
            p.swap(i, i + offset);
        }

        Self { p }
    }

    /// Wrap an explicit table, checking that every value appears exactly once.
    pub fn from_table(p: [u8; PERMUTATION_SIZE]) -> Result<Self, NoiseError> {
        let mut seen = [false; PERMUTATION_SIZE];
        for &value in &p {
            let slot = &mut seen[usize::from(value)];
            if *slot {
                return Err(NoiseError::DuplicatePermutationEntry(value));
            }
            *slot = true;
        }
        Ok(Self { p })
    }

    /// Hash a lattice coordinate (already offset by any outer lookups).
    #[inline]
    #[must_use]
    pub const fn p(&self, x: i32) -> i32 {
        self.p[(x & 0xFF) as usize] as i32
    }

    /// The raw table.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; PERMUTATION_SIZE] {
        &self.p
    }
}
