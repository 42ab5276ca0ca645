//! Errors produced while building or querying noise fields.

use thiserror::Error;

use crate::random::legacy_random::MAX_SEED;

/// An error that can occur while constructing or sampling a noise field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The seed does not fit the generator's 48-bit state.
    #[error("Seed {0} is outside the accepted range 0..={max}", max = MAX_SEED)]
    SeedOutOfRange(u64),
    /// An explicit permutation table repeats a value.
    #[error("Permutation table is not a permutation of 0..256: {0} appears more than once")]
    DuplicatePermutationEntry(u8),
    /// A coordinate slice had a dimensionality other than 2 or 3.
    #[error("Unsupported dimensionality {0}, expected 2 or 3 coordinates")]
    UnsupportedDimension(usize),
    /// The output buffer of a batch sample does not match the input length.
    #[error("Batch output holds {output} values but {points} points were given")]
    BatchLengthMismatch {
        /// Number of input points.
        points: usize,
        /// Length of the output buffer.
        output: usize,
    },
    /// Noise settings text could not be parsed.
    #[error("Failed to parse noise settings: {0}")]
    InvalidSettings(String),
}
