//! Simplex-family gradient noise.
//!
//! - [`NoiseField`] - seeded 2D/3D simplex noise sampler
//! - [`PermutationTable`] - the shuffled lattice hash backing a field

mod noise_field;
mod permutation;

pub use noise_field::NoiseField;
pub use permutation::{PERMUTATION_SIZE, PermutationTable};

/// Gradient directions indexed by `hash % 12`: the twelve cube edge midpoints.
///
/// The last four rows repeat edges so the table can also be indexed with
/// `hash & 15`. 2D sampling projects onto the `(x, y)` components.
pub(crate) const GRADIENT: [[i32; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [0, -1, 1],
    [-1, 1, 0],
    [0, -1, -1],
];

/// Number of distinct gradients selected by the lattice hash.
pub(crate) const GRADIENT_COUNT: u8 = 12;
