//! Seeded pseudo-random sources used to build permutation tables.
//!
//! Only the operations the noise constructors need are exposed. The
//! generators are deterministic: the same seed always replays the same stream.

pub mod legacy_random;

/// A deterministic pseudo-random number stream.
pub trait Random {
    /// Returns the next uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Returns a uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}
