//! Deterministic simplex gradient noise.
//!
//! A [`NoiseField`] owns a seeded permutation table and samples smooth,
//! bounded pseudo-random scalar fields over 2D and 3D space. Sampling is a
//! pure function of the coordinate, allocation-free, and safe to call from any
//! number of threads against one shared field.
//!
//! ```
//! use simplex_noise::NoiseField;
//!
//! let field = NoiseField::create(42)?;
//! let value = field.sample_2d(1.5, 2.25);
//! assert!(value.abs() < 1.0);
//! # Ok::<(), simplex_noise::NoiseError>(())
//! ```

use std::sync::LazyLock;

pub mod batch;
pub mod error;
pub mod math;
pub mod noise;
pub mod random;
pub mod settings;

pub use error::NoiseError;
pub use noise::NoiseField;
pub use random::legacy_random::MAX_SEED;
pub use settings::NoiseSettings;

/// Seed of the process-wide field returned by [`default_field`].
pub const DEFAULT_SEED: u64 = 0;

static DEFAULT_FIELD: LazyLock<NoiseField> = LazyLock::new(NoiseField::default);

/// The process-wide field built once from [`DEFAULT_SEED`].
#[must_use]
pub fn default_field() -> &'static NoiseField {
    &DEFAULT_FIELD
}

/// Sample the process-wide field at `(x, y)`.
///
/// Returns a value in `(-1, 1)`.
#[must_use]
pub fn noise(x: f64, y: f64) -> f64 {
    DEFAULT_FIELD.sample_2d(x, y)
}
