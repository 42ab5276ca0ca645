//! Seeded simplex noise over 2D and 3D space.
//!
//! Both samplers skew the input onto an axis-aligned lattice, walk the corners
//! of the containing simplex, and sum one radially attenuated gradient
//! contribution per corner. A corner's contribution and its derivative vanish
//! at the falloff radius, so the field is C1-continuous across cell borders.

use crate::error::NoiseError;
use crate::math::floor;
use crate::noise::permutation::{PERMUTATION_SIZE, PermutationTable};
use crate::noise::{GRADIENT, GRADIENT_COUNT};
use crate::random::legacy_random::{LegacyRandom, MAX_SEED};

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;

/// Squared falloff radius of a 2D corner.
const FALLOFF_2D: f64 = 0.5;
/// Squared falloff radius of a 3D corner.
const FALLOFF_3D: f64 = 0.6;
/// Brings 2D output into `(-1, 1)`; the observed peak is about `0.9979`.
const SCALE_2D: f64 = 70.0;
/// Brings 3D output into `(-1, 1)`; the observed peak is about `0.979`.
const SCALE_3D: f64 = 32.0;

/// A deterministic simplex noise field.
///
/// The permutation table is fixed at construction and never mutated, so a
/// field is a pure function of its input and can be shared across threads
/// without synchronization.
///
/// Non-finite coordinates are not rejected: NaN propagates to the result and
/// infinities produce either NaN or a finite value, never a panic.
///
/// The lattice cell index is an `i32`. Once a skewed coordinate passes about
/// `±2^31` the index saturates, every corner offset lies far outside the
/// falloff radius and the field is constant `0.0` there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseField {
    perm: PermutationTable,
}

impl NoiseField {
    /// Build a field whose permutation is shuffled by a [`LegacyRandom`] seeded
    /// with `seed`.
    ///
    /// Accepted seeds are `0..=MAX_SEED` (48 bits). Larger seeds would alias a
    /// smaller one and are rejected.
    pub fn create(seed: u64) -> Result<Self, NoiseError> {
        if seed > MAX_SEED {
            return Err(NoiseError::SeedOutOfRange(seed));
        }
        tracing::debug!(seed, "building simplex noise field");
        Ok(Self::from_seed_unchecked(seed))
    }

    /// Build a field from an explicit permutation of `0..256`.
    pub fn from_permutation(table: [u8; PERMUTATION_SIZE]) -> Result<Self, NoiseError> {
        let perm = PermutationTable::from_table(table)?;
        tracing::trace!("building simplex noise field from explicit permutation");
        Ok(Self { perm })
    }

    /// Caller guarantees `seed <= MAX_SEED`.
    pub(crate) fn from_seed_unchecked(seed: u64) -> Self {
        let mut rng = LegacyRandom::from_seed(seed);
        Self {
            perm: PermutationTable::shuffled(&mut rng),
        }
    }

    /// The permutation table backing this field.
    #[must_use]
    pub const fn permutation(&self) -> &[u8; PERMUTATION_SIZE] {
        self.perm.as_array()
    }

    #[inline]
    const fn gradient_index(hash: i32) -> usize {
        (hash % GRADIENT_COUNT as i32) as usize
    }

    #[inline]
    fn corner_2d(index: usize, x: f64, y: f64) -> f64 {
        let t = FALLOFF_2D - x * x - y * y;
        // `<=` leaves NaN on the contributing branch so it reaches the output.
        if t <= 0.0 {
            0.0
        } else {
            let g = &GRADIENT[index];
            let t = t * t;
            t * t * (f64::from(g[0]) * x + f64::from(g[1]) * y)
        }
    }

    #[inline]
    fn corner_3d(index: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = FALLOFF_3D - x * x - y * y - z * z;
        if t <= 0.0 {
            0.0
        } else {
            let g = &GRADIENT[index];
            let t = t * t;
            t * t * (f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z)
        }
    }

    /// Sample 2D noise at `(x, y)`.
    ///
    /// Returns a value in `(-1, 1)`.
    #[must_use]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = floor(x + s);
        let j = floor(y + s);
        let t = (f64::from(i) + f64::from(j)) * G2;
        let x0 = x - (f64::from(i) - t);
        let y0 = y - (f64::from(j) - t);

        // Lower triangle steps x first, upper triangle steps y first.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = i & 0xFF;
        let jj = j & 0xFF;
        let p = &self.perm;
        let gi0 = Self::gradient_index(p.p(ii + p.p(jj)));
        let gi1 = Self::gradient_index(p.p(ii + i1 + p.p(jj + j1)));
        let gi2 = Self::gradient_index(p.p(ii + 1 + p.p(jj + 1)));

        let n0 = Self::corner_2d(gi0, x0, y0);
        let n1 = Self::corner_2d(gi1, x1, y1);
        let n2 = Self::corner_2d(gi2, x2, y2);

        SCALE_2D * (n0 + n1 + n2)
    }

    /// Sample 3D noise at `(x, y, z)`.
    ///
    /// Returns a value in `(-1, 1)`.
    #[must_use]
    pub fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * F3;
        let i = floor(x + s);
        let j = floor(y + s);
        let k = floor(z + s);
        let t = (f64::from(i) + f64::from(j) + f64::from(k)) * G3;
        let x0 = x - (f64::from(i) - t);
        let y0 = y - (f64::from(j) - t);
        let z0 = z - (f64::from(k) - t);

        // Rank the offsets to pick one of the six tetrahedra in the cube.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + F3;
        let y2 = y0 - f64::from(j2) + F3;
        let z2 = z0 - f64::from(k2) + F3;
        let x3 = x0 - 1.0 + 0.5;
        let y3 = y0 - 1.0 + 0.5;
        let z3 = z0 - 1.0 + 0.5;

        let ii = i & 0xFF;
        let jj = j & 0xFF;
        let kk = k & 0xFF;
        let p = &self.perm;
        let gi0 = Self::gradient_index(p.p(ii + p.p(jj + p.p(kk))));
        let gi1 = Self::gradient_index(p.p(ii + i1 + p.p(jj + j1 + p.p(kk + k1))));
        let gi2 = Self::gradient_index(p.p(ii + i2 + p.p(jj + j2 + p.p(kk + k2))));
        let gi3 = Self::gradient_index(p.p(ii + 1 + p.p(jj + 1 + p.p(kk + 1))));

        let n0 = Self::corner_3d(gi0, x0, y0, z0);
        let n1 = Self::corner_3d(gi1, x1, y1, z1);
        let n2 = Self::corner_3d(gi2, x2, y2, z2);
        let n3 = Self::corner_3d(gi3, x3, y3, z3);

        SCALE_3D * (n0 + n1 + n2 + n3)
    }

    /// Sample at a coordinate given as a slice of 2 or 3 components.
    pub fn sample(&self, coords: &[f64]) -> Result<f64, NoiseError> {
        match *coords {
            [x, y] => Ok(self.sample_2d(x, y)),
            [x, y, z] => Ok(self.sample_3d(x, y, z)),
            _ => Err(NoiseError::UnsupportedDimension(coords.len())),
        }
    }
}

impl Default for NoiseField {
    /// The field built from [`DEFAULT_SEED`](crate::DEFAULT_SEED).
    fn default() -> Self {
        Self::from_seed_unchecked(crate::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> NoiseField {
        NoiseField::create(seed).expect("seed is in range")
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn golden_values_seed_42() {
        let noise = field(42);
        assert_eq!(noise.sample_2d(0.0, 0.0), 0.0);
        assert_eq!(noise.sample_2d(1.5, 2.25), 0.640_683_330_250_466_6);
        assert_eq!(noise.sample_2d(-3.7, 0.1), 0.468_667_082_016_664_1);
        assert_eq!(noise.sample_2d(10.0, 10.0), -0.449_123_253_939_924_75);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn golden_values_3d_seed_42() {
        let noise = field(42);
        assert_eq!(noise.sample_3d(0.0, 0.0, 0.0), 0.0);
        assert_eq!(noise.sample_3d(1.5, 2.25, -0.75), -0.658_252_083_333_333_5);
        assert_eq!(noise.sample_3d(-3.7, 0.1, 12.4), -0.470_593_451_456_791_4);
    }

    /// Points along a skewed ray that crosses many simplex cells.
    fn ray(count: i32) -> impl Iterator<Item = (f64, f64, f64)> {
        (0..count).map(|i| {
            let i = f64::from(i);
            (i * 0.61, i * -0.47, i * 0.29)
        })
    }

    #[test]
    fn repeated_and_rebuilt_fields_agree_bitwise() {
        let noise = field(42);
        let rebuilt = field(42);

        for (x, y, z) in ray(256) {
            let first = noise.sample_2d(x, y).to_bits();
            assert_eq!(first, noise.sample_2d(x, y).to_bits());
            assert_eq!(first, rebuilt.sample_2d(x, y).to_bits());
            assert_eq!(
                noise.sample_3d(x, y, z).to_bits(),
                rebuilt.sample_3d(x, y, z).to_bits()
            );
        }
    }

    fn spread(values: &[f64]) -> (f64, usize) {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        let sign_changes = values
            .windows(2)
            .filter(|w| (w[0] < 0.0) != (w[1] < 0.0))
            .count();
        (variance.sqrt(), sign_changes)
    }

    #[test]
    fn values_vary_along_a_ray() {
        let noise = field(42);

        let flat: Vec<f64> = ray(40).map(|(x, y, _)| noise.sample_2d(x, y)).collect();
        let (deviation, sign_changes) = spread(&flat);
        assert!(deviation > 0.2, "2D deviation {deviation} too small");
        assert!(sign_changes > 10, "2D changed sign only {sign_changes} times");

        let solid: Vec<f64> = ray(40).map(|(x, y, z)| noise.sample_3d(x, y, z)).collect();
        let (deviation, sign_changes) = spread(&solid);
        assert!(deviation > 0.2, "3D deviation {deviation} too small");
        assert!(sign_changes > 10, "3D changed sign only {sign_changes} times");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn saturated_cells_collapse_to_zero() {
        let noise = field(42);
        assert_eq!(noise.sample_2d(-3e9, 0.5), 0.0);
        assert_eq!(noise.sample_2d(3e9, 0.5), 0.0);
        assert_eq!(noise.sample_2d(-2.2e9, -2.2e9), 0.0);
        assert_eq!(noise.sample_3d(-1e12, 0.0, 0.0), 0.0);
        assert_eq!(noise.sample_3d(0.0, -1e12, 1e12), 0.0);
        assert_eq!(noise.sample(&[-1e300, -1e300]), Ok(0.0));
    }

    #[test]
    fn seed_out_of_range_is_rejected() {
        assert_eq!(
            NoiseField::create(MAX_SEED + 1),
            Err(NoiseError::SeedOutOfRange(MAX_SEED + 1))
        );
        assert_eq!(
            NoiseField::create(u64::MAX),
            Err(NoiseError::SeedOutOfRange(u64::MAX))
        );
        assert!(NoiseField::create(MAX_SEED).is_ok());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn slice_sampling_dispatches_on_length() {
        let noise = field(42);
        assert_eq!(noise.sample(&[1.5, 2.25]), Ok(noise.sample_2d(1.5, 2.25)));
        assert_eq!(
            noise.sample(&[1.5, 2.25, -0.75]),
            Ok(noise.sample_3d(1.5, 2.25, -0.75))
        );
        assert_eq!(noise.sample(&[]), Err(NoiseError::UnsupportedDimension(0)));
        assert_eq!(
            noise.sample(&[1.0, 2.0, 3.0, 4.0]),
            Err(NoiseError::UnsupportedDimension(4))
        );
    }

    #[test]
    fn explicit_permutation_matches_seeded_field() {
        let seeded = field(42);
        let rebuilt = NoiseField::from_permutation(*seeded.permutation())
            .expect("seeded table is a permutation");
        assert_eq!(seeded, rebuilt);
    }

    #[test]
    fn nan_propagates() {
        let noise = field(42);
        assert!(noise.sample_2d(f64::NAN, 0.5).is_nan());
        assert!(noise.sample_2d(0.5, f64::NAN).is_nan());
        assert!(noise.sample_3d(0.5, f64::NAN, 0.5).is_nan());
    }

    #[test]
    fn infinite_input_does_not_panic() {
        let noise = field(42);
        for v in [
            noise.sample_2d(f64::INFINITY, 0.0),
            noise.sample_2d(f64::NEG_INFINITY, f64::INFINITY),
            noise.sample_3d(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            noise.sample_2d(1e300, -1e300),
            noise.sample_2d(f64::NEG_INFINITY, 0.0),
            noise.sample_2d(f64::NEG_INFINITY, f64::NEG_INFINITY),
            noise.sample_3d(f64::NEG_INFINITY, 0.0, 0.0),
        ] {
            assert!(v.is_nan() || v.abs() < 1.0, "unexpected {v}");
        }
    }

    #[test]
    fn default_uses_default_seed() {
        assert_eq!(NoiseField::default(), field(crate::DEFAULT_SEED));
    }
}
