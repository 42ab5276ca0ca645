//! Construction settings for noise fields, loadable from JSON5.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::DEFAULT_SEED;
use crate::error::NoiseError;
use crate::noise::NoiseField;
use crate::random::legacy_random::MAX_SEED;

/// Settings used to build a [`NoiseField`].
///
/// Missing fields fall back to their defaults, so `{}` is valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    /// Seed for the permutation shuffle, `0..=MAX_SEED`.
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: u64,
}

/// Accepts any whole number in `0..=MAX_SEED`, whichever numeric type the
/// format reports it as.
///
/// JSON5 numbers may arrive as floats or signed integers; a plain `u64` field
/// would let the format coerce `-1` to `0`.
fn deserialize_seed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    struct SeedVisitor;

    impl Visitor<'_> for SeedVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a whole number in 0..={MAX_SEED}")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            if v > MAX_SEED {
                return Err(E::custom(format!("seed {v} exceeds {MAX_SEED}")));
            }
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            let v = u64::try_from(v).map_err(|_| E::custom(format!("seed {v} is negative")))?;
            self.visit_u64(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if v.fract() != 0.0 || !(0.0..=MAX_SEED as f64).contains(&v) {
                return Err(E::custom(format!(
                    "seed {v} is not a whole number in 0..={MAX_SEED}"
                )));
            }
            Ok(v as u64)
        }
    }

    deserializer.deserialize_any(SeedVisitor)
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl NoiseSettings {
    /// Parse settings from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, NoiseError> {
        let settings: Self =
            serde_json5::from_str(text).map_err(|err| NoiseError::InvalidSettings(err.to_string()))?;
        tracing::debug!(seed = settings.seed, "loaded noise settings");
        Ok(settings)
    }

    /// Build the field described by these settings.
    pub fn build(&self) -> Result<NoiseField, NoiseError> {
        NoiseField::create(self.seed)
    }
}
