//! Parallel sampling of many coordinates against one shared field.
//!
//! Every point is independent, so the work is split across rayon's pool with
//! no coordination beyond the shared `&NoiseField`. Results are bit-identical
//! to calling the scalar samplers in order.

use glam::{DVec2, DVec3};
use rayon::prelude::*;

use crate::error::NoiseError;
use crate::noise::NoiseField;

fn check_lengths(points: usize, output: usize) -> Result<(), NoiseError> {
    if points == output {
        Ok(())
    } else {
        Err(NoiseError::BatchLengthMismatch { points, output })
    }
}

/// Sample `field` at every 2D point, writing into `out[i]` for `points[i]`.
pub fn sample_batch_2d(
    field: &NoiseField,
    points: &[DVec2],
    out: &mut [f64],
) -> Result<(), NoiseError> {
    check_lengths(points.len(), out.len())?;
    tracing::trace!(points = points.len(), "sampling 2D batch");

    out.par_iter_mut()
        .zip(points.par_iter())
        .for_each(|(value, point)| *value = field.sample_2d(point.x, point.y));
    Ok(())
}

/// Sample `field` at every 3D point, writing into `out[i]` for `points[i]`.
pub fn sample_batch_3d(
    field: &NoiseField,
    points: &[DVec3],
    out: &mut [f64],
) -> Result<(), NoiseError> {
    check_lengths(points.len(), out.len())?;
    tracing::trace!(points = points.len(), "sampling 3D batch");

    out.par_iter_mut()
        .zip(points.par_iter())
        .for_each(|(value, point)| *value = field.sample_3d(point.x, point.y, point.z));
    Ok(())
}

/// Sample `field` at every 2D point into a freshly allocated vector.
#[must_use]
pub fn collect_2d(field: &NoiseField, points: &[DVec2]) -> Vec<f64> {
    points
        .par_iter()
        .map(|point| field.sample_2d(point.x, point.y))
        .collect()
}
