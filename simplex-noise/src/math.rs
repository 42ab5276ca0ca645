//! Small numeric helpers shared by the noise samplers.

/// Floors `value` to the containing lattice coordinate.
///
/// The float-to-int cast saturates and the decrement is saturating too, so
/// values beyond the `i32` range and infinities clamp to `i32::MIN`/`i32::MAX`
/// and NaN maps to `0` instead of panicking.
#[inline]
#[must_use]
pub const fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < truncated as f64 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
