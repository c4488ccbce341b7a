#![forbid(unsafe_code)]

//! Pure numeric helpers shared by the constraint engine and the knobs.
//!
//! Values live on a closed range `[min, max]`. A *ratio* is the same value
//! expressed as a percentage of that range (`0.0..=100.0`). Stepped values
//! sit on the grid `min + k * step`.
//!
//! # Invariants
//!
//! - [`quantize`] always returns a grid value inside `[min, max]`; when
//!   `max` is not itself on the grid the top of the grid is
//!   [`stepped_max`].
//! - [`ratio_of`] never divides by zero: a degenerate range maps to `0.0`.
//!   Configuration rejects `max <= min`, so this path is unreachable for a
//!   validated slider.

/// Relative tolerance used when comparing values against the step grid.
pub const STEP_EPSILON: f64 = 1e-9;

/// Clamp `value` into `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this does not panic when `lo > hi`; the upper bound
/// wins, matching how spacing constraints are applied in order.
#[inline]
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Position of `value` inside `[min, max]` as a percentage.
#[inline]
#[must_use]
pub fn ratio_of(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    (value - min) / span * 100.0
}

/// Inverse of [`ratio_of`].
#[inline]
#[must_use]
pub fn value_at_ratio(ratio: f64, min: f64, max: f64) -> f64 {
    (max - min) * ratio / 100.0 + min
}

/// Number of whole steps that fit between `min` and `max`.
#[inline]
fn step_count(min: f64, max: f64, step: f64) -> f64 {
    ((max - min) / step + STEP_EPSILON).floor().max(0.0)
}

/// Largest grid value that does not exceed `max`.
#[inline]
#[must_use]
pub fn stepped_max(min: f64, max: f64, step: f64) -> f64 {
    min + step_count(min, max, step) * step
}

/// Smallest multiple of `step` that is at least `diff`.
#[inline]
#[must_use]
pub fn step_ceil(diff: f64, step: f64) -> f64 {
    if diff <= 0.0 {
        return 0.0;
    }
    (diff / step - STEP_EPSILON).ceil() * step
}

/// Snap `value` to the nearest grid point `min + k * step`, clamped into
/// `[min, max]`.
#[must_use]
pub fn quantize(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let k = ((value - min) / step).round();
    let k = clamp(k, 0.0, step_count(min, max, step));
    min + k * step
}

/// Whether `value` sits on the grid `min + k * step`.
#[must_use]
pub fn is_step_aligned(value: f64, min: f64, step: f64) -> bool {
    let k = (value - min) / step;
    (k - k.round()).abs() <= STEP_EPSILON * k.abs().max(1.0)
}

/// Map a visual horizontal delta onto the value axis.
///
/// Under right-to-left layout a rightward drag decreases the value.
#[inline]
#[must_use]
pub fn apply_direction(dx: f64, is_rtl: bool) -> f64 {
    if is_rtl { -dx } else { dx }
}
