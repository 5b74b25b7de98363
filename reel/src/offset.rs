//! Offset arithmetic: where the strip must stop, and how many turns it takes.
//!
//! The strip is a linear run of item-sized boxes starting at 0. Scrolling is a
//! translation of the whole strip by `-offset` along the orientation axis, so
//! the offset that centers slot `i` under the indicator is the left (or top)
//! edge of `i` minus half the slack between the container and one item.

#[cfg(test)]
#[path = "offset_test.rs"]
mod offset_test;

use crate::consts::{DURATION_BASELINE_MS, ITEM_FACTOR_BASE, MAX_ESTIMATED_SPINS, MIN_ESTIMATED_SPINS};
use crate::error::{SpinError, SpinResult};

/// Pixel offset that lands `winning_index` in the middle of the container
/// after `min_spins` full rotations of an `item_count`-long strip.
///
/// `min_spins == 0` yields a purely positional offset; that is what the
/// spinner uses once rotations are already baked into a sample.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_offset(
    item_size: f64,
    winning_index: usize,
    container_size: f64,
    item_count: usize,
    min_spins: u32,
) -> f64 {
    let one_rotation = item_size * item_count as f64;
    let spin_distance = one_rotation * f64::from(min_spins);
    let winner_position = item_size * winning_index as f64;
    let center_correction = (container_size - item_size) / 2.0;
    spin_distance + winner_position - center_correction
}

/// Validate an untyped winning index against a list of `len` items.
///
/// Checks run in order: whole number, non-negative, in bounds. On success the
/// index is returned as a `usize`.
///
/// # Errors
///
/// - [`SpinError::NonIntegerIndex`] for fractional values, NaN and infinities.
/// - [`SpinError::NegativeIndex`] for values below zero.
/// - [`SpinError::IndexOutOfBounds`] for values at or past `len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn validate_winning_index(index: f64, len: usize) -> SpinResult<usize> {
    if !index.is_finite() || index.fract() != 0.0 {
        return Err(SpinError::NonIntegerIndex(index));
    }
    if index < 0.0 {
        return Err(SpinError::NegativeIndex(index));
    }
    if index >= len as f64 {
        // Saturating cast; anything this large is out of bounds regardless.
        return Err(SpinError::IndexOutOfBounds { index: index as usize, len });
    }
    check_winning_index(index as usize, len)
}

/// Bounds check for an already-typed winning index.
///
/// # Errors
///
/// Returns [`SpinError::IndexOutOfBounds`] when `index >= len`.
pub fn check_winning_index(index: usize, len: usize) -> SpinResult<usize> {
    if index >= len {
        return Err(SpinError::IndexOutOfBounds { index, len });
    }
    Ok(index)
}

/// Raw rotation estimate before clamping: `ceil(2 * duration_factor * item_factor)`.
///
/// Longer spins and shorter lists earn more rotations.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn raw_spin_estimate(item_count: usize, duration_ms: u64) -> f64 {
    let duration_factor = duration_ms as f64 / DURATION_BASELINE_MS;
    let item_factor = (ITEM_FACTOR_BASE / item_count.max(1) as f64).max(1.0);
    (2.0 * duration_factor * item_factor).ceil()
}

/// Default rotation count for the spinner when the caller gives none,
/// clamped to `[2, 6]`.
#[must_use]
pub fn estimate_spin_count(item_count: usize, duration_ms: u64) -> u32 {
    clamp_spins(raw_spin_estimate(item_count, duration_ms), MAX_ESTIMATED_SPINS)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_spins(raw: f64, max: u32) -> u32 {
    raw.clamp(f64::from(MIN_ESTIMATED_SPINS), f64::from(max)) as u32
}
