//! Strip layout queries: which slot sits under the indicator, which slots are
//! in view, and the translation a host applies for a given offset.
//!
//! All functions assume the same geometry as [`crate::offset`]: `slot_count`
//! boxes of `item_size` starting at 0, viewed through a container of
//! `container_size` that has been scrolled by `offset`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::item::Orientation;

/// Translation applied to the strip, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

/// Translation that scrolls the strip by `offset` along `orientation`.
#[must_use]
pub fn transform(offset: f64, orientation: Orientation) -> Translation {
    match orientation {
        Orientation::Horizontal => Translation { x: -offset, y: 0.0 },
        Orientation::Vertical => Translation { x: 0.0, y: -offset },
    }
}

/// Index of the slot whose box contains the indicator line.
///
/// The indicator sits at the middle of the container, i.e. at strip position
/// `offset + container_size / 2`. Returns `None` when that position is off
/// either end of the strip or `item_size` is not positive.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn slot_under_indicator(offset: f64, container_size: f64, item_size: f64, slot_count: usize) -> Option<usize> {
    if item_size <= 0.0 {
        return None;
    }
    let position = offset + container_size / 2.0;
    if position < 0.0 || !position.is_finite() {
        return None;
    }
    let index = (position / item_size).floor() as usize;
    (index < slot_count).then_some(index)
}

/// Slots that intersect the viewport at `offset`, clamped to the strip.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn visible_slots(offset: f64, container_size: f64, item_size: f64, slot_count: usize) -> Range<usize> {
    if item_size <= 0.0 || slot_count == 0 {
        return 0..0;
    }
    let start = offset.max(0.0);
    let end = offset + container_size;
    if end <= 0.0 {
        return 0..0;
    }
    let first = ((start / item_size).floor() as usize).min(slot_count);
    let last = ((end / item_size).ceil() as usize).min(slot_count);
    first..last.max(first)
}
