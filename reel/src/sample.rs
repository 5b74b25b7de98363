//! Sampling engine: reduces an item list to a short, renderable strip.
//!
//! Small lists (up to [`SMALL_DATASET_THRESHOLD`] items) are repeated
//! `min_spins + 2` times so the strip has whole rotations before the winner
//! and a full block after it. Large lists are replaced by a fixed pool made
//! of the first [`SAMPLE_POOL_SIZE`] items (plus the winner when it is not
//! among them), cycled `min_spins` times, followed by a final rotation with
//! the winner forced into its middle slot and a short trailing buffer.
//!
//! Either way the rotations are baked into the strip, so the spinner lands
//! on the sampled winning index with `min_spins = 0`.
//!
//! The two regimes place the winner differently: second-to-last block for
//! small lists, middle of the final block for large ones. Tests pin both
//! placements.
//!
//! Slots refer to items by source position, never by identity, so lists
//! with duplicate entries resolve correctly.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use std::collections::HashMap;

use crate::consts::{
    MAX_SAMPLE_SPINS, SAMPLE_POOL_SIZE, SMALL_DATASET_PADDING_BLOCKS, SMALL_DATASET_THRESHOLD, TRAILING_BUFFER,
};
use crate::error::{SpinError, SpinResult};
use crate::offset::{check_winning_index, clamp_spins, raw_spin_estimate};

/// One position on the sampled strip.
///
/// `(source, occurrence)` is unique within a sample and serves as a stable
/// render key even though the same source item appears many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleSlot {
    /// Index of the item in the original list.
    pub source: usize,
    /// How many earlier slots in this sample share the same source.
    pub occurrence: usize,
}

/// Which sampling strategy produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRegime {
    /// The whole list repeated block by block.
    Repeated,
    /// A bounded pool cycled with the winner forced into the final rotation.
    Pooled,
}

/// A reduced strip plus the winning index within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    slots: Vec<SampleSlot>,
    winning_index: usize,
    regime: SampleRegime,
}

impl Sample {
    /// All slots, in strip order.
    #[must_use]
    pub fn slots(&self) -> &[SampleSlot] {
        &self.slots
    }

    /// Number of slots on the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Never true for a sample built by [`sample`]; provided for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the winning slot within the strip.
    #[must_use]
    pub fn winning_index(&self) -> usize {
        self.winning_index
    }

    #[must_use]
    pub fn regime(&self) -> SampleRegime {
        self.regime
    }

    /// The slot the strip must land on.
    #[must_use]
    pub fn winning_slot(&self) -> Option<SampleSlot> {
        self.slots.get(self.winning_index).copied()
    }

    /// Resolve every slot against the original list.
    ///
    /// `items` must be the list the sample was built from; slots pointing
    /// past its end are skipped.
    #[must_use]
    pub fn items<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.slots.iter().filter_map(|slot| items.get(slot.source)).collect()
    }

    /// Resolve slots `range` against the original list, paired with their slot.
    pub fn resolve<'a, 's, T>(
        &'s self,
        items: &'a [T],
        range: std::ops::Range<usize>,
    ) -> impl Iterator<Item = (usize, SampleSlot, &'a T)> {
        let end = range.end.min(self.slots.len());
        let start = range.start.min(end);
        self.slots[start..end]
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| items.get(slot.source).map(|item| (start + i, *slot, item)))
    }

    /// The original item under the winning slot.
    #[must_use]
    pub fn winning_item<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.winning_slot().and_then(|slot| items.get(slot.source))
    }
}

/// Build the strip for `items` with the winner at `winning_index`.
///
/// # Errors
///
/// - [`SpinError::EmptyItemList`] when `items` is empty.
/// - [`SpinError::IndexOutOfBounds`] when `winning_index >= items.len()`.
pub fn sample<T>(items: &[T], winning_index: usize, min_spins: u32) -> SpinResult<Sample> {
    if items.is_empty() {
        return Err(SpinError::EmptyItemList);
    }
    check_winning_index(winning_index, items.len())?;

    let spins = min_spins as usize;
    let out = if items.len() <= SMALL_DATASET_THRESHOLD {
        repeated(items.len(), winning_index, spins)
    } else {
        pooled(items.len(), winning_index, spins)
    };
    tracing::trace!(
        regime = ?out.regime,
        source_len = items.len(),
        sampled_len = out.len(),
        winning_index,
        sampled_winning_index = out.winning_index,
        "sampled strip"
    );
    Ok(out)
}

/// Pre-baked rotation count used when the caller leaves `min_spins` unset,
/// clamped to `[2, 8]`.
///
/// Same shape as [`crate::offset::estimate_spin_count`] but with its own
/// upper bound.
#[must_use]
pub fn estimate_sample_spins(item_count: usize, duration_ms: u64) -> u32 {
    clamp_spins(raw_spin_estimate(item_count, duration_ms), MAX_SAMPLE_SPINS)
}

fn repeated(len: usize, winning_index: usize, spins: usize) -> Sample {
    let blocks = spins + SMALL_DATASET_PADDING_BLOCKS;
    let slots = (0..blocks)
        .flat_map(|block| (0..len).map(move |source| SampleSlot { source, occurrence: block }))
        .collect();
    Sample { slots, winning_index: len * spins + winning_index, regime: SampleRegime::Repeated }
}

fn pooled(len: usize, winning_index: usize, spins: usize) -> Sample {
    let rotation = SAMPLE_POOL_SIZE.min(len);
    let mut pool: Vec<usize> = (0..rotation).collect();
    if winning_index >= rotation {
        pool.push(winning_index);
    }

    let mut strip = StripBuilder::with_capacity(rotation * (spins + 1) + TRAILING_BUFFER);
    for _ in 0..spins {
        for i in 0..rotation {
            strip.push(pool[i % pool.len()]);
        }
    }

    let middle = rotation / 2;
    for i in 0..rotation {
        if i == middle {
            strip.push(winning_index);
        } else {
            strip.push(pool[i % pool.len()]);
        }
    }

    for i in 0..TRAILING_BUFFER {
        strip.push(pool[i % pool.len()]);
    }

    let slots = strip.finish();
    let sampled_winning_index = slots.len() - TRAILING_BUFFER - (rotation - middle);
    Sample { slots, winning_index: sampled_winning_index, regime: SampleRegime::Pooled }
}

/// Appends slots while numbering repeat occurrences per source.
struct StripBuilder {
    slots: Vec<SampleSlot>,
    seen: HashMap<usize, usize>,
}

impl StripBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), seen: HashMap::new() }
    }

    fn push(&mut self, source: usize) {
        let count = self.seen.entry(source).or_insert(0);
        self.slots.push(SampleSlot { source, occurrence: *count });
        *count += 1;
    }

    fn finish(self) -> Vec<SampleSlot> {
        self.slots
    }
}
