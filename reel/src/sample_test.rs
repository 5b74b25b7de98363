use std::collections::HashSet;

use super::*;
use crate::item::Prize;

// =============================================================
// Helpers
// =============================================================

fn prizes(n: usize) -> Vec<Prize> {
    (0..n).map(|i| Prize::new(format!("{i}"), format!("Prize {}", i + 1))).collect()
}

fn assert_slots_unique(s: &Sample) {
    let keys: HashSet<_> = s.slots().iter().map(|slot| (slot.source, slot.occurrence)).collect();
    assert_eq!(keys.len(), s.len(), "duplicate (source, occurrence) pair in sample");
}

// =============================================================
// Small-dataset regime
// =============================================================

#[test]
fn small_list_is_repeated_min_spins_plus_two_times() {
    let items = prizes(4);
    let s = sample(&items, 2, 5).unwrap();
    assert_eq!(s.regime(), SampleRegime::Repeated);
    assert_eq!(s.len(), 28);
    assert_eq!(s.winning_index(), 22);
}

#[test]
fn small_list_winning_slot_refers_to_original_item() {
    let items = prizes(4);
    let s = sample(&items, 2, 5).unwrap();
    let resolved = s.items(&items);
    assert_eq!(resolved.len(), 28);
    assert!(std::ptr::eq(resolved[22], &items[2]));
    assert!(std::ptr::eq(s.winning_item(&items).unwrap(), &items[2]));
}

#[test]
fn small_list_preserves_order_within_each_block() {
    let items = prizes(3);
    let s = sample(&items, 0, 1).unwrap();
    let sources: Vec<usize> = s.slots().iter().map(|slot| slot.source).collect();
    assert_eq!(sources, vec![0, 1, 2, 0, 1, 2, 0, 1, 2]);
}

#[test]
fn small_list_occurrence_is_block_number() {
    let items = prizes(3);
    let s = sample(&items, 1, 2).unwrap();
    assert_eq!(s.slots()[0], SampleSlot { source: 0, occurrence: 0 });
    assert_eq!(s.slots()[4], SampleSlot { source: 1, occurrence: 1 });
    assert_eq!(s.slots()[11], SampleSlot { source: 2, occurrence: 3 });
    assert_slots_unique(&s);
}

#[test]
fn small_list_zero_spins_still_has_trailing_block() {
    let items = prizes(4);
    let s = sample(&items, 3, 0).unwrap();
    assert_eq!(s.len(), 8);
    assert_eq!(s.winning_index(), 3);
    assert!(s.len() - s.winning_index() > items.len());
}

#[test]
fn single_item_list() {
    let items = prizes(1);
    let s = sample(&items, 0, 3).unwrap();
    assert_eq!(s.len(), 5);
    assert_eq!(s.winning_index(), 3);
}

#[test]
fn threshold_boundary_selects_regime() {
    let at = prizes(SMALL_DATASET_THRESHOLD);
    let over = prizes(SMALL_DATASET_THRESHOLD + 1);
    assert_eq!(sample(&at, 0, 1).unwrap().regime(), SampleRegime::Repeated);
    assert_eq!(sample(&over, 0, 1).unwrap().regime(), SampleRegime::Pooled);
}

// =============================================================
// Large-dataset regime
// =============================================================

#[test]
fn large_list_length_is_bounded() {
    let items = prizes(30_000);
    let s = sample(&items, 29_999, 3).unwrap();
    assert_eq!(s.regime(), SampleRegime::Pooled);
    assert_eq!(s.len(), 3 * 50 + 50 + 10);
}

#[test]
fn large_list_winner_outside_pool_is_forced_into_final_rotation() {
    let items = prizes(30_000);
    let s = sample(&items, 29_999, 3).unwrap();
    assert_eq!(s.winning_index(), 3 * 50 + 25);
    assert_eq!(s.winning_slot().unwrap().source, 29_999);
    assert!(std::ptr::eq(s.winning_item(&items).unwrap(), &items[29_999]));
}

#[test]
fn large_list_winner_appears_exactly_once_when_outside_pool() {
    let items = prizes(5000);
    let s = sample(&items, 4321, 4).unwrap();
    let hits = s.slots().iter().filter(|slot| slot.source == 4321).count();
    assert_eq!(hits, 1);
}

#[test]
fn large_list_winner_inside_pool() {
    let items = prizes(1000);
    let s = sample(&items, 7, 2).unwrap();
    assert_eq!(s.len(), 2 * 50 + 50 + 10);
    assert_eq!(s.winning_index(), 2 * 50 + 25);
    assert_eq!(s.winning_slot().unwrap().source, 7);
}

#[test]
fn large_list_rotation_cycles_pool_in_order() {
    let items = prizes(500);
    let s = sample(&items, 499, 1).unwrap();
    let first_rotation: Vec<usize> = s.slots()[..50].iter().map(|slot| slot.source).collect();
    assert_eq!(first_rotation, (0..50).collect::<Vec<_>>());
}

#[test]
fn large_list_trailing_buffer_follows_final_rotation() {
    let items = prizes(500);
    let s = sample(&items, 499, 1).unwrap();
    let tail: Vec<usize> = s.slots()[s.len() - 10..].iter().map(|slot| slot.source).collect();
    assert_eq!(tail, (0..10).collect::<Vec<_>>());
}

#[test]
fn large_list_zero_spins() {
    let items = prizes(200);
    let s = sample(&items, 150, 0).unwrap();
    assert_eq!(s.len(), 60);
    assert_eq!(s.winning_index(), 25);
    assert_eq!(s.winning_slot().unwrap().source, 150);
}

#[test]
fn large_list_slots_are_unique() {
    let items = prizes(30_000);
    assert_slots_unique(&sample(&items, 29_999, 6).unwrap());
    assert_slots_unique(&sample(&items, 10, 6).unwrap());
}

#[test]
fn large_list_size_independent_of_source_len() {
    let a = sample(&prizes(101), 100, 4).unwrap();
    let b = sample(&prizes(50_000), 49_999, 4).unwrap();
    assert_eq!(a.len(), b.len());
}

#[test]
fn duplicate_content_resolves_by_position() {
    let items = vec![Prize::new("same", "Same"); 300];
    let s = sample(&items, 123, 2).unwrap();
    assert!(std::ptr::eq(s.winning_item(&items).unwrap(), &items[123]));
}

// =============================================================
// Regime asymmetry
// =============================================================

#[test]
fn winner_placement_differs_between_regimes_as_documented() {
    // Small lists land in the second-to-last block; large lists land in the
    // middle of the final rotation, with only the trailing buffer after it.
    let small = prizes(10);
    let s = sample(&small, 4, 3).unwrap();
    let blocks_after = (s.len() - s.winning_index() - 1) / small.len();
    assert_eq!(blocks_after, 1);

    let large = prizes(1000);
    let l = sample(&large, 999, 3).unwrap();
    let after = l.len() - l.winning_index() - 1;
    assert_eq!(after, 25 - 1 + 10);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_range_pairs_slots_with_items() {
    let items = prizes(4);
    let s = sample(&items, 0, 0).unwrap();
    let got: Vec<(usize, usize)> = s.resolve(&items, 2..5).map(|(i, slot, _)| (i, slot.source)).collect();
    assert_eq!(got, vec![(2, 2), (3, 3), (4, 0)]);
}

#[test]
fn resolve_range_clamped_to_strip() {
    let items = prizes(2);
    let s = sample(&items, 0, 0).unwrap();
    assert_eq!(s.resolve(&items, 3..100).count(), 1);
    assert_eq!(s.resolve(&items, 50..100).count(), 0);
}

// =============================================================
// Preconditions
// =============================================================

#[test]
fn empty_list_is_rejected() {
    let items: Vec<Prize> = Vec::new();
    assert_eq!(sample(&items, 0, 5), Err(SpinError::EmptyItemList));
}

#[test]
fn out_of_bounds_winner_is_rejected() {
    let items = prizes(4);
    assert_eq!(sample(&items, 4, 5), Err(SpinError::IndexOutOfBounds { index: 4, len: 4 }));
}

// =============================================================
// estimate_sample_spins
// =============================================================

#[test]
fn sample_estimate_clamps_to_eight() {
    assert_eq!(estimate_sample_spins(1, 5000), 8);
    assert_eq!(estimate_sample_spins(4, 10_000), 8);
}

#[test]
fn sample_estimate_clamps_to_two() {
    assert_eq!(estimate_sample_spins(500, 1000), 2);
}

#[test]
fn sample_estimate_differs_from_spinner_estimate_above_six() {
    assert_eq!(estimate_sample_spins(4, 10_000), 8);
    assert_eq!(crate::offset::estimate_spin_count(4, 10_000), 6);
    assert_eq!(estimate_sample_spins(4, 5000), crate::offset::estimate_spin_count(4, 5000));
}
