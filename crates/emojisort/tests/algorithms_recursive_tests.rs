#![cfg(feature = "dev")]
//! Tests for the recursive sorts.
//!
//! These tests verify the narration of merge sort and quick sort:
//! - Split placement and joining-area moves in merge sort
//! - Pivot selection, staging moves and sub-region offsets in quick sort
//! - Error propagation out of nested calls
//!
//! ## Test Organization
//!
//! 1. **Merge Sort** - Exact logs, ties, offsets
//! 2. **Quick Sort** - Emission order, equal groups, offsets
//! 3. **Staging Order** - Why less, greater, equal must be emitted in that order
//! 4. **Missing Traits** - Errors from inside recursion

use emojisort::internals::algorithms::merge::{merge, merge_sort, merge_sort_at};
use emojisort::internals::algorithms::quick::{partition, quick_sort, quick_sort_at};
use emojisort::internals::engine::replay::{Replayer, replay};
use emojisort::internals::primitives::errors::SortError;
use emojisort::internals::primitives::log::{StepLog, count_kind};
use emojisort::internals::primitives::step::{Step, StepKind};
use emojisort::internals::primitives::traits::{Emoji, TraitKey};

// ============================================================================
// Helper Functions
// ============================================================================

/// Emoji tagged `a`, `b`, `c`, ... with the given emotion scores.
fn emojis(values: &[i32]) -> Vec<Emoji> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let tag = char::from(b'a' + i as u8).to_string();
            Emoji::new(tag, "test").with_trait(TraitKey::Emotion, v)
        })
        .collect()
}

fn tags(elements: &[Emoji]) -> String {
    elements.iter().map(|e| e.character.as_str()).collect()
}

fn scores(elements: &[Emoji]) -> Vec<i32> {
    elements.iter().map(|e| e.traits[&TraitKey::Emotion]).collect()
}

// ============================================================================
// Merge Sort Tests
// ============================================================================

/// Test merge sort on [4, 2, 1, 3].
///
/// Verifies the top-level split comes first and three merges complete.
#[test]
fn test_merge_four_two_one_three() {
    let input = emojis(&[4, 2, 1, 3]);
    let mut log = StepLog::new();
    let sorted = merge_sort(&input, TraitKey::Emotion, &mut log).unwrap();

    assert_eq!(scores(&sorted), vec![1, 2, 3, 4]);
    assert_eq!(log[0], Step::split(1, 2));
    assert_eq!(count_kind(&log, StepKind::MergeComplete), 3);
    assert_eq!(
        &log[..],
        &[
            Step::split(1, 2),
            Step::split(0, 1),
            Step::move_to_joining_area(1, 0),
            Step::move_to_joining_area(0, 1),
            Step::MergeComplete,
            Step::split(2, 3),
            Step::move_to_joining_area(2, 2),
            Step::move_to_joining_area(3, 3),
            Step::MergeComplete,
            Step::move_to_joining_area(2, 0),
            Step::move_to_joining_area(0, 1),
            Step::move_to_joining_area(3, 2),
            Step::move_to_joining_area(1, 3),
            Step::MergeComplete,
        ]
    );
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test merge emits left-then-right on ties.
///
/// Verifies both tied elements are moved in one iteration.
#[test]
fn test_merge_tie_takes_left_then_right() {
    let left = emojis(&[2]);
    let right = emojis(&[2]);
    let mut log = StepLog::new();
    merge(&left, &right, 0, 1, TraitKey::Emotion, &mut log).unwrap();

    assert_eq!(
        &log[..],
        &[
            Step::move_to_joining_area(0, 0),
            Step::move_to_joining_area(1, 1),
            Step::MergeComplete,
        ]
    );
}

/// Test merge steps use global indices for nested runs.
#[test]
fn test_merge_offsets_are_global() {
    let mut log = StepLog::new();
    merge_sort_at(&emojis(&[9, 8]), TraitKey::Emotion, 6, &mut log).unwrap();

    assert_eq!(
        &log[..],
        &[
            Step::split(6, 7),
            Step::move_to_joining_area(7, 6),
            Step::move_to_joining_area(6, 7),
            Step::MergeComplete,
        ]
    );
}

/// Test merge sort is stable.
#[test]
fn test_merge_is_stable() {
    let input = emojis(&[3, 1, 3, 1, 2]);
    let mut log = StepLog::new();
    let sorted = merge_sort(&input, TraitKey::Emotion, &mut log).unwrap();

    assert_eq!(tags(&sorted), "bdeac");
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test merge sort produces n - 1 merges and splits.
#[test]
fn test_merge_counts() {
    let input = emojis(&[9, 8, 7, 6, 5, 4, 3]);
    let mut log = StepLog::new();
    merge_sort(&input, TraitKey::Emotion, &mut log).unwrap();

    assert_eq!(count_kind(&log, StepKind::Split), 6);
    assert_eq!(count_kind(&log, StepKind::MergeComplete), 6);
}

// ============================================================================
// Quick Sort Tests
// ============================================================================

/// Test quick sort emission order on [5, 3, 5, 1, 5].
///
/// Verifies less moves precede the equal moves and no greater moves exist.
#[test]
fn test_quick_emission_order_with_duplicates() {
    let input = emojis(&[5, 3, 5, 1, 5]);
    let mut log = StepLog::new();
    let sorted = quick_sort(&input, TraitKey::Emotion, &mut log).unwrap();

    assert_eq!(scores(&sorted), vec![1, 3, 5, 5, 5]);
    assert_eq!(
        &log[..],
        &[
            Step::select_pivot(2),
            Step::move_before(1, 2),
            Step::move_before(3, 2),
            Step::move_after(0, 2),
            Step::move_after(4, 2),
            Step::DropPivot,
            Step::select_pivot(1),
            Step::move_after(0, 1),
            Step::DropPivot,
        ]
    );
    // pivot first, then equals in reverse scan order
    assert_eq!(tags(&sorted), "dbcea");
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test greater moves target the end of the greater run.
#[test]
fn test_quick_greater_targets_advance() {
    let input = emojis(&[5, 9, 5, 1, 7]);
    let mut log = StepLog::new();
    let p = partition(&input, TraitKey::Emotion, 0, &mut log).unwrap();

    assert_eq!(
        &log[..],
        &[
            Step::select_pivot(2),
            Step::move_before(3, 2),
            Step::move_after(1, 2),
            Step::move_after(4, 3),
            Step::move_after(0, 2),
            Step::DropPivot,
        ]
    );
    assert_eq!(p.pivot, 2);
    assert_eq!(tags(&p.less), "d");
    assert_eq!(tags(&p.equal), "ca");
    assert_eq!(tags(&p.greater), "be");
}

/// Test sub-region offsets in nested rounds.
///
/// Verifies the greater partition starts after less and equal.
#[test]
fn test_quick_nested_offsets() {
    let input = emojis(&[1, 0, 2, 5, 6, 4, 7]);
    let mut log = StepLog::new();
    let sorted = quick_sort_at(&input, TraitKey::Emotion, 0, &mut log).unwrap();

    let pivots: Vec<usize> = log
        .iter()
        .filter_map(|s| match *s {
            Step::SelectPivot { main } => Some(main),
            _ => None,
        })
        .collect();
    assert_eq!(pivots, vec![3, 2, 1, 6]);
    assert_eq!(scores(&sorted), vec![0, 1, 2, 4, 5, 6, 7]);
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test pivot addresses at a non-zero starting offset.
#[test]
fn test_quick_offsets_from_nonzero_start() {
    let mut log = StepLog::new();
    quick_sort_at(&emojis(&[1, 0, 2, 5, 6, 4, 7]), TraitKey::Emotion, 10, &mut log).unwrap();

    let pivots: Vec<usize> = log
        .iter()
        .filter_map(|s| match *s {
            Step::SelectPivot { main } => Some(main),
            _ => None,
        })
        .collect();
    // greater run [6, 7] starts at 10 + 4 + 1
    assert_eq!(pivots, vec![13, 12, 11, 16]);
}

/// Test quick sort on sorted input still narrates each round.
#[test]
fn test_quick_sorted_input() {
    let input = emojis(&[1, 2, 3]);
    let mut log = StepLog::new();
    let sorted = quick_sort(&input, TraitKey::Emotion, &mut log).unwrap();

    assert_eq!(sorted, input);
    assert_eq!(count_kind(&log, StepKind::SelectPivot), 1);
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

// ============================================================================
// Staging Order Tests
// ============================================================================

/// Test staging equals before greaters breaks the round.
///
/// Verifies the replayed row interleaves greater and equal elements when
/// the fixed less, greater, equal order is not respected.
#[test]
fn test_reordered_round_interleaves() {
    let input = emojis(&[5, 9, 5, 1, 7]);
    let mut log = StepLog::new();
    partition(&input, TraitKey::Emotion, 0, &mut log).unwrap();

    let in_order = replay(&input, &log).unwrap();
    assert_eq!(tags(&in_order), "dcabe");

    // equal move hoisted above the greater moves
    let mut reordered = log.into_steps();
    let equal_move = reordered.remove(4);
    reordered.insert(2, equal_move);

    let broken = replay(&input, &reordered).unwrap();
    assert_eq!(tags(&broken), "dcbea");
    assert_ne!(broken, in_order);
}

/// Test a round is visible in the staging row before the drop.
#[test]
fn test_round_staging_row() {
    let input = emojis(&[5, 9, 5, 1, 7]);
    let mut log = StepLog::new();
    partition(&input, TraitKey::Emotion, 0, &mut log).unwrap();

    let steps = log.into_steps();
    let mut replayer = Replayer::new(&input);
    replayer.apply_all(&steps[..steps.len() - 1]).unwrap();

    assert_eq!(tags(replayer.staged()), "dcabe");
    assert!(replayer.main_row().is_empty());
    assert!(!replayer.is_settled());

    replayer.apply(&Step::DropPivot).unwrap();
    assert!(replayer.is_settled());
}

// ============================================================================
// Missing Trait Tests
// ============================================================================

/// Test a missing trait deep in merge recursion aborts the sort.
#[test]
fn test_merge_missing_trait_in_recursion() {
    let mut input = emojis(&[1, 4, 3, 2]);
    input[1] = Emoji::new("🫥", "blank");
    let mut log = StepLog::new();

    assert_eq!(
        merge_sort(&input, TraitKey::Emotion, &mut log),
        Err(SortError::MissingTrait {
            index: 1,
            trait_key: TraitKey::Emotion
        })
    );
}

/// Test a missing trait in quick sort reports its global index.
#[test]
fn test_quick_missing_trait_global_index() {
    let mut input = emojis(&[4, 1, 3, 2]);
    input[3] = Emoji::new("🫥", "blank");
    let mut log = StepLog::new();

    assert_eq!(
        quick_sort(&input, TraitKey::Emotion, &mut log),
        Err(SortError::MissingTrait {
            index: 3,
            trait_key: TraitKey::Emotion
        })
    );
}
