#![cfg(feature = "dev")]
//! Tests for the iterative sorts.
//!
//! These tests verify the narration of the three in-place algorithms:
//! - Bubble sort (adjacent comparisons, shrinking bound)
//! - Insertion sort (hold, shift, drop)
//! - Selection sort (minimum scan, single swap per pass)
//!
//! ## Test Organization
//!
//! 1. **Bubble Sort** - Exact logs, early exit on sorted input
//! 2. **Insertion Sort** - Exact logs, stability
//! 3. **Selection Sort** - Exact logs, no self-swaps
//! 4. **Missing Traits** - Errors abort the sort

use emojisort::internals::algorithms::bubble::bubble_sort;
use emojisort::internals::algorithms::insertion::insertion_sort;
use emojisort::internals::algorithms::selection::selection_sort;
use emojisort::internals::engine::replay::replay;
use emojisort::internals::primitives::errors::SortError;
use emojisort::internals::primitives::log::{StepLog, count_kind};
use emojisort::internals::primitives::step::{HighlightIntensity, Step, StepKind};
use emojisort::internals::primitives::traits::{Emoji, TraitKey};

use HighlightIntensity::{Large, Small};

// ============================================================================
// Helper Functions
// ============================================================================

/// Emoji named `e0`, `e1`, ... with the given happiness scores.
fn emojis(values: &[i32]) -> Vec<Emoji> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Emoji::new("😀", format!("e{i}")).with_trait(TraitKey::Happiness, v))
        .collect()
}

fn names(elements: &[Emoji]) -> Vec<&str> {
    elements.iter().map(|e| e.name.as_str()).collect()
}

fn scores(elements: &[Emoji]) -> Vec<i32> {
    elements
        .iter()
        .map(|e| e.traits[&TraitKey::Happiness])
        .collect()
}

// ============================================================================
// Bubble Sort Tests
// ============================================================================

/// Test bubble sort on [3, 1, 2].
///
/// Verifies two passes: swaps (1,0) then (2,1), then a clean pass.
#[test]
fn test_bubble_three_one_two() {
    let input = emojis(&[3, 1, 2]);
    let mut log = StepLog::new();
    let sorted = bubble_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(scores(&sorted), vec![1, 2, 3]);
    assert_eq!(
        &log[..],
        &[
            Step::highlight_pair(1, 0, Small),
            Step::highlight_pair(1, 0, Large),
            Step::swap(1, 0),
            Step::highlight_pair(2, 1, Small),
            Step::highlight_pair(2, 1, Large),
            Step::swap(2, 1),
            Step::highlight_pair(1, 0, Small),
        ]
    );
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test bubble sort on sorted input.
///
/// Verifies a single comparison pass and no swaps.
#[test]
fn test_bubble_sorted_input_single_pass() {
    let input = emojis(&[1, 2, 3, 4]);
    let mut log = StepLog::new();
    let sorted = bubble_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(sorted, input);
    assert_eq!(log.len(), 3);
    assert_eq!(count_kind(&log, StepKind::Swap), 0);
}

/// Test bubble sort keeps equal elements in input order.
#[test]
fn test_bubble_is_stable() {
    let input = emojis(&[2, 1, 2, 1]);
    let mut log = StepLog::new();
    let sorted = bubble_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(names(&sorted), vec!["e1", "e3", "e0", "e2"]);
}

// ============================================================================
// Insertion Sort Tests
// ============================================================================

/// Test insertion sort on [3, 1, 2].
///
/// Verifies hold, highlight, shifts, drop and release for each element.
#[test]
fn test_insertion_three_one_two() {
    let input = emojis(&[3, 1, 2]);
    let mut log = StepLog::new();
    let sorted = insertion_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(scores(&sorted), vec![1, 2, 3]);
    assert_eq!(
        &log[..],
        &[
            Step::hold(1),
            Step::highlight(1, Small),
            Step::match_with(1, Some(0)),
            Step::match_with(0, None),
            Step::Unhold,
            Step::hold(2),
            Step::highlight(2, Small),
            Step::match_with(2, Some(1)),
            Step::match_with(1, None),
            Step::Unhold,
        ]
    );
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test insertion sort on sorted input.
///
/// Verifies every element is dropped back where it was lifted.
#[test]
fn test_insertion_sorted_input() {
    let input = emojis(&[1, 2, 3]);
    let mut log = StepLog::new();
    let sorted = insertion_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(sorted, input);
    assert_eq!(count_kind(&log, StepKind::Hold), 2);
    assert_eq!(count_kind(&log, StepKind::Match), 2);
    assert!(log.contains(&Step::match_with(2, None)));
}

/// Test insertion sort keeps equal elements in input order.
#[test]
fn test_insertion_is_stable() {
    let input = emojis(&[5, 3, 5, 3]);
    let mut log = StepLog::new();
    let sorted = insertion_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(names(&sorted), vec!["e1", "e3", "e0", "e2"]);
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

// ============================================================================
// Selection Sort Tests
// ============================================================================

/// Test selection sort on [3, 1, 2].
///
/// Verifies each candidate is highlighted and one swap per pass.
#[test]
fn test_selection_three_one_two() {
    let input = emojis(&[3, 1, 2]);
    let mut log = StepLog::new();
    let sorted = selection_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(scores(&sorted), vec![1, 2, 3]);
    assert_eq!(
        &log[..],
        &[
            Step::highlight(1, Small),
            Step::highlight(2, Small),
            Step::highlight_pair(0, 1, Large),
            Step::swap(0, 1),
            Step::highlight(2, Small),
            Step::highlight_pair(1, 2, Large),
            Step::swap(1, 2),
        ]
    );
    assert_eq!(replay(&input, &log).unwrap(), sorted);
}

/// Test selection sort never swaps an element with itself.
#[test]
fn test_selection_sorted_input_no_swaps() {
    let input = emojis(&[1, 2, 3, 4]);
    let mut log = StepLog::new();
    let sorted = selection_sort(&input, TraitKey::Happiness, &mut log).unwrap();

    assert_eq!(sorted, input);
    assert_eq!(count_kind(&log, StepKind::Swap), 0);
    // 3 + 2 + 1 candidate highlights
    assert_eq!(count_kind(&log, StepKind::Highlight), 6);
}

// ============================================================================
// Missing Trait Tests
// ============================================================================

/// Test each iterative sort reports the first element lacking the trait.
#[test]
fn test_iterative_missing_trait() {
    let mut input = emojis(&[3, 1, 2]);
    input[1] = Emoji::new("🫥", "blank");

    let expected = SortError::MissingTrait {
        index: 1,
        trait_key: TraitKey::Happiness,
    };

    let mut log = StepLog::new();
    assert_eq!(
        bubble_sort(&input, TraitKey::Happiness, &mut log),
        Err(expected.clone())
    );
    assert_eq!(
        insertion_sort(&input, TraitKey::Happiness, &mut log),
        Err(expected.clone())
    );
    assert_eq!(
        selection_sort(&input, TraitKey::Happiness, &mut log),
        Err(expected)
    );
}
