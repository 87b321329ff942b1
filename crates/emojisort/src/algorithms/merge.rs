//! Merge sort narration.
//!
//! ## Purpose
//!
//! Classic top-down merge sort. Every division is narrated with a `split`,
//! and every merge moves each element, in merged order, from the main row
//! into the joining area before a single `mergeComplete` writes the joining
//! area back into the freed slots.
//!
//! ## Design notes
//!
//! * **Explicit accumulator**: Recursion appends to the caller's [`StepLog`],
//!   so a parent's `split` precedes its children's narration and its own
//!   merge follows them.
//! * **Offsets**: Each call carries the global index of its first element.
//!
//! ## Key concepts
//!
//! * **Joining slot**: The `k`-th element taken by a merge starting at offset
//!   `o` lands in joining slot `o + k`.
//! * **Ties**: Equal heads take the left element first, then the right one,
//!   and the destination cursor advances twice.
//!
//! ## Invariants
//!
//! * One `mergeComplete` per merge, i.e. `n - 1` for `n` elements.
//! * After a merge completes, the merged run occupies `[o, o + len)` in order,
//!   so the parent's source indices stay valid.
//!
//! ## Non-goals
//!
//! * This module does not validate the whole input up front; a missing trait
//!   surfaces from the first comparison that needs it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::log::StepLog;
use crate::primitives::step::Step;
use crate::primitives::traits::{TraitKey, TraitSortable, require_trait};

// ============================================================================
// Merge Sort
// ============================================================================

/// Merge sort `elements` by `key` from a top-level call.
pub fn merge_sort<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    merge_sort_at(elements, key, 0, log)
}

/// Merge sort a sub-array whose first element sits at global index `offset`.
pub fn merge_sort_at<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    offset: usize,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    if elements.len() <= 1 {
        return Ok(elements.to_vec());
    }

    let middle = elements.len() / 2;
    log.push(Step::split(middle - 1 + offset, middle + offset));

    let left = merge_sort_at(&elements[..middle], key, offset, log)?;
    let right = merge_sort_at(&elements[middle..], key, offset + middle, log)?;

    merge(&left, &right, offset, offset + middle, key, log)
}

// ============================================================================
// Merge Helper
// ============================================================================

/// Merge two sorted runs living at `left_offset` and `right_offset`.
pub fn merge<E: TraitSortable + Clone>(
    left: &[E],
    right: &[E],
    left_offset: usize,
    right_offset: usize,
    key: TraitKey,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut l = 0;
    let mut r = 0;
    let mut slot = left_offset;

    while l < left.len() && r < right.len() {
        let left_value = require_trait(&left[l], key, l + left_offset)?;
        let right_value = require_trait(&right[r], key, r + right_offset)?;

        if left_value < right_value {
            log.push(Step::move_to_joining_area(l + left_offset, slot));
            merged.push(left[l].clone());
            l += 1;
        } else if left_value > right_value {
            log.push(Step::move_to_joining_area(r + right_offset, slot));
            merged.push(right[r].clone());
            r += 1;
        } else {
            log.push(Step::move_to_joining_area(l + left_offset, slot));
            merged.push(left[l].clone());
            l += 1;
            slot += 1;
            log.push(Step::move_to_joining_area(r + right_offset, slot));
            merged.push(right[r].clone());
            r += 1;
        }
        slot += 1;
    }

    for (i, element) in left.iter().enumerate().skip(l) {
        log.push(Step::move_to_joining_area(i + left_offset, slot));
        merged.push(element.clone());
        slot += 1;
    }
    for (i, element) in right.iter().enumerate().skip(r) {
        log.push(Step::move_to_joining_area(i + right_offset, slot));
        merged.push(element.clone());
        slot += 1;
    }

    log.push(Step::MergeComplete);
    Ok(merged)
}
