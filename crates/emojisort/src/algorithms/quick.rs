//! Quick sort narration.
//!
//! ## Purpose
//!
//! Three-way quick sort with the middle element as pivot. Each partition
//! round is narrated as: select the pivot, stage every other element around
//! it, then drop the pivot, which writes the staged row back into the round's
//! slots.
//!
//! ## Design notes
//!
//! * **Explicit accumulator**: Recursion appends to the caller's [`StepLog`].
//! * **Three scans**: Partitioning scans the round's original order three
//!   times: less-than, then greater-than, then equal-to (pivot excluded).
//! * **Emission order is load-bearing**: Move targets are addresses relative
//!   to the pivot in the staged row. Greater elements target
//!   `pivot + greater_moved_so_far`, which only names the end of the greater
//!   run while no equal element has been staged after the pivot yet. Emitting
//!   equals before greaters would interleave them.
//!
//! ## Key concepts
//!
//! * **Staged row**: After a round, the row reads
//!   `less (scan order), pivot, equal (reverse scan order), greater (scan order)`,
//!   because each equal element is placed immediately after the pivot.
//! * **Sources**: Move sources are main-row slots from before the round.
//!   Slots are only vacated during a round, never shifted, so they stay valid
//!   until `dropPivot`.
//!
//! ## Invariants
//!
//! * After `dropPivot` the round's slots `[o, o + len)` hold the staged row.
//! * The less partition recurses at offset `o`; the greater partition at
//!   `o + less + equal`.
//!
//! ## Non-goals
//!
//! * This module does not choose pivots adaptively; the middle is fixed.

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
// Quick Sort
// ============================================================================

/// Quick sort `elements` by `key` from a top-level call.
pub fn quick_sort<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    quick_sort_at(elements, key, 0, log)
}

/// Quick sort a sub-array whose first element sits at global index `offset`.
pub fn quick_sort_at<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    offset: usize,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    if elements.len() <= 1 {
        return Ok(elements.to_vec());
    }

    let partition = partition(elements, key, offset, log)?;

    let mut sorted = quick_sort_at(&partition.less, key, offset, log)?;
    let greater_offset = offset + partition.less.len() + partition.equal.len();
    let greater = quick_sort_at(&partition.greater, key, greater_offset, log)?;

    sorted.extend(partition.equal);
    sorted.extend(greater);
    Ok(sorted)
}

// ============================================================================
// Partition Helper
// ============================================================================

/// The three groups produced by one partition round.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<E> {
    /// Elements below the pivot, in scan order.
    pub less: Vec<E>,

    /// The pivot followed by its equals in reverse scan order.
    pub equal: Vec<E>,

    /// Elements above the pivot, in scan order.
    pub greater: Vec<E>,

    /// Global index of the pivot before the round.
    pub pivot: usize,
}

/// Run one narrated partition round over `elements` at `offset`.
///
/// Emits `selectPivot`, the staging moves and `dropPivot`.
pub fn partition<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    offset: usize,
    log: &mut StepLog,
) -> Result<Partition<E>, SortError> {
    let values = elements
        .iter()
        .enumerate()
        .map(|(i, e)| require_trait(e, key, i + offset))
        .collect::<Result<Vec<_>, _>>()?;

    let pivot_index = elements.len() / 2;
    let pivot_value = values[pivot_index];
    let pivot = pivot_index + offset;
    log.push(Step::select_pivot(pivot));

    // Scan order is fixed: less, greater, equal.

    let mut less = Vec::new();
    for (i, element) in elements.iter().enumerate() {
        if values[i] < pivot_value {
            log.push(Step::move_before(i + offset, pivot));
            less.push(element.clone());
        }
    }

    let mut greater = Vec::new();
    for (i, element) in elements.iter().enumerate() {
        if values[i] > pivot_value {
            log.push(Step::move_after(i + offset, pivot + greater.len()));
            greater.push(element.clone());
        }
    }

    let mut equal = Vec::new();
    for (i, element) in elements.iter().enumerate() {
        if values[i] == pivot_value && i != pivot_index {
            log.push(Step::move_after(i + offset, pivot));
            equal.push(element.clone());
        }
    }
    equal.push(elements[pivot_index].clone());
    equal.reverse();

    log.push(Step::DropPivot);

    Ok(Partition {
        less,
        equal,
        greater,
        pivot,
    })
}
