//! Bubble sort narration.
//!
//! ## Purpose
//!
//! Compares adjacent pairs left to right, swapping out-of-order pairs. After
//! each pass the bound shrinks to the position of the last swap, since
//! everything above it is already in place.
//!
//! ## Steps emitted
//!
//! * `highlight(i, i-1, small)` for every compared pair.
//! * `highlight(i, i-1, large)` followed by `swap(i, i-1)` when the pair swaps.
//!
//! ## Invariants
//!
//! * A pass without swaps sets the bound to 0 and ends the sort.
//! * Already-sorted input produces exactly one pass and no swaps.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::log::StepLog;
use crate::primitives::step::{HighlightIntensity, Step};
use crate::primitives::traits::{TraitKey, TraitSortable, require_trait};

/// Bubble sort `elements` by `key`, recording steps into `log`.
pub fn bubble_sort<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    let mut sorted = elements.to_vec();
    let mut bound = sorted.len();

    while bound != 0 {
        let mut last_swap = 0;
        for i in 1..bound {
            let first = require_trait(&sorted[i - 1], key, i - 1)?;
            let second = require_trait(&sorted[i], key, i)?;
            log.push(Step::highlight_pair(i, i - 1, HighlightIntensity::Small));

            if first > second {
                sorted.swap(i, i - 1);
                last_swap = i;
                log.push(Step::highlight_pair(i, i - 1, HighlightIntensity::Large));
                log.push(Step::swap(i, i - 1));
            }
        }
        bound = last_swap;
    }

    Ok(sorted)
}
