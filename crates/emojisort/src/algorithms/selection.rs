//! Selection sort narration.

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

/// Selection sort `elements` by `key`, recording steps into `log`.
///
/// Every candidate scanned for the minimum gets a small highlight; when the
/// minimum is not already in place it is highlighted together with its
/// destination and swapped in.
pub fn selection_sort<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    let mut sorted = elements.to_vec();
    let n = sorted.len();

    for x in 0..n.saturating_sub(1) {
        let mut lowest = x;
        for y in (x + 1)..n {
            log.push(Step::highlight(y, HighlightIntensity::Small));
            let candidate = require_trait(&sorted[y], key, y)?;
            let current = require_trait(&sorted[lowest], key, lowest)?;
            if candidate < current {
                lowest = y;
            }
        }

        if x != lowest {
            sorted.swap(x, lowest);
            log.push(Step::highlight_pair(x, lowest, HighlightIntensity::Large));
            log.push(Step::swap(x, lowest));
        }
    }

    Ok(sorted)
}
