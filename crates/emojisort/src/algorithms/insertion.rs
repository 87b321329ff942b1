//! Insertion sort narration.
//!
//! Each element from index 1 onwards is lifted into the holding area, larger
//! left neighbours shift one slot right (`match(a, a-1)`), and the held
//! element lands in the gap (`match(a, none)`, `unhold`).

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

/// Insertion sort `elements` by `key`, recording steps into `log`.
pub fn insertion_sort<E: TraitSortable + Clone>(
    elements: &[E],
    key: TraitKey,
    log: &mut StepLog,
) -> Result<Vec<E>, SortError> {
    let mut sorted = elements.to_vec();

    for i in 1..sorted.len() {
        let held = sorted[i].clone();
        let held_value = require_trait(&held, key, i)?;
        log.push(Step::hold(i));
        log.push(Step::highlight(i, HighlightIntensity::Small));

        let mut a = i;
        while a > 0 {
            // stop at the first neighbour not exceeding the held value
            let neighbour = require_trait(&sorted[a - 1], key, a - 1)?;
            if held_value >= neighbour {
                break;
            }
            log.push(Step::match_with(a, Some(a - 1)));
            sorted[a] = sorted[a - 1].clone();
            a -= 1;
        }

        log.push(Step::match_with(a, None));
        log.push(Step::Unhold);
        sorted[a] = held;
    }

    Ok(sorted)
}
