//! Stupid sort: shuffle and hope.
//!
//! ## Purpose
//!
//! Runs a single Fisher-Yates pass a fixed number of times, narrating every
//! non-trivial transposition as a `swap`. It exists to show how bad an
//! algorithm can be and makes no attempt to converge. A single pass doubles
//! as the "randomise positions" operation.
//!
//! ## Design notes
//!
//! * **Injected randomness**: The caller owns the RNG, so seeded runs replay
//!   identically.
//! * **Trait-agnostic**: No comparisons are made, so elements need no traits.
//!
//! ## Invariants
//!
//! * Fewer than two elements produce no steps.
//! * Each pass emits at most `n - 1` swaps.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::Rng;

// Internal dependencies
use crate::primitives::log::StepLog;
use crate::primitives::step::Step;

/// Shuffle passes used when stupid sort is asked to "sort".
pub const DEFAULT_SHUFFLE_PASSES: usize = 5;

/// Run `passes` Fisher-Yates passes over a copy of `elements`.
pub fn stupid_sort<E: Clone, R: Rng>(
    elements: &[E],
    passes: usize,
    rng: &mut R,
    log: &mut StepLog,
) -> Vec<E> {
    let mut shuffled = elements.to_vec();
    for _ in 0..passes {
        shuffle_pass(&mut shuffled, rng, log);
    }
    shuffled
}

/// One Fisher-Yates pass over `list`, recording a swap per transposition.
pub fn shuffle_pass<E, R: Rng>(list: &mut [E], rng: &mut R, log: &mut StepLog) {
    let n = list.len();
    if n < 2 {
        return;
    }

    for first_unshuffled in 0..n - 1 {
        let unshuffled = n - first_unshuffled;
        let d = rng.gen_range(0..unshuffled);
        if d == 0 {
            continue;
        }
        let other = first_unshuffled + d;
        list.swap(first_unshuffled, other);
        log.push(Step::swap(first_unshuffled, other));
    }
}
