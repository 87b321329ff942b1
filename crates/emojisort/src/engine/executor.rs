//! Execution engine for narrated sorts.
//!
//! ## Purpose
//!
//! This module is the single entry point that turns a configuration and an
//! element slice into a [`SortOutput`]. It validates the input, owns the
//! call-scoped step accumulator, dispatches to the selected algorithm, and
//! assembles the result.
//!
//! ## Design notes
//!
//! * A fresh [`StepLog`] is created per call and passed down explicitly, so
//!   no state survives between invocations.
//! * Failures discard the accumulator; a partial log is never returned.
//! * Shuffling draws from a ChaCha RNG seeded per call, so a seed fully
//!   determines the log.
//!
//! ## Invariants
//!
//! * Every non-shuffling algorithm is deterministic for a given input.
//! * A single-element input produces an empty log for every algorithm.
//!
//! ## Non-goals
//!
//! * This module does not replay steps (handled by `replay`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::algorithms::bubble::bubble_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
use crate::algorithms::quick::quick_sort;
use crate::algorithms::selection::selection_sort;
use crate::algorithms::stupid::{DEFAULT_SHUFFLE_PASSES, stupid_sort};
use crate::engine::output::SortOutput;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::log::StepLog;
use crate::primitives::step::Step;
use crate::primitives::traits::{TraitKey, TraitSortable};

/// Seed used for unseeded shuffles when no entropy source is available.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x5EED_E30F_1A11_C0DE;

// ============================================================================
// Configuration
// ============================================================================

/// Fully resolved configuration for one sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Trait to compare elements by.
    pub trait_key: TraitKey,

    /// Algorithm to narrate.
    pub algorithm: Algorithm,

    /// Fisher-Yates passes for stupid sort.
    pub shuffle_passes: usize,

    /// Seed for stupid sort; `None` draws a fresh one per call.
    pub seed: Option<u64>,
}

impl SortConfig {
    /// Configuration with default shuffle passes and no seed.
    pub fn new(trait_key: TraitKey, algorithm: Algorithm) -> Self {
        Self {
            trait_key,
            algorithm,
            shuffle_passes: DEFAULT_SHUFFLE_PASSES,
            seed: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless orchestrator for narrated sorts.
pub struct SortExecutor;

impl SortExecutor {
    /// Validate, run the configured algorithm, and collect its output.
    pub fn run_with_config<E: TraitSortable + Clone>(
        elements: &[E],
        config: &SortConfig,
    ) -> Result<SortOutput<E>, SortError> {
        Validator::validate_inputs(elements, config.trait_key)?;
        Validator::validate_shuffle_passes(config.shuffle_passes)?;

        let mut log = StepLog::new();
        let sorted = Self::run_algorithm(elements, config, &mut log)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            algorithm = %config.algorithm,
            trait_key = %config.trait_key,
            elements = elements.len(),
            steps = log.len(),
            "sort narrated"
        );

        Ok(SortOutput {
            steps: log.into_steps(),
            sorted,
            algorithm: config.algorithm,
            trait_key: config.trait_key,
        })
    }

    /// Dispatch to the selected algorithm, appending into `log`.
    pub fn run_algorithm<E: TraitSortable + Clone>(
        elements: &[E],
        config: &SortConfig,
        log: &mut StepLog,
    ) -> Result<Vec<E>, SortError> {
        let key = config.trait_key;
        match config.algorithm {
            Algorithm::Bubble => bubble_sort(elements, key, log),
            Algorithm::Insertion => insertion_sort(elements, key, log),
            Algorithm::Selection => selection_sort(elements, key, log),
            Algorithm::Merge => merge_sort(elements, key, log),
            Algorithm::Quick => quick_sort(elements, key, log),
            Algorithm::Stupid => {
                let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(config.seed));
                Ok(stupid_sort(elements, config.shuffle_passes, &mut rng, log))
            }
        }
    }

    /// Shuffle `elements` with `passes` Fisher-Yates passes.
    ///
    /// Never fails: empty or single-element input yields an empty log.
    pub fn shuffle<E: Clone>(elements: &[E], passes: usize, seed: Option<u64>) -> (Vec<Step>, Vec<E>) {
        let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed));
        let mut log = StepLog::new();
        let shuffled = stupid_sort(elements, passes, &mut rng, &mut log);

        #[cfg(feature = "tracing")]
        tracing::debug!(elements = elements.len(), steps = log.len(), passes, "shuffle narrated");

        (log.into_steps(), shuffled)
    }
}

/// Use `seed` if given, otherwise draw a fresh one.
#[cfg(feature = "std")]
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Use `seed` if given, otherwise fall back to a fixed seed.
#[cfg(not(feature = "std"))]
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or(FALLBACK_SEED)
}
