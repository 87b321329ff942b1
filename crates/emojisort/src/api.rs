//! High-level API for narrated sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a sort, plus free functions for the common one-shot cases
//! (sort by a trait, randomise positions).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every optional parameter.
//! * **Deferred validation**: Setters never fail; problems are reported by `build()`.
//! * **Reusable**: A built [`StepSorter`] can narrate any number of inputs.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()`.
//! 2. Chain configuration methods (`.trait_key()`, `.algorithm()`, etc.).
//! 3. Call `.build()` and then `.sort(&elements)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::stupid::DEFAULT_SHUFFLE_PASSES;
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::Algorithm;
pub use crate::engine::output::SortOutput;
pub use crate::engine::replay::{Replayer, replay};
pub use crate::primitives::errors::SortError;
pub use crate::primitives::slots::{SlotMap, repair_indices};
pub use crate::primitives::step::{HighlightIntensity, Step, StepKind};
pub use crate::primitives::traits::{Emoji, TraitKey, TraitSortable};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a narrated sort.
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// Trait to sort by (required).
    pub trait_key: Option<TraitKey>,

    /// Algorithm to narrate (default: bubble sort).
    pub algorithm: Option<Algorithm>,

    /// Fisher-Yates passes for stupid sort (default: 5).
    pub shuffle_passes: Option<usize>,

    /// Seed for stupid sort (default: fresh per call).
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SorterBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            trait_key: None,
            algorithm: None,
            shuffle_passes: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the trait elements are compared by.
    pub fn trait_key(mut self, key: TraitKey) -> Self {
        if self.trait_key.is_some() {
            self.duplicate_param = Some("trait_key");
        }
        self.trait_key = Some(key);
        self
    }

    /// Set the algorithm to narrate.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the number of shuffle passes stupid sort performs.
    pub fn shuffle_passes(mut self, passes: usize) -> Self {
        if self.shuffle_passes.is_some() {
            self.duplicate_param = Some("shuffle_passes");
        }
        self.shuffle_passes = Some(passes);
        self
    }

    /// Fix the shuffle seed so stupid sort logs are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a reusable sorter.
    pub fn build(self) -> Result<StepSorter, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Sort key is required
        let trait_key = Validator::validate_required(self.trait_key, "trait_key")?;

        // Validate shuffle passes
        let shuffle_passes = self.shuffle_passes.unwrap_or(DEFAULT_SHUFFLE_PASSES);
        Validator::validate_shuffle_passes(shuffle_passes)?;

        Ok(StepSorter {
            config: SortConfig {
                trait_key,
                algorithm: self.algorithm.unwrap_or_default(),
                shuffle_passes,
                seed: self.seed,
            },
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// A validated, reusable sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSorter {
    config: SortConfig,
}

impl StepSorter {
    /// Narrate sorting `elements`.
    pub fn sort<E: TraitSortable + Clone>(&self, elements: &[E]) -> Result<SortOutput<E>, SortError> {
        SortExecutor::run_with_config(elements, &self.config)
    }

    /// The resolved configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }
}

// ============================================================================
// One-shot Functions
// ============================================================================

/// Sort `elements` by `trait_key` with `algorithm`, using default settings.
pub fn sort<E: TraitSortable + Clone>(
    elements: &[E],
    trait_key: TraitKey,
    algorithm: Algorithm,
) -> Result<SortOutput<E>, SortError> {
    SortExecutor::run_with_config(elements, &SortConfig::new(trait_key, algorithm))
}

/// One random Fisher-Yates pass, narrated as swaps.
pub fn shuffle_steps<E: Clone>(elements: &[E]) -> Vec<Step> {
    SortExecutor::shuffle(elements, 1, None).0
}

/// Like [`shuffle_steps`], but reproducible for a given `seed`.
pub fn shuffle_steps_seeded<E: Clone>(elements: &[E], seed: u64) -> Vec<Step> {
    SortExecutor::shuffle(elements, 1, Some(seed)).0
}
