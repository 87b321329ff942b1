//! Output of a narrated sort.
//!
//! ## Purpose
//!
//! This module defines [`SortOutput`], which pairs the step log with the
//! final ordering the engine computed, so a consumer can animate the log and
//! check where it should end up.
//!
//! ## Design notes
//!
//! * **Immutable**: The output is a plain value owned by the caller.
//! * **Ergonomics**: Implements `Display` for a human-readable transcript.
//!
//! ## Invariants
//!
//! * Replaying `steps` against the input reproduces `sorted` exactly.
//!
//! ## Non-goals
//!
//! * This module does not pace, animate or persist steps.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::primitives::log::count_kind;
use crate::primitives::step::{Step, StepKind};
use crate::primitives::traits::TraitKey;

// ============================================================================
// Output Structure
// ============================================================================

/// Step log and final ordering of one sort invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutput<E> {
    /// Ordered, replayable narration of the sort.
    pub steps: Vec<Step>,

    /// The elements in the order the engine left them.
    pub sorted: Vec<E>,

    /// Algorithm that produced the log.
    pub algorithm: Algorithm,

    /// Trait the elements were compared by.
    pub trait_key: TraitKey,
}

impl<E> SortOutput<E> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of steps in the log.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the log is empty (nothing to animate).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps of `kind`.
    pub fn count(&self, kind: StepKind) -> usize {
        count_kind(&self.steps, kind)
    }

    /// Positions of every step of `kind`, in log order.
    pub fn positions(&self, kind: StepKind) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind() == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// Take the step log, dropping the final ordering.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<E: Display> Display for SortOutput<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Trait: {}", self.trait_key)?;
        writeln!(f, "  Elements: {}", self.sorted.len())?;
        writeln!(f, "  Steps: {}", self.steps.len())?;
        writeln!(f)?;

        writeln!(f, "Steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "  {i:>5}  {step}")?;
        }
        writeln!(f)?;

        write!(f, "Final order:")?;
        for element in &self.sorted {
            write!(f, " {element}")?;
        }
        writeln!(f)
    }
}
