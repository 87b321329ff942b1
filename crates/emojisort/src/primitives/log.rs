//! Call-scoped step accumulator.
//!
//! Recursive algorithms append into a single [`StepLog`] passed down by
//! mutable reference, so parent and child narration interleave depth-first.
//! Reads go through the `[Step]` slice the log dereferences to.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Deref;

// Internal dependencies
use crate::primitives::step::{Step, StepKind};

/// Ordered, append-only list of steps for one sort invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append one step.
    #[inline]
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Take ownership of the recorded steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl Deref for StepLog {
    type Target = [Step];

    fn deref(&self) -> &[Step] {
        &self.steps
    }
}

/// Number of steps of `kind` in `steps`.
pub fn count_kind(steps: &[Step], kind: StepKind) -> usize {
    steps.iter().filter(|s| s.kind() == kind).count()
}
