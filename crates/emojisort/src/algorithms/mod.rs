//! Layer 2: Algorithms
//!
//! This layer implements the six narrating sorts. Each one reorders a copy of
//! its input and records every comparison and movement into a [`StepLog`]
//! supplied by the caller. Orchestration (validation, accumulator lifetime,
//! reporting) belongs to the engine layer.
//!
//! [`StepLog`]: crate::primitives::log::StepLog

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Adjacent-pair bubble sort with a shrinking bound.
pub mod bubble;

// Hold-and-shift insertion sort.
pub mod insertion;

// Minimum-scan selection sort.
pub mod selection;

// Top-down merge sort via the joining area.
pub mod merge;

// Middle-pivot three-way quick sort.
pub mod quick;

// Repeated Fisher-Yates shuffling.
pub mod stupid;

// ============================================================================
// Algorithm Selector
// ============================================================================

/// The sorting algorithms the engine can narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Bubble sort.
    #[default]
    Bubble,

    /// Insertion sort.
    Insertion,

    /// Selection sort.
    Selection,

    /// Merge sort.
    Merge,

    /// Quick sort.
    Quick,

    /// Shuffle a few times and hope.
    Stupid,
}

impl Algorithm {
    /// Every algorithm, in teaching order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Stupid,
    ];

    /// Whether the algorithm narrates recursion (splits, joins, pivots).
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::Merge | Self::Quick)
    }

    /// Whether the algorithm is guaranteed to leave its input sorted.
    pub fn converges(self) -> bool {
        !matches!(self, Self::Stupid)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Stupid => "Stupid Sort",
        };
        f.write_str(name)
    }
}
