//! The step vocabulary shared by every sorting algorithm.
//!
//! ## Purpose
//!
//! A [`Step`] is one atomic, replayable narration unit of an algorithm's
//! execution. The step log is the only thing a rendering layer ever sees: it
//! knows nothing about sorting, and the algorithms know nothing about pixels.
//!
//! ## Design notes
//!
//! * **Closed set**: Step kinds form a single enum; consumers match exhaustively.
//! * **Typed fields**: Each kind carries exactly the indices it needs, so a move
//!   can never be built without both a source and a target.
//! * **Global indices**: Every index refers to the top-level slot space, never
//!   to a recursive sub-array.
//!
//! ## Key concepts
//!
//! * **Main row**: The slots `[0, n)` the elements start in.
//! * **Joining area**: Auxiliary slots used by merge sort and pivot staging.
//! * **Holding area**: A single slot used by insertion sort.
//!
//! ## Invariants
//!
//! * A highlight mentions one to three indices; `extra_extra` implies `extra`.
//! * Steps are immutable values; a log is order-sensitive.
//!
//! ## Non-goals
//!
//! * This module does not apply steps (see the replay engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Step Types
// ============================================================================

/// How strongly a highlight should draw attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightIntensity {
    /// A comparison or candidate being looked at.
    #[default]
    Small,

    /// A decision that is about to change the order.
    Large,
}

/// One atomic visual event and the slots it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Draw attention to up to three indices. Has no ordering effect.
    Highlight {
        /// First highlighted index.
        main: usize,
        /// Optional second index.
        extra: Option<usize>,
        /// Optional third index; only present when `extra` is.
        extra_extra: Option<usize>,
        /// Highlight strength.
        intensity: HighlightIntensity,
    },

    /// Stage `main` immediately after the staged element addressed by `target`.
    MoveAfter {
        /// Main-row slot the element leaves.
        main: usize,
        /// Pivot-relative staging address.
        target: usize,
    },

    /// Stage `main` immediately before the staged element addressed by `target`.
    MoveBefore {
        /// Main-row slot the element leaves.
        main: usize,
        /// Pivot-relative staging address.
        target: usize,
    },

    /// Move `main` out of the row into joining-area slot `joining`.
    MoveToJoiningArea {
        /// Main-row slot the element leaves.
        main: usize,
        /// Destination key in the joining area.
        joining: usize,
    },

    /// Write the joining area back into the freed main-row slots, in key order.
    MergeComplete,

    /// Exchange two main-row slots.
    Swap {
        /// First slot.
        a: usize,
        /// Second slot.
        b: usize,
    },

    /// Mark a divide between two contiguous ranges. Visual only.
    Split {
        /// Last index of the left range.
        left: usize,
        /// First index of the right range.
        right: usize,
    },

    /// Lift `main` out of the row into the holding area.
    Hold {
        /// Slot being lifted.
        main: usize,
    },

    /// Release the holding area.
    Unhold,

    /// Slot `main` takes the element at `source`, or the held element if `None`.
    Match {
        /// Slot being filled.
        main: usize,
        /// Slot being copied from; `None` means the holding area.
        source: Option<usize>,
    },

    /// Designate `main` as pivot and stage it in the joining area.
    SelectPivot {
        /// Pivot slot.
        main: usize,
    },

    /// Write every staged element back into the freed slots, in staged order.
    DropPivot,
}

/// Fieldless discriminant of a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKind {
    /// See [`Step::Highlight`].
    Highlight,
    /// See [`Step::MoveAfter`].
    MoveAfter,
    /// See [`Step::MoveBefore`].
    MoveBefore,
    /// See [`Step::MoveToJoiningArea`].
    MoveToJoiningArea,
    /// See [`Step::MergeComplete`].
    MergeComplete,
    /// See [`Step::Swap`].
    Swap,
    /// See [`Step::Split`].
    Split,
    /// See [`Step::Hold`].
    Hold,
    /// See [`Step::Unhold`].
    Unhold,
    /// See [`Step::Match`].
    Match,
    /// See [`Step::SelectPivot`].
    SelectPivot,
    /// See [`Step::DropPivot`].
    DropPivot,
}

// ============================================================================
// Constructors
// ============================================================================

impl Step {
    /// Highlight a single index.
    pub fn highlight(main: usize, intensity: HighlightIntensity) -> Self {
        Self::Highlight {
            main,
            extra: None,
            extra_extra: None,
            intensity,
        }
    }

    /// Highlight two indices.
    pub fn highlight_pair(main: usize, extra: usize, intensity: HighlightIntensity) -> Self {
        Self::Highlight {
            main,
            extra: Some(extra),
            extra_extra: None,
            intensity,
        }
    }

    /// Highlight one to three indices.
    pub fn highlight_many(
        indices: &[usize],
        intensity: HighlightIntensity,
    ) -> core::result::Result<Self, SortError> {
        match *indices {
            [main] => Ok(Self::highlight(main, intensity)),
            [main, extra] => Ok(Self::highlight_pair(main, extra, intensity)),
            [main, extra, extra_extra] => Ok(Self::Highlight {
                main,
                extra: Some(extra),
                extra_extra: Some(extra_extra),
                intensity,
            }),
            [] => Err(SortError::InvalidStep("highlight needs at least one index")),
            _ => Err(SortError::InvalidStep("highlight accepts at most three indices")),
        }
    }

    /// Move `main` immediately after `target`.
    pub fn move_after(main: usize, target: usize) -> Self {
        Self::MoveAfter { main, target }
    }

    /// Move `main` immediately before `target`.
    pub fn move_before(main: usize, target: usize) -> Self {
        Self::MoveBefore { main, target }
    }

    /// Move `main` into joining-area slot `joining`.
    pub fn move_to_joining_area(main: usize, joining: usize) -> Self {
        Self::MoveToJoiningArea { main, joining }
    }

    /// Swap `a` with `b`.
    pub fn swap(a: usize, b: usize) -> Self {
        Self::Swap { a, b }
    }

    /// Split between `left` and `right`.
    pub fn split(left: usize, right: usize) -> Self {
        Self::Split { left, right }
    }

    /// Lift `main` into the holding area.
    pub fn hold(main: usize) -> Self {
        Self::Hold { main }
    }

    /// Fill `main` from `source`, or from the holding area when `source` is `None`.
    pub fn match_with(main: usize, source: Option<usize>) -> Self {
        Self::Match { main, source }
    }

    /// Select `main` as the pivot.
    pub fn select_pivot(main: usize) -> Self {
        Self::SelectPivot { main }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The kind of this step.
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Highlight { .. } => StepKind::Highlight,
            Self::MoveAfter { .. } => StepKind::MoveAfter,
            Self::MoveBefore { .. } => StepKind::MoveBefore,
            Self::MoveToJoiningArea { .. } => StepKind::MoveToJoiningArea,
            Self::MergeComplete => StepKind::MergeComplete,
            Self::Swap { .. } => StepKind::Swap,
            Self::Split { .. } => StepKind::Split,
            Self::Hold { .. } => StepKind::Hold,
            Self::Unhold => StepKind::Unhold,
            Self::Match { .. } => StepKind::Match,
            Self::SelectPivot { .. } => StepKind::SelectPivot,
            Self::DropPivot => StepKind::DropPivot,
        }
    }

    /// Every index this step mentions, in field order.
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Self::Highlight {
                main,
                extra,
                extra_extra,
                ..
            } => core::iter::once(main)
                .chain(extra)
                .chain(extra_extra)
                .collect(),
            Self::MoveAfter { main, target } | Self::MoveBefore { main, target } => {
                [main, target].to_vec()
            }
            Self::MoveToJoiningArea { main, joining } => [main, joining].to_vec(),
            Self::Swap { a, b } => [a, b].to_vec(),
            Self::Split { left, right } => [left, right].to_vec(),
            Self::Match { main, source } => core::iter::once(main).chain(source).collect(),
            Self::Hold { main } | Self::SelectPivot { main } => [main].to_vec(),
            Self::MergeComplete | Self::Unhold | Self::DropPivot => Vec::new(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HighlightIntensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Small => f.write_str("small"),
            Self::Large => f.write_str("large"),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            Self::Highlight {
                main,
                extra,
                extra_extra,
                intensity,
            } => {
                write!(f, "highlight ({intensity}) {main}")?;
                if let Some(extra) = extra {
                    write!(f, ", {extra}")?;
                }
                if let Some(extra_extra) = extra_extra {
                    write!(f, ", {extra_extra}")?;
                }
                Ok(())
            }
            Self::MoveAfter { main, target } => write!(f, "move {main} after {target}"),
            Self::MoveBefore { main, target } => write!(f, "move {main} before {target}"),
            Self::MoveToJoiningArea { main, joining } => {
                write!(f, "move {main} to joining slot {joining}")
            }
            Self::MergeComplete => f.write_str("merge complete"),
            Self::Swap { a, b } => write!(f, "swap {a} <-> {b}"),
            Self::Split { left, right } => write!(f, "split {left} | {right}"),
            Self::Hold { main } => write!(f, "hold {main}"),
            Self::Unhold => f.write_str("unhold"),
            Self::Match {
                main,
                source: Some(source),
            } => write!(f, "match {main} <- {source}"),
            Self::Match { main, source: None } => write!(f, "match {main} <- held"),
            Self::SelectPivot { main } => write!(f, "select pivot {main}"),
            Self::DropPivot => f.write_str("drop pivot"),
        }
    }
}
