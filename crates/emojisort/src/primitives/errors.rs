//! Error types for sort-step generation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while generating
//! or replaying a step log: unusable input, builder misconfiguration, and
//! step sequences that cannot be applied to a slot model.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the index and trait that caused them.
//! * **Deferred**: Builder errors are recorded by setters and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty input, elements missing the sort trait.
//! 2. **Step construction**: Highlight index combinations outside 1..=3.
//! 3. **Configuration**: Missing, repeated, or out-of-range builder parameters.
//! 4. **Replay**: A step refers to an empty slot or leaves elements staged.
//!
//! ## Invariants
//!
//! * A failed sort never carries a partial step log.
//! * Every variant provides enough context to locate the failure.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::traits::TraitKey;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sort-step generation and replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// No elements were supplied; there is nothing to sort.
    EmptyInput,

    /// An element does not carry the trait used as the sort key.
    MissingTrait {
        /// Position of the offending element (global index space).
        index: usize,
        /// The trait that was requested.
        trait_key: TraitKey,
    },

    /// A step was constructed with an invalid combination of fields.
    InvalidStep(&'static str),

    /// Shuffle passes must be at least 1.
    InvalidShufflePasses(usize),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A step could not be applied to the replay slot model.
    ReplayMismatch {
        /// Position of the step in the log.
        step: usize,
        /// What went wrong.
        reason: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty; nothing to sort"),
            Self::MissingTrait { index, trait_key } => {
                write!(f, "Element {index} has no value for trait '{trait_key}'")
            }
            Self::InvalidStep(msg) => write!(f, "Invalid step: {msg}"),
            Self::InvalidShufflePasses(passes) => {
                write!(f, "Invalid shuffle passes: {passes} (must be at least 1)")
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::ReplayMismatch { step, reason } => {
                write!(f, "Replay failed at step {step}: {reason}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
