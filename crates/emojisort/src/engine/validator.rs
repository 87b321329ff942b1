//! Input and configuration validation.
//!
//! ## Purpose
//!
//! This module checks everything that must hold before an algorithm runs:
//! the input is non-empty, every element carries the sort trait, and the
//! builder configuration is complete and in range.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or reorder input data.

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::traits::{TraitKey, TraitSortable, require_trait};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort inputs and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate elements for sorting by `key`.
    pub fn validate_inputs<E: TraitSortable>(elements: &[E], key: TraitKey) -> Result<(), SortError> {
        // Check 1: Non-empty input
        if elements.is_empty() {
            return Err(SortError::EmptyInput);
        }

        // Check 2: Every element carries the trait
        for (index, element) in elements.iter().enumerate() {
            require_trait(element, key, index)?;
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of shuffle passes used by stupid sort.
    pub fn validate_shuffle_passes(passes: usize) -> Result<(), SortError> {
        if passes == 0 {
            return Err(SortError::InvalidShufflePasses(passes));
        }
        Ok(())
    }

    /// Unwrap a required builder parameter.
    pub fn validate_required<T>(value: Option<T>, parameter: &'static str) -> Result<T, SortError> {
        value.ok_or(SortError::MissingParameter { parameter })
    }

    /// Validate that no parameter was set more than once.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SortError> {
        if let Some(parameter) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
