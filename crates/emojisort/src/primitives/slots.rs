//! Slot maps and index reconciliation.
//!
//! ## Purpose
//!
//! Replaying a step log moves element handles between logical slots. This
//! module provides the typed slot map used for that and [`repair_indices`],
//! which compacts a sparse key space back to a dense `[0, n)` range.
//!
//! ## Invariants
//!
//! * `repair_indices` preserves the relative order of keys.
//! * The output of `repair_indices` has keys exactly `0..len`.
//!
//! ## Non-goals
//!
//! * This module does not decide where elements go; it only renumbers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Map from logical slot number to element handle, ordered by slot.
pub type SlotMap<E> = BTreeMap<usize, E>;

/// Build a dense slot map from a sequence of elements.
pub fn slots_from<E: Clone>(elements: &[E]) -> SlotMap<E> {
    elements.iter().cloned().enumerate().collect()
}

/// Renumber `slots` so its keys are `0..len`, keeping their order.
///
/// Pure: the input snapshot is left untouched.
pub fn repair_indices<E: Clone>(slots: &SlotMap<E>) -> SlotMap<E> {
    slots.values().cloned().enumerate().collect()
}

/// The values of `slots` in key order.
pub fn slot_values<E: Clone>(slots: &SlotMap<E>) -> Vec<E> {
    slots.values().cloned().collect()
}

/// Whether the keys of `slots` are exactly `0..len`.
pub fn is_dense<E>(slots: &SlotMap<E>) -> bool {
    slots.keys().copied().eq(0..slots.len())
}
