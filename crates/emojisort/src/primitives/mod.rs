//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the step vocabulary, the element capability, error
//! types and the small data structures shared by the rest of the crate. It
//! has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Step model.
pub mod step;

/// Sortable elements and trait keys.
pub mod traits;

/// Step accumulator.
pub mod log;

/// Slot maps and index repair.
pub mod slots;
