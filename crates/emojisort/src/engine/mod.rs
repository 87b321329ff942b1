//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer validates input, owns the per-call step accumulator and
//! dispatches to the algorithms. It also hosts the replayer that applies a
//! finished step log to a slot model.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for narrated sorts.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort operations.
pub mod output;

/// Step replay against a slot model.
pub mod replay;
