//! # emojisort: sorting algorithms that narrate themselves
//!
//! Sort a collection of emoji by one of their traits and get back not just
//! the sorted order, but every highlight, swap, split, hold and pivot the
//! algorithm performed along the way. The resulting step log is meant to be
//! played back by a front end at whatever pace it likes.
//!
//! ## What is a step log?
//!
//! A step log is an ordered list of [`Step`](prelude::Step) values. Each step
//! names slots by index: slots in the main row, in the merge "joining area",
//! or relative to a quicksort pivot. Applying the log to the input in order
//! (see [`Replayer`](prelude::Replayer)) reproduces the sorted order the
//! engine reports.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use emojisort::prelude::*;
//!
//! let emoji = vec![
//!     Emoji::with_traits("😀", "grin", 90, 70, 40, 50, 10),
//!     Emoji::with_traits("😢", "cry", 5, 40, 80, 5, 20),
//!     Emoji::with_traits("🙃", "upside down", 60, 50, 30, 70, 95),
//! ];
//!
//! let output = Sorter::new()
//!     .trait_key(Happiness)
//!     .algorithm(Insertion)
//!     .build()?
//!     .sort(&emoji)?;
//!
//! // The log replays to the engine's own answer
//! assert_eq!(replay(&emoji, &output.steps)?, output.sorted);
//! println!("{}", output);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm: Insertion Sort
//!   Trait: Happiness
//!   Elements: 3
//!   Steps: ...
//!
//! Steps:
//!       0  hold 1
//!   ...
//!
//! Final order: 😢 🙃 😀
//! ```
//!
//! ### One-shot functions
//!
//! ```rust
//! use emojisort::prelude::*;
//!
//! let emoji = vec![
//!     Emoji::new("🐢", "turtle").with_trait(Popularity, 30),
//!     Emoji::new("🐇", "rabbit").with_trait(Popularity, 10),
//! ];
//!
//! let output = sort(&emoji, Popularity, Quick)?;
//! assert_eq!(output.sorted[0].name, "rabbit");
//!
//! // Randomise positions: one Fisher-Yates pass, narrated as swaps
//! let swaps = shuffle_steps_seeded(&emoji, 42);
//! assert!(swaps.iter().all(|s| s.kind() == StepKind::Swap));
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Custom elements
//!
//! Anything implementing [`TraitSortable`](prelude::TraitSortable) can be
//! sorted. Elements that lack the requested trait make the sort fail with
//! [`SortError::MissingTrait`](prelude::SortError::MissingTrait) and no
//! partial log.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! emojisort = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, unseeded shuffles fall back to a fixed seed; pass
//! `.seed(..)` to vary them.
//!
//! ## Features
//!
//! * `std` (default): standard library support and OS-seeded shuffles.
//! * `tracing`: structured `tracing` events from the engine and replayer.
//! * `dev`: exposes the `internals` module for integration tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - step model, elements, errors and slot maps.
mod primitives;

// Layer 2: Algorithms - the six narrating sorts.
mod algorithms;

// Layer 3: Engine - orchestration, validation and replay.
mod engine;

// High-level fluent API for narrated sorting.
mod api;

// Standard emojisort prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm,
        Algorithm::{Bubble, Insertion, Merge, Quick, Selection, Stupid},
        Emoji, HighlightIntensity, Replayer, SlotMap, SortError, SortOutput, SorterBuilder as Sorter,
        Step, StepKind, StepSorter, TraitKey,
        TraitKey::{Emotion, Happiness, Humour, Popularity, Sarcastic},
        TraitSortable, repair_indices, replay, shuffle_steps, shuffle_steps_seeded, sort,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
