//! Sortable elements and the traits they are sorted by.
//!
//! ## Purpose
//!
//! This module defines the element capability the engine sorts over: a
//! mapping from [`TraitKey`] to a numeric comparison value. It also provides
//! [`Emoji`], the concrete element the teaching tool animates.
//!
//! ## Design notes
//!
//! * **Opaque elements**: The engine only ever asks an element for one trait value.
//! * **Generic values**: Comparison values are any primitive integer (`PrimInt`).
//! * **Borrowing**: References to sortable elements are themselves sortable.
//!
//! ## Non-goals
//!
//! * This module does not load emoji metadata from any asset format.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Trait Keys
// ============================================================================

/// A named numeric attribute used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraitKey {
    /// How happy the emoji looks.
    Happiness,

    /// How often the emoji is used.
    Popularity,

    /// How much emotion the emoji conveys.
    Emotion,

    /// How funny the emoji is.
    Humour,

    /// How often the emoji is used sarcastically.
    Sarcastic,
}

impl TraitKey {
    /// Every trait key, in declaration order.
    pub const ALL: [TraitKey; 5] = [
        TraitKey::Happiness,
        TraitKey::Popularity,
        TraitKey::Emotion,
        TraitKey::Humour,
        TraitKey::Sarcastic,
    ];
}

impl Display for TraitKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let label = match self {
            Self::Happiness => "Happiness",
            Self::Popularity => "Popularity",
            Self::Emotion => "Emotion",
            Self::Humour => "Humour",
            Self::Sarcastic => "Use Sarcastically",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Sortable Capability
// ============================================================================

/// An element that can be ordered by one of its traits.
pub trait TraitSortable {
    /// Numeric comparison value.
    type Value: PrimInt;

    /// The value of `key` for this element, if it has one.
    fn trait_value(&self, key: TraitKey) -> Option<Self::Value>;
}

impl<E: TraitSortable + ?Sized> TraitSortable for &E {
    type Value = E::Value;

    fn trait_value(&self, key: TraitKey) -> Option<Self::Value> {
        (**self).trait_value(key)
    }
}

/// Look up `key` on `element`, reporting `index` if the trait is absent.
#[inline]
pub fn require_trait<E: TraitSortable>(
    element: &E,
    key: TraitKey,
    index: usize,
) -> core::result::Result<E::Value, SortError> {
    element.trait_value(key).ok_or(SortError::MissingTrait {
        index,
        trait_key: key,
    })
}

// ============================================================================
// Emoji
// ============================================================================

/// An emoji with a character, a description and a set of trait scores.
///
/// Trait scores are expected to lie in `0..=99`; this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    /// The emoji character itself.
    pub character: String,

    /// Short human description.
    pub name: String,

    /// Trait scores.
    pub traits: BTreeMap<TraitKey, i32>,
}

impl Emoji {
    /// Create an emoji without any traits.
    pub fn new(character: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            name: name.into(),
            traits: BTreeMap::new(),
        }
    }

    /// Create an emoji with a score for every trait.
    pub fn with_traits(
        character: &str,
        name: &str,
        happiness: i32,
        popularity: i32,
        emotion: i32,
        humour: i32,
        sarcastic: i32,
    ) -> Self {
        Self::new(character, name)
            .with_trait(TraitKey::Happiness, happiness)
            .with_trait(TraitKey::Popularity, popularity)
            .with_trait(TraitKey::Emotion, emotion)
            .with_trait(TraitKey::Humour, humour)
            .with_trait(TraitKey::Sarcastic, sarcastic)
    }

    /// Set (or replace) one trait score.
    pub fn with_trait(mut self, key: TraitKey, value: i32) -> Self {
        self.traits.insert(key, value);
        self
    }
}

impl TraitSortable for Emoji {
    type Value = i32;

    fn trait_value(&self, key: TraitKey) -> Option<i32> {
        self.traits.get(&key).copied()
    }
}

impl Display for Emoji {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.character)
    }
}
