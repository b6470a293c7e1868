//! # Masks
//!
//! ## Overview
//!
//! A [Mask] is the fixed sequence of [Slot] values that describes what a field may contain.
//! Character `i` of the field's text always belongs to slot `i`.
//!
//! Masks are immutable once built, and cloning one only bumps a reference count, so the same
//! mask can back any number of fields.
//!
//! ## Example
//!
//! ```
//! use inputmask::mask::Mask;
//!
//! let mask: Mask = "(###) ###-####".parse().unwrap();
//!
//! assert_eq!(mask.len(), 14);
//! assert_eq!(mask.default_text(), "(000) 000-0000");
//! assert_eq!(mask.first_navigable(), 1);
//! ```
use std::ops::Index;
use std::str::FromStr;
use std::sync::Arc;

use crate::builder::MaskBuilder;
use crate::errors::MaskError;
use crate::slot::Slot;

/// An immutable, fixed-length sequence of slots.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    slots: Arc<[Slot]>,
}

impl Mask {
    pub(crate) fn new(slots: Vec<Slot>) -> Self {
        Mask { slots: slots.into() }
    }

    /// Number of slots, which is also the length of any text the mask produces.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether this mask has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the slot at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// All slots, in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterate over the slots, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Whether the caret may rest at `index`.
    ///
    /// Positions past the last slot are not navigable.
    pub fn is_navigable(&self, index: usize) -> bool {
        self.get(index).is_some_and(Slot::is_navigable)
    }

    /// Whether `index` holds a literal slot.
    ///
    /// Positions past the last slot are not literals.
    pub fn is_literal(&self, index: usize) -> bool {
        self.get(index).is_some_and(Slot::is_literal)
    }

    /// The text of a field whose slots all hold their defaults.
    pub fn default_text(&self) -> String {
        self.slots.iter().map(Slot::default_char).collect()
    }

    /// The first position the caret may rest at, or `0` if no slot is navigable.
    pub fn first_navigable(&self) -> usize {
        self.slots.iter().position(Slot::is_navigable).unwrap_or(0)
    }

    /// Whether `text` has one character per slot, and every slot accepts its character.
    pub fn matches(&self, text: &str) -> bool {
        text.chars().count() == self.len() &&
            text.chars().zip(self.slots.iter()).all(|(c, slot)| slot.accepts(c))
    }

    /// Check that every editable slot accepts its own default character.
    pub fn validate(&self) -> Result<(), MaskError> {
        for (index, slot) in self.slots.iter().enumerate() {
            let default = slot.default_char();

            if !slot.is_literal() && !slot.accepts(default) {
                return Err(MaskError::DefaultNotAccepted { index, default });
            }
        }

        Ok(())
    }
}

impl Default for Mask {
    fn default() -> Self {
        Mask::new(Vec::new())
    }
}

impl Index<usize> for Mask {
    type Output = Slot;

    fn index(&self, index: usize) -> &Slot {
        &self.slots[index]
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl FromIterator<Slot> for Mask {
    fn from_iter<T: IntoIterator<Item = Slot>>(iter: T) -> Self {
        Mask::new(iter.into_iter().collect())
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let mut builder = MaskBuilder::new();
        builder.pattern(pattern)?;
        builder.try_build()
    }
}
