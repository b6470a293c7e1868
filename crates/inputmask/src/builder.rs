//! # Building masks
//!
//! ## Overview
//!
//! [MaskBuilder] assembles a [Mask] by appending slots, one kind at a time. Every method takes
//! a repeat count, and appends that many copies of the slot.
//!
//! The builder isn't consumed by [MaskBuilder::build], so a common prefix can be reused for
//! several masks.
//!
//! ## Example
//!
//! ```
//! use inputmask::builder::MaskBuilder;
//!
//! let mut phone = MaskBuilder::new();
//! phone.literal("+33 ").digit_with_default(1, '6');
//!
//! for _ in 0..4 {
//!     phone.literal(" ").digit(2);
//! }
//!
//! let mask = phone.build();
//! assert_eq!(mask.default_text(), "+33 6 00 00 00 00");
//! assert_eq!(mask.first_navigable(), 4);
//! ```
use crate::errors::MaskResult;
use crate::mask::Mask;
use crate::pattern::parse_pattern;
use crate::slot::{CustomRule, Slot};

/// Incrementally assembles a [Mask].
#[derive(Clone, Debug, Default)]
pub struct MaskBuilder {
    slots: Vec<Slot>,
}

impl MaskBuilder {
    /// Create a builder with no slots.
    pub fn new() -> Self {
        MaskBuilder::default()
    }

    /// Number of slots appended so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slots have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append `repeat` copies of `slot`.
    pub fn append(&mut self, repeat: usize, slot: Slot) -> &mut Self {
        self.slots.extend(std::iter::repeat(slot).take(repeat));
        self
    }

    /// Append one literal slot for each character of `value`.
    pub fn literal(&mut self, value: &str) -> &mut Self {
        self.slots.extend(value.chars().map(Slot::literal));
        self
    }

    /// Append digits, defaulting to `'0'`.
    pub fn digit(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::digit())
    }

    /// Append digits with the given default.
    pub fn digit_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::digit().with_default(default))
    }

    /// Append letters, defaulting to `'a'`.
    pub fn letter(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::letter())
    }

    /// Append letters with the given default.
    pub fn letter_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::letter().with_default(default))
    }

    /// Append letters that are converted to uppercase, defaulting to `'A'`.
    pub fn upper_letter(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::upper_letter())
    }

    /// Append letters that are converted to uppercase, with the given default.
    pub fn upper_letter_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::upper_letter().with_default(default))
    }

    /// Append letters that are converted to lowercase, defaulting to `'a'`.
    pub fn lower_letter(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::lower_letter())
    }

    /// Append letters that are converted to lowercase, with the given default.
    pub fn lower_letter_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::lower_letter().with_default(default))
    }

    /// Append letters or digits, defaulting to `'a'`.
    pub fn letter_or_digit(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::letter_or_digit())
    }

    /// Append letters or digits with the given default.
    pub fn letter_or_digit_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::letter_or_digit().with_default(default))
    }

    /// Append hexadecimal digits that are converted to uppercase, defaulting to `'0'`.
    pub fn hex(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::hex())
    }

    /// Append hexadecimal digits that are converted to uppercase, with the given default.
    pub fn hex_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::hex().with_default(default))
    }

    /// Append slots that take any character, defaulting to `' '`.
    pub fn any(&mut self, repeat: usize) -> &mut Self {
        self.append(repeat, Slot::any())
    }

    /// Append slots that take any character, with the given default.
    pub fn any_with_default(&mut self, repeat: usize, default: char) -> &mut Self {
        self.append(repeat, Slot::any().with_default(default))
    }

    /// Append slots governed by `rule`.
    pub fn custom(&mut self, repeat: usize, rule: CustomRule, default: char) -> &mut Self {
        self.append(repeat, Slot::custom(rule, default))
    }

    /// Append the slots described by a pattern string.
    ///
    /// See [pattern](crate::pattern) for the syntax. Nothing is appended if the pattern is
    /// invalid.
    pub fn pattern(&mut self, pattern: &str) -> MaskResult<&mut Self> {
        let slots = parse_pattern(pattern)?;
        self.slots.extend(slots);
        Ok(self)
    }

    /// Create a [Mask] from the slots appended so far.
    pub fn build(&self) -> Mask {
        tracing::trace!(len = self.slots.len(), "building mask");

        Mask::new(self.slots.clone())
    }

    /// Create a [Mask], first checking that every editable slot accepts its default.
    pub fn try_build(&self) -> MaskResult<Mask> {
        let mask = self.build();
        mask.validate()?;

        Ok(mask)
    }
}
