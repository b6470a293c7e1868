//! # Edit correction
//!
//! ## Overview
//!
//! [MaskFilter] sits between a text control and its buffer. Every [Change] the control
//! proposes goes through [MaskFilter::filter], which either:
//!
//! - rejects it, when some character doesn't fit its slot, leaving the field as it was;
//! - rewrites it so that the field keeps exactly one character per slot, with every
//!   character transformed by its slot; or
//! - passes it through, when it only moves the caret or selection.
//!
//! In every case that isn't a rejection the caret is then moved off of any literal slot, in
//! the direction the user was travelling.
//!
//! ## Corrections
//!
//! - Typing overwrites the slots after the caret rather than inserting, so the text never
//!   grows.
//! - Pasting over a selection fills the selection's remaining slots with their defaults.
//! - Deleting resets slots to their defaults. A deletion that starts on a literal reaches back
//!   to the first editable slot before it, so that backspacing over a separator clears the
//!   character in front of it.
//!
//! ## Example
//!
//! ```
//! use inputmask::{
//!     builder::MaskBuilder,
//!     change::{ChangeOrigin, ControlState},
//!     filter::MaskFilter,
//! };
//!
//! let mask = MaskBuilder::new().digit(1).literal("-").upper_letter(1).build();
//! let filter = MaskFilter::new(mask);
//!
//! let change = ControlState::new("0-A", 2, 2).replace_selection("b");
//! let change = filter.filter(change, ChangeOrigin::User).unwrap();
//! assert_eq!(change.new_text(), "0-B");
//!
//! let change = ControlState::new("0-A", 0, 0).replace_selection("x");
//! assert_eq!(filter.filter(change, ChangeOrigin::User), None);
//! ```
use crate::change::{Change, ChangeOrigin, ChangeShape};
use crate::mask::Mask;
use crate::util::char_len;

/// Corrects the changes made to a field, so that its text always fits a [Mask].
#[derive(Clone, Debug, PartialEq)]
pub struct MaskFilter {
    mask: Mask,
}

impl MaskFilter {
    /// Create a filter for `mask`.
    pub fn new(mask: Mask) -> Self {
        MaskFilter { mask }
    }

    /// The mask this filter enforces.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Correct a change proposed by a text control.
    ///
    /// Returns `None` if the change must be dropped. Changes that install the default value
    /// are returned untouched.
    pub fn filter<'a>(&self, mut change: Change<'a>, origin: ChangeOrigin) -> Option<Change<'a>> {
        if origin == ChangeOrigin::DefaultValue {
            return Some(change);
        }

        if change.is_content_change() && !self.correct_content(&mut change) {
            return None;
        }

        self.adjust_caret(&mut change);

        return Some(change);
    }

    fn correct_content(&self, change: &mut Change<'_>) -> bool {
        let start = change.start();

        let corrected = match change.shape() {
            ChangeShape::Replace => self.correct_replaced(change).map(|text| (start, text)),
            ChangeShape::Insert => self.correct_inserted(change).map(|text| (start, text)),
            ChangeShape::Delete => Some(self.correct_deleted(change)),
            ChangeShape::Selection => return true,
        };

        let Some((start, text)) = corrected else {
            return false;
        };

        let end = (start + char_len(&text)).min(change.control().len());

        tracing::trace!(start, end, text = text.as_str(), "corrected change");

        change.set_range(start..end);
        change.set_text(text);

        return true;
    }

    /// Check and transform each character of `input`, placed from slot `start` onwards, and
    /// stopping before slot `limit`.
    fn accept_run(&self, start: usize, limit: usize, input: &str) -> Option<String> {
        let mut res = String::with_capacity(input.len());

        for (index, c) in (start..limit).zip(input.chars()) {
            let slot = &self.mask[index];

            if !slot.accepts(c) {
                tracing::debug!(index, ch = ?c, "slot rejected character");
                return None;
            }

            res.push(slot.transform(c));
        }

        Some(res)
    }

    fn correct_replaced(&self, change: &Change<'_>) -> Option<String> {
        let start = change.start();
        let limit = change.end().min(self.mask.len());
        let input = change.text();

        let mut res = self.accept_run(start, limit, input)?;

        for index in (start + char_len(input))..limit {
            res.push(self.mask[index].default_char());
        }

        Some(res)
    }

    fn correct_inserted(&self, change: &Change<'_>) -> Option<String> {
        self.accept_run(change.start(), self.mask.len(), change.text())
    }

    fn correct_deleted(&self, change: &Change<'_>) -> (usize, String) {
        let mut start = change.start();
        let limit = change.end().min(self.mask.len());

        let mut res: Vec<char> = (start..limit).map(|i| self.mask[i].default_char()).collect();

        // Backspacing onto a literal also clears the editable slot before it.
        while start > 0 && self.mask.is_literal(start) {
            start -= 1;
            res.insert(0, self.mask[start].default_char());
        }

        (start, res.into_iter().collect())
    }

    fn adjust_caret(&self, change: &mut Change<'_>) {
        let len = self.mask.len();
        let old = change.control_caret();
        let mut pos = change.caret().min(len);

        if pos != old {
            let forward = pos > old;

            while pos > 0 && pos < len && !self.mask.is_navigable(pos) {
                if forward {
                    pos += 1;
                } else {
                    pos -= 1;
                }
            }

            while pos < len && !self.mask.is_navigable(pos) {
                pos += 1;
            }
        }

        let pos = pos.min(change.new_len());

        if change.anchor() == change.caret() {
            change.set_anchor(pos);
        }

        change.set_caret(pos);
    }
}

impl From<Mask> for MaskFilter {
    fn from(mask: Mask) -> Self {
        MaskFilter::new(mask)
    }
}
