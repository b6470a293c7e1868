//! # Proposed changes
//!
//! ## Overview
//!
//! A [Change] describes an edit that a text control wants to make, before it is applied: the
//! range of the current text to replace, the text to put there, and where the caret and
//! anchor should end up. It also carries a [ControlState] snapshot of the control as it is
//! now.
//!
//! [MaskFilter](crate::filter::MaskFilter) receives a change, and either rewrites it or
//! rejects it. The control then applies whatever comes back.
//!
//! All positions are character offsets.
//!
//! ## Example
//!
//! ```
//! use inputmask::change::{ChangeShape, ControlState};
//!
//! let control = ControlState::new("0-A", 0, 0);
//! let change = control.replace_selection("7");
//!
//! assert_eq!(change.shape(), ChangeShape::Insert);
//! assert_eq!(change.range(), 0..0);
//! assert_eq!(change.caret(), 1);
//! assert_eq!(change.new_text(), "70-A");
//! ```
use std::ops::Range;

use crate::util::{char_len, splice};

/// Where a change comes from.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ChangeOrigin {
    /// Typing, pasting, deleting, caret movement, or programmatic text assignment.
    #[default]
    User,

    /// Installation of the mask's default text, which is applied without correction.
    DefaultValue,
}

/// The form of a [Change].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChangeShape {
    /// A non-empty range is replaced by non-empty text.
    Replace,

    /// Text is inserted without removing anything.
    Insert,

    /// A non-empty range is removed.
    Delete,

    /// The text is untouched; only the caret or anchor move.
    Selection,
}

/// The state of a text control before a change is applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlState<'a> {
    /// The control's full text.
    pub text: &'a str,

    /// The caret position.
    pub caret: usize,

    /// The anchor, or the other end of the selection.
    pub anchor: usize,
}

impl<'a> ControlState<'a> {
    /// Create a new snapshot.
    pub fn new(text: &'a str, caret: usize, anchor: usize) -> Self {
        ControlState { text, caret, anchor }
    }

    /// Length of the text, in characters.
    pub fn len(&self) -> usize {
        char_len(self.text)
    }

    /// The selected range, clamped to the text.
    pub fn selection(&self) -> Range<usize> {
        let len = self.len();
        let start = self.caret.min(self.anchor).min(len);
        let end = self.caret.max(self.anchor).min(len);

        start..end
    }

    /// Whether any text is selected.
    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// The change produced by typing or pasting `text` over the current selection.
    pub fn replace_selection(self, text: &str) -> Change<'a> {
        let range = self.selection();
        let caret = range.start + char_len(text);

        Change::new(self, range, text, caret, caret)
    }

    /// The change produced by pressing backspace.
    ///
    /// This removes the selection, or else the character before the caret. Returns `None`
    /// when there's nothing to remove.
    pub fn delete_previous(self) -> Option<Change<'a>> {
        let range = self.selection();

        if !range.is_empty() {
            return Some(self.delete_range(range));
        }

        let caret = range.start;

        if caret == 0 {
            return None;
        }

        return Some(self.delete_range(caret - 1..caret));
    }

    /// The change produced by pressing delete.
    ///
    /// This removes the selection, or else the character after the caret. Returns `None` when
    /// there's nothing to remove.
    pub fn delete_next(self) -> Option<Change<'a>> {
        let range = self.selection();

        if !range.is_empty() {
            return Some(self.delete_range(range));
        }

        let caret = range.start;

        if caret >= self.len() {
            return None;
        }

        return Some(self.delete_range(caret..caret + 1));
    }

    /// The change produced by removing `range`, leaving the caret at its start.
    pub fn delete_range(self, range: Range<usize>) -> Change<'a> {
        let caret = range.start;

        Change::new(self, range, "", caret, caret)
    }

    /// The change produced by replacing the entire text, as done by a programmatic assignment.
    pub fn replace_all(self, text: &str) -> Change<'a> {
        let caret = char_len(text);

        Change::new(self, 0..self.len(), text, caret, caret)
    }

    /// The change produced by moving the caret to `caret` and the anchor to `anchor`.
    pub fn select(self, anchor: usize, caret: usize) -> Change<'a> {
        Change::new(self, 0..0, "", caret, anchor)
    }

    /// The change produced by moving the caret to `caret`.
    ///
    /// When `extend` is `true` the anchor stays where it is, growing or shrinking the
    /// selection; otherwise the selection collapses onto the caret.
    pub fn move_caret(self, caret: usize, extend: bool) -> Change<'a> {
        let anchor = if extend { self.anchor } else { caret };

        self.select(anchor, caret)
    }
}

/// An edit proposed by a text control.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Change<'a> {
    control: ControlState<'a>,
    start: usize,
    end: usize,
    text: String,
    caret: usize,
    anchor: usize,
}

impl<'a> Change<'a> {
    /// Create a change that replaces `range` of the control's text with `text`.
    ///
    /// The range is clamped to the control's text.
    pub fn new<T: Into<String>>(
        control: ControlState<'a>,
        range: Range<usize>,
        text: T,
        caret: usize,
        anchor: usize,
    ) -> Self {
        let mut change = Change {
            control,
            start: 0,
            end: 0,
            text: text.into(),
            caret,
            anchor,
        };

        change.set_range(range);
        change
    }

    /// The control's state before this change.
    pub fn control(&self) -> ControlState<'a> {
        self.control
    }

    /// The control's text before this change.
    pub fn control_text(&self) -> &'a str {
        self.control.text
    }

    /// The control's caret before this change.
    pub fn control_caret(&self) -> usize {
        self.control.caret
    }

    /// The control's anchor before this change.
    pub fn control_anchor(&self) -> usize {
        self.control.anchor
    }

    /// The range of the control's text being replaced.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Start of the replaced range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the replaced range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Replace a different range, clamped to the control's text.
    ///
    /// This doesn't move the caret or the anchor.
    pub fn set_range(&mut self, range: Range<usize>) {
        let len = self.control.len();

        self.start = range.start.min(len);
        self.end = range.end.min(len).max(self.start);
    }

    /// The text inserted in place of the range.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insert different text.
    ///
    /// This doesn't move the caret or the anchor.
    pub fn set_text<T: Into<String>>(&mut self, text: T) {
        self.text = text.into();
    }

    /// The caret position once this change is applied.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret.
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret;
    }

    /// The anchor position once this change is applied.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Move the anchor.
    pub fn set_anchor(&mut self, anchor: usize) {
        self.anchor = anchor;
    }

    /// Classify this change.
    pub fn shape(&self) -> ChangeShape {
        match (self.start < self.end, self.text.is_empty()) {
            (true, false) => ChangeShape::Replace,
            (false, false) => ChangeShape::Insert,
            (true, true) => ChangeShape::Delete,
            (false, true) => ChangeShape::Selection,
        }
    }

    /// Whether this change modifies the text.
    pub fn is_content_change(&self) -> bool {
        self.shape() != ChangeShape::Selection
    }

    /// The control's text once this change is applied.
    pub fn new_text(&self) -> String {
        splice(self.control.text, self.start, self.end, &self.text)
    }

    /// Length of the control's text once this change is applied, in characters.
    pub fn new_len(&self) -> usize {
        self.control.len() - (self.end - self.start) + char_len(&self.text)
    }
}
