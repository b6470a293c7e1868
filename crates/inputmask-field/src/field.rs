use std::ops::Range;

use ropey::Rope;

use inputmask::prelude::*;

/// A single-line text field that only ever holds text fitting its [Mask].
#[derive(Clone, Debug)]
pub struct MaskedField {
    rope: Rope,
    caret: usize,
    anchor: usize,
    state: FocusState,
    filter: MaskFilter,
    installer: DefaultInstaller,
}

impl MaskedField {
    /// Create a field for `mask`.
    ///
    /// Under [DefaultPolicy::Immediate] the field starts out holding the mask's default text;
    /// otherwise it stays empty until first focused.
    pub fn new(mask: Mask, policy: DefaultPolicy) -> Self {
        let filter = MaskFilter::new(mask);

        let mut field = MaskedField {
            rope: Rope::new(),
            caret: 0,
            anchor: 0,
            state: FocusState::default(),
            filter: filter.clone(),
            installer: DefaultInstaller::new(policy),
        };

        field.installer = filter.install(&mut field, policy);
        field
    }

    /// Create a field whose mask is described by a pattern string.
    pub fn from_pattern(pattern: &str, policy: DefaultPolicy) -> MaskResult<Self> {
        let mask = pattern.parse()?;

        Ok(MaskedField::new(mask, policy))
    }

    /// The mask this field enforces.
    pub fn mask(&self) -> &Mask {
        self.filter.mask()
    }

    /// The field's current text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length of the field's text, in characters.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// The caret position.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The anchor position.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// The selected range of characters.
    pub fn selection(&self) -> Range<usize> {
        let len = self.len();

        self.caret.min(self.anchor).min(len)..self.caret.max(self.anchor).min(len)
    }

    /// Whether the field has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Whether the field has received its default text.
    pub fn is_initialized(&self) -> bool {
        !self.installer.is_pending()
    }

    /// Whether every slot of the mask holds an acceptable character.
    pub fn is_complete(&self) -> bool {
        self.mask().matches(&self.text())
    }

    /// Build a change from the field's current state, run it through the filter, and apply
    /// the result. Returns `false` if there was no change to make, or it was rejected.
    fn commit<F>(&mut self, origin: ChangeOrigin, propose: F) -> bool
    where
        F: for<'a> FnOnce(ControlState<'a>) -> Option<Change<'a>>,
    {
        let text = self.rope.to_string();
        let control = ControlState::new(&text, self.caret, self.anchor);

        let Some(change) = propose(control) else {
            return false;
        };

        let Some(change) = self.filter.filter(change, origin) else {
            tracing::debug!(origin = ?origin, "field change rejected");
            return false;
        };

        if change.is_content_change() {
            let range = change.range();

            self.rope.remove(range.clone());
            self.rope.insert(range.start, change.text());
        }

        self.caret = change.caret();
        self.anchor = change.anchor();

        return true;
    }

    /// Type or paste `text` over the selection.
    pub fn type_text(&mut self, text: &str) -> bool {
        self.commit(ChangeOrigin::User, |control| Some(control.replace_selection(text)))
    }

    /// Type a single character over the selection.
    pub fn type_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];

        self.type_text(c.encode_utf8(&mut buf))
    }

    /// Paste `text` over the selection. The whole of `text` is accepted, or none of it.
    pub fn paste(&mut self, text: &str) -> bool {
        self.type_text(text)
    }

    /// Clear the selection, or the slot before the caret.
    pub fn backspace(&mut self) -> bool {
        self.commit(ChangeOrigin::User, |control| control.delete_previous())
    }

    /// Clear the selection, or the slot after the caret.
    pub fn delete(&mut self) -> bool {
        self.commit(ChangeOrigin::User, |control| control.delete_next())
    }

    fn move_caret(&mut self, caret: usize, extend: bool) -> bool {
        self.commit(ChangeOrigin::User, |control| Some(control.move_caret(caret, extend)))
    }

    /// Move the caret one character left, or to the start of the selection.
    pub fn move_left(&mut self, extend: bool) -> bool {
        let sel = self.selection();

        if !extend && !sel.is_empty() {
            return self.move_caret(sel.start, false);
        }

        self.move_caret(self.caret.saturating_sub(1), extend)
    }

    /// Move the caret one character right, or to the end of the selection.
    pub fn move_right(&mut self, extend: bool) -> bool {
        let sel = self.selection();

        if !extend && !sel.is_empty() {
            return self.move_caret(sel.end, false);
        }

        self.move_caret(self.caret + 1, extend)
    }

    /// Move the caret to the first editable slot.
    pub fn home(&mut self, extend: bool) -> bool {
        self.move_caret(0, extend)
    }

    /// Move the caret past the last slot.
    pub fn end(&mut self, extend: bool) -> bool {
        let len = self.len();

        self.move_caret(len, extend)
    }

    /// Select the characters between `anchor` and `caret`.
    pub fn select_range(&mut self, anchor: usize, caret: usize) -> bool {
        self.commit(ChangeOrigin::User, |control| Some(control.select(anchor, caret)))
    }

    /// Select the whole text.
    pub fn select_all(&mut self) -> bool {
        let len = self.len();

        self.select_range(0, len)
    }

    /// Replace the whole text, as long as it fits the mask.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.commit(ChangeOrigin::User, |control| Some(control.replace_all(text)))
    }

    fn notify(&mut self, signal: FocusSignal) -> bool {
        tracing::trace!(signal = ?signal, "field focus signal");

        let filter = self.filter.clone();
        let mut installer = std::mem::take(&mut self.installer);
        let installed = installer.notify(signal, &filter, self);

        self.installer = installer;

        return installed;
    }

    /// Give the field keyboard focus. Returns whether this installed the default text.
    pub fn focus(&mut self) -> bool {
        self.state.focused = true;
        self.notify(FocusSignal::Focused(true))
    }

    /// Take keyboard focus away from the field.
    pub fn blur(&mut self) -> bool {
        self.state.focused = false;
        self.notify(FocusSignal::Focused(false))
    }

    /// Press a pointer button over the field.
    pub fn press(&mut self) -> bool {
        self.state.pressed = true;
        self.notify(FocusSignal::Pressed(true))
    }

    /// Release a pointer button over the field. Returns whether this installed the default
    /// text.
    pub fn release(&mut self) -> bool {
        self.state.pressed = false;
        self.notify(FocusSignal::Pressed(false))
    }
}

impl TextInput for MaskedField {
    fn text(&self) -> String {
        MaskedField::text(self)
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn anchor(&self) -> usize {
        self.anchor
    }

    fn focus_state(&self) -> FocusState {
        self.state
    }

    fn replace_text(&mut self, text: &str, origin: ChangeOrigin) -> bool {
        self.commit(origin, |control| Some(control.replace_all(text)))
    }

    fn select_range(&mut self, anchor: usize, caret: usize, origin: ChangeOrigin) {
        self.commit(origin, |control| Some(control.select(anchor, caret)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    const DEFAULT_TEXT: &str = "\\0,0.a$a!aAU ^_/";
    const VALID_TEXT: &str = "\\4,B.f$1!fTU*^M/";

    fn mkmask() -> Mask {
        let sign = CustomRule::new(|c| matches!(c, '-' | '+' | 'M' | 'P' | '_')).transform(|c| {
            match c {
                '+' | 'P' => 'P',
                '-' | 'M' => 'M',
                c => c,
            }
        });

        MaskBuilder::new()
            .literal("\\")
            .digit(1)
            .literal(",")
            .hex(1)
            .literal(".")
            .letter(1)
            .literal("$")
            .letter_or_digit(1)
            .literal("!")
            .lower_letter(1)
            .upper_letter(1)
            .literal("U")
            .any(1)
            .literal("^")
            .custom(1, sign, '_')
            .literal("/")
            .build()
    }

    fn mkfield() -> MaskedField {
        MaskedField::new(mkmask(), DefaultPolicy::Immediate)
    }

    #[test]
    fn test_new_immediate() {
        let field = mkfield();

        assert_eq!(field.text(), DEFAULT_TEXT);
        assert_eq!(field.caret(), 1);
        assert_eq!(field.anchor(), 1);
        assert!(field.is_initialized());
        assert!(field.is_complete());
    }

    #[test]
    fn test_new_on_focus() {
        let mut field = MaskedField::new(mkmask(), DefaultPolicy::OnFocus);

        assert_eq!(field.text(), "");
        assert!(!field.is_initialized());
        assert!(!field.type_char('4'));

        assert!(field.focus());
        assert!(field.is_focused());
        assert_eq!(field.text(), DEFAULT_TEXT);
        assert_eq!(field.caret(), 1);

        assert!(field.type_char('4'));
        assert!(!field.blur());
        assert!(!field.focus());
        assert_eq!(field.text(), "\\4,0.a$a!aAU ^_/");
    }

    #[test]
    fn test_click_to_focus() {
        let mut field = MaskedField::new(mkmask(), DefaultPolicy::OnFocus);

        assert!(!field.press());
        assert!(!field.focus());
        assert_eq!(field.text(), "");

        assert!(field.release());
        assert_eq!(field.text(), DEFAULT_TEXT);
        assert!(!field.press());
        assert!(!field.release());
    }

    #[test]
    fn test_literals_only() {
        let field = MaskedField::from_pattern("---", DefaultPolicy::Immediate).unwrap();
        assert_eq!(field.text(), "---");
        assert_eq!(field.caret(), 0);
        assert_eq!(field.anchor(), 0);

        let mut field = MaskedField::from_pattern("(-)", DefaultPolicy::OnFocus).unwrap();
        assert!(field.focus());
        assert_eq!(field.text(), "(-)");
        assert_eq!(field.caret(), 0);
        assert_eq!(field.anchor(), 0);

        // Moving the caret still skips to the end, since nothing is editable.
        assert!(field.move_right(false));
        assert_eq!(field.caret(), 3);
    }

    #[test]
    fn test_from_pattern() {
        let field = MaskedField::from_pattern("+33 6 ## ## ## ##", DefaultPolicy::Immediate);
        let field = field.unwrap();
        assert_eq!(field.text(), "+33 6 00 00 00 00");
        assert_eq!(field.caret(), 6);

        let res = MaskedField::from_pattern("#{0}", DefaultPolicy::Immediate);
        assert!(matches!(res, Err(MaskError::InvalidRepeat(_))));
    }

    #[test]
    fn test_typing() {
        let mut field = mkfield();
        let carets = [3, 5, 7, 9, 10, 12, 14, 16];

        for (c, caret) in "4Bf1fT*M".chars().zip(carets) {
            assert!(field.type_char(c), "{c:?}");
            assert_eq!(field.caret(), caret);
        }

        assert_eq!(field.text(), VALID_TEXT);

        // Nothing more fits.
        assert!(field.type_char('7'));
        assert_eq!(field.text(), VALID_TEXT);
        assert_eq!(field.caret(), 16);
    }

    #[test]
    fn test_typing_transforms() {
        let mut field = mkfield();

        field.select_range(3, 3);
        assert!(field.type_char('c'));
        field.select_range(9, 9);
        assert!(field.type_char('Q'));
        assert!(field.type_char('q'));
        field.select_range(14, 14);
        assert!(field.type_char('+'));

        assert_eq!(field.text(), "\\0,C.a$a!qQU ^P/");
    }

    #[test]
    fn test_rejected_keys() {
        let mut field = mkfield();

        for c in ['a', '+', ' ', '\\'] {
            assert!(!field.type_char(c));
            assert_eq!(field.text(), DEFAULT_TEXT);
            assert_eq!(field.caret(), 1);
        }
    }

    #[test]
    fn test_backspace() {
        let mut field = mkfield();
        assert!(field.set_text(VALID_TEXT));
        assert_eq!(field.caret(), 16);

        for caret in [14, 12, 10, 9, 7, 5, 3, 1] {
            assert!(field.backspace());
            assert_eq!(field.caret(), caret);
            assert_eq!(field.len(), 16);
        }

        assert_eq!(field.text(), DEFAULT_TEXT);
    }

    #[test]
    fn test_delete() {
        let mut field = mkfield();
        assert!(field.set_text(VALID_TEXT));

        field.select_range(3, 3);
        assert!(field.delete());
        assert_eq!(field.text(), "\\4,0.f$1!fTU*^M/");
        assert_eq!(field.caret(), 3);

        assert!(field.end(false));
        assert!(!field.delete());
    }

    #[test]
    fn test_caret_movement() {
        let mut field = mkfield();
        let carets = [3, 5, 7, 9, 10, 12, 14, 16];

        for caret in carets {
            assert!(field.move_right(false));
            assert_eq!(field.caret(), caret);
        }

        for caret in carets.iter().rev().skip(1).chain([1, 1].iter()) {
            assert!(field.move_left(false));
            assert_eq!(field.caret(), *caret);
        }

        assert!(field.end(false));
        assert_eq!(field.caret(), 16);
        assert!(field.home(false));
        assert_eq!(field.caret(), 1);
    }

    #[test]
    fn test_selection() {
        let mut field = mkfield();
        assert!(field.set_text(VALID_TEXT));
        assert!(field.home(false));

        assert!(field.move_right(true));
        assert!(field.move_right(true));
        assert_eq!(field.selection(), 1..5);

        // Typing over the selection resets what isn't typed over.
        assert!(field.type_char('9'));
        assert_eq!(field.text(), "\\9,0.f$1!fTU*^M/");
        assert_eq!(field.caret(), 1);
        assert_eq!(field.selection(), 1..1);

        assert!(field.move_right(true));
        assert_eq!(field.selection(), 1..3);
        assert!(field.move_left(false));
        assert_eq!(field.caret(), 1);
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut field = mkfield();
        assert!(field.set_text(VALID_TEXT));

        assert!(field.select_all());
        assert_eq!(field.selection(), 0..16);

        assert!(field.backspace());
        assert_eq!(field.text(), DEFAULT_TEXT);
        assert_eq!(field.caret(), 1);
    }

    #[test]
    fn test_paste() {
        let mut field = mkfield();
        assert!(field.set_text(VALID_TEXT));

        field.select_range(3, 10);
        assert!(!field.paste("#.b"));
        assert_eq!(field.text(), VALID_TEXT);

        assert!(field.paste("C.b"));
        assert_eq!(field.text(), "\\4,C.b$a!aTU*^M/");
        assert_eq!(field.caret(), 5);
    }

    #[test]
    fn test_set_text() {
        let mut field = mkfield();

        assert!(!field.set_text("\\4.B.f$1!fTU*^M/"));
        assert_eq!(field.text(), DEFAULT_TEXT);

        assert!(field.set_text(VALID_TEXT));
        assert_eq!(field.text(), VALID_TEXT);

        assert!(field.set_text(DEFAULT_TEXT));
        assert_eq!(field.text(), DEFAULT_TEXT);
    }

    #[test]
    fn test_random_editing() {
        let mut field = mkfield();
        let mut rng = rand::thread_rng();
        let alphabet: Vec<char> = "09afAF+-*/\\,.$!U^_ ".chars().collect();

        for _ in 0..2000 {
            let extend = rng.gen_bool(0.3);

            match rng.gen_range(0..8) {
                0 => {
                    let c = alphabet[rng.gen_range(0..alphabet.len())];
                    field.type_char(c);
                },
                1 => {
                    let s: String =
                        (0..3).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect();
                    field.paste(&s);
                },
                2 => {
                    field.backspace();
                },
                3 => {
                    field.delete();
                },
                4 => {
                    field.move_left(extend);
                },
                5 => {
                    field.move_right(extend);
                },
                6 => {
                    field.home(extend);
                },
                _ => {
                    field.end(extend);
                },
            }

            let caret = field.caret();

            assert!(field.is_complete(), "{:?}", field.text());
            assert!(caret == 16 || field.mask().is_navigable(caret), "caret at {caret}");
        }
    }
}
