use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::MaskedField;

impl MaskedField {
    /// Handle a key press.
    ///
    /// Printable characters are typed over the selection, and Backspace, Delete, Left, Right,
    /// Home and End edit or move the caret as usual, with Shift extending the selection.
    /// Ctrl-A selects everything.
    ///
    /// Returns `false` if the key has no meaning for the field, or the edit was rejected.
    pub fn handle_key(&mut self, ke: KeyEvent) -> bool {
        if ke.kind == KeyEventKind::Release {
            return false;
        }

        let extend = ke.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match ke.code {
            KeyCode::Char('a') if ke.modifiers == KeyModifiers::CONTROL => self.select_all(),
            KeyCode::Char(c) if !ctrl => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(extend),
            KeyCode::Right => self.move_right(extend),
            KeyCode::Home => self.home(extend),
            KeyCode::End => self.end(extend),
            _ => {
                tracing::trace!(code = ?ke.code, "unhandled key");
                false
            },
        }
    }

    /// Handle a terminal event.
    ///
    /// Besides keys, this forwards focus changes and mouse button presses to the field, and
    /// pastes bracketed paste contents.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(ke) => {
                return self.handle_key(*ke);
            },
            Event::FocusGained => {
                return self.focus();
            },
            Event::FocusLost => {
                return self.blur();
            },
            Event::Mouse(me) => match me.kind {
                MouseEventKind::Down(_) => {
                    return self.press();
                },
                MouseEventKind::Up(_) => {
                    return self.release();
                },
                _ => {
                    return false;
                },
            },
            Event::Paste(s) => {
                return self.paste(s);
            },
            Event::Resize(_, _) => {
                return false;
            },
        }
    }
}
