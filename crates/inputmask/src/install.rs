//! # Default values
//!
//! ## Overview
//!
//! A masked field starts out empty, which no mask with slots allows. The installer fills it
//! with [Mask::default_text](crate::mask::Mask::default_text), bypassing correction, and
//! places the caret in front of the first editable slot.
//!
//! Fields can receive their default right away, or wait until the user first focuses or
//! clicks them, so that untouched fields stay blank. See [DefaultPolicy].
//!
//! The installer only talks to the field through the [TextInput] trait.
use crate::change::ChangeOrigin;
use crate::filter::MaskFilter;

/// Whether a field currently has focus, and whether a pointer is held down on it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct FocusState {
    /// The field has keyboard focus.
    pub focused: bool,

    /// A pointer button is held down over the field.
    pub pressed: bool,
}

/// A change in a field's [FocusState].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FocusSignal {
    /// The field gained (`true`) or lost (`false`) focus.
    Focused(bool),

    /// A pointer was pressed (`true`) or released (`false`) over the field.
    Pressed(bool),
}

/// When a field receives its default text.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DefaultPolicy {
    /// As soon as the filter is attached.
    #[default]
    Immediate,

    /// The first time the field is focused without a pointer held down, or a pointer is
    /// released over the focused field.
    OnFocus,
}

/// The operations a text control must offer to receive default values.
pub trait TextInput {
    /// The control's current text.
    fn text(&self) -> String;

    /// The caret position, in characters.
    fn caret(&self) -> usize;

    /// The anchor position, in characters.
    fn anchor(&self) -> usize;

    /// Current focus and pointer state.
    fn focus_state(&self) -> FocusState;

    /// Replace the control's entire text, running it through the control's filter with the
    /// given origin. Returns `false` if the change was rejected.
    fn replace_text(&mut self, text: &str, origin: ChangeOrigin) -> bool;

    /// Set the selection, running it through the control's filter with the given origin.
    /// Passing the same value twice collapses it to a caret.
    fn select_range(&mut self, anchor: usize, caret: usize, origin: ChangeOrigin);
}

impl MaskFilter {
    /// Fill `input` with the mask's default text, and move its caret to the first editable
    /// slot, or to 0 when no slot is editable.
    ///
    /// Returns `false` if the control refused the new text, in which case its selection is
    /// left alone.
    pub fn install_default<T: TextInput>(&self, input: &mut T) -> bool {
        let text = self.mask().default_text();

        tracing::trace!(
            old = input.text().as_str(),
            caret = input.caret(),
            anchor = input.anchor(),
            new = text.as_str(),
            "installing default value"
        );

        if !input.replace_text(&text, ChangeOrigin::DefaultValue) {
            tracing::debug!(text = text.as_str(), "control refused default value");
            return false;
        }

        let pos = self.mask().first_navigable();
        input.select_range(pos, pos, ChangeOrigin::DefaultValue);

        return true;
    }

    /// Start tracking `input` under `policy`, installing its default text right away when
    /// the policy asks for it.
    pub fn install<T: TextInput>(&self, input: &mut T, policy: DefaultPolicy) -> DefaultInstaller {
        let mut installer = DefaultInstaller::new(policy);
        installer.start(self, input);
        installer
    }
}

/// Tracks whether a field has received its default text yet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DefaultInstaller {
    policy: DefaultPolicy,
    installed: bool,
}

impl DefaultInstaller {
    /// Create an installer that hasn't installed anything yet.
    pub fn new(policy: DefaultPolicy) -> Self {
        DefaultInstaller { policy, installed: false }
    }

    /// The policy this installer follows.
    pub fn policy(&self) -> DefaultPolicy {
        self.policy
    }

    /// Whether the default text has yet to be installed.
    pub fn is_pending(&self) -> bool {
        !self.installed
    }

    /// Decide whether `signal`, arriving while the field is in `state`, should install the
    /// default. `state` is the field's state after the signal.
    ///
    /// Only ever returns `true` once, and never under [DefaultPolicy::Immediate].
    pub fn signal(&mut self, signal: FocusSignal, state: FocusState) -> bool {
        if self.installed || self.policy != DefaultPolicy::OnFocus {
            return false;
        }

        let install = match signal {
            FocusSignal::Focused(true) => !state.pressed,
            FocusSignal::Pressed(false) => state.focused,
            FocusSignal::Focused(false) | FocusSignal::Pressed(true) => false,
        };

        self.installed = install;

        return install;
    }

    /// Install the default text into `input` if the policy is [DefaultPolicy::Immediate].
    pub fn start<T: TextInput>(&mut self, filter: &MaskFilter, input: &mut T) {
        if self.installed || self.policy != DefaultPolicy::Immediate {
            return;
        }

        self.installed = filter.install_default(input);
    }

    /// Handle a focus or pointer signal for `input`, installing the default text when it's
    /// due. Returns whether anything was installed.
    pub fn notify<T: TextInput>(
        &mut self,
        signal: FocusSignal,
        filter: &MaskFilter,
        input: &mut T,
    ) -> bool {
        if !self.signal(signal, input.focus_state()) {
            return false;
        }

        self.installed = filter.install_default(input);

        return self.installed;
    }
}
