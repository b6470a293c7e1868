//! # Mask slots
//!
//! ## Overview
//!
//! A [Slot] describes a single position of a mask: which characters may be typed there, how
//! they get rewritten, what the position holds when it's empty, and whether the caret can
//! rest in front of it.
//!
//! ## Example
//!
//! ```
//! use inputmask::slot::Slot;
//!
//! let slot = Slot::upper_letter();
//! assert!(slot.accepts('b'));
//! assert_eq!(slot.transform('b'), 'B');
//! assert_eq!(slot.default_char(), 'A');
//!
//! let sep = Slot::literal('-');
//! assert!(sep.accepts('-'));
//! assert!(!sep.is_navigable());
//! ```
use std::fmt;
use std::sync::Arc;

/// Shared predicate used by [SlotKind::Custom] to accept characters.
pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Shared mapping used by [SlotKind::Custom] to rewrite accepted characters.
pub type CharTransform = Arc<dyn Fn(char) -> char + Send + Sync>;

/// Map a character to its uppercase form, when that form is a single character.
pub(crate) fn single_upper(c: char) -> char {
    let mut upper = c.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Map a character to its lowercase form, when that form is a single character.
pub(crate) fn single_lower(c: char) -> char {
    let mut lower = c.to_lowercase();

    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Acceptance and transformation rules supplied by the mask author.
#[derive(Clone)]
pub struct CustomRule {
    accepts: CharPredicate,
    transform: Option<CharTransform>,
}

impl CustomRule {
    /// Create a rule that accepts characters matching `accepts` and keeps them as typed.
    pub fn new<P>(accepts: P) -> Self
    where
        P: Fn(char) -> bool + Send + Sync + 'static,
    {
        CustomRule { accepts: Arc::new(accepts), transform: None }
    }

    /// Rewrite accepted characters with `transform`.
    pub fn transform<T>(mut self, transform: T) -> Self
    where
        T: Fn(char) -> char + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    fn accepts(&self, c: char) -> bool {
        (self.accepts)(c)
    }

    fn apply(&self, c: char) -> char {
        match &self.transform {
            Some(f) => f(c),
            None => c,
        }
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("transform", &self.transform.is_some())
            .finish_non_exhaustive()
    }
}

impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        let transform = match (&self.transform, &other.transform) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        Arc::ptr_eq(&self.accepts, &other.accepts) && transform
    }
}

/// The behaviour of a [Slot].
#[derive(Clone, Debug, PartialEq)]
pub enum SlotKind {
    /// A fixed character that can't be edited or navigated onto.
    Literal(char),

    /// An ASCII digit.
    Digit,

    /// Any alphabetic character.
    Letter,

    /// Any alphabetic character, stored in uppercase.
    UpperLetter,

    /// Any alphabetic character, stored in lowercase.
    LowerLetter,

    /// Any alphanumeric character.
    LetterOrDigit,

    /// A hexadecimal digit, stored in uppercase.
    Hex,

    /// Any character at all.
    Any,

    /// Author-supplied rules.
    Custom(CustomRule),
}

impl SlotKind {
    /// The default character used for this kind when the mask author doesn't pick one.
    ///
    /// [SlotKind::Custom] has no built-in default, and returns `None`.
    pub fn builtin_default(&self) -> Option<char> {
        let c = match self {
            SlotKind::Literal(c) => *c,
            SlotKind::Digit => '0',
            SlotKind::Letter => 'a',
            SlotKind::UpperLetter => 'A',
            SlotKind::LowerLetter => 'a',
            SlotKind::LetterOrDigit => 'a',
            SlotKind::Hex => '0',
            SlotKind::Any => ' ',
            SlotKind::Custom(_) => return None,
        };

        Some(c)
    }
}

/// A single position within a [Mask](crate::mask::Mask).
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    kind: SlotKind,
    default: char,
}

impl Slot {
    fn builtin(kind: SlotKind, default: char) -> Self {
        Slot { kind, default }
    }

    /// A fixed character.
    pub fn literal(c: char) -> Self {
        Slot::builtin(SlotKind::Literal(c), c)
    }

    /// An ASCII digit, defaulting to `'0'`.
    pub fn digit() -> Self {
        Slot::builtin(SlotKind::Digit, '0')
    }

    /// A letter, defaulting to `'a'`.
    pub fn letter() -> Self {
        Slot::builtin(SlotKind::Letter, 'a')
    }

    /// A letter converted to uppercase, defaulting to `'A'`.
    pub fn upper_letter() -> Self {
        Slot::builtin(SlotKind::UpperLetter, 'A')
    }

    /// A letter converted to lowercase, defaulting to `'a'`.
    pub fn lower_letter() -> Self {
        Slot::builtin(SlotKind::LowerLetter, 'a')
    }

    /// A letter or digit, defaulting to `'a'`.
    pub fn letter_or_digit() -> Self {
        Slot::builtin(SlotKind::LetterOrDigit, 'a')
    }

    /// A hexadecimal digit converted to uppercase, defaulting to `'0'`.
    pub fn hex() -> Self {
        Slot::builtin(SlotKind::Hex, '0')
    }

    /// Any character, defaulting to `' '`.
    pub fn any() -> Self {
        Slot::builtin(SlotKind::Any, ' ')
    }

    /// A slot governed by a [CustomRule].
    ///
    /// The rule should accept `default`, so that clearing the slot leaves valid text behind;
    /// [MaskBuilder::try_build](crate::builder::MaskBuilder::try_build) checks this.
    pub fn custom(rule: CustomRule, default: char) -> Self {
        Slot { kind: SlotKind::Custom(rule), default }
    }

    /// Replace the default character of this slot.
    ///
    /// Literal slots always default to their own character, and are returned unchanged.
    pub fn with_default(mut self, default: char) -> Self {
        if !self.is_literal() {
            self.default = default;
        }

        self
    }

    /// The behaviour of this slot.
    pub fn kind(&self) -> &SlotKind {
        &self.kind
    }

    /// Whether `c` may be placed in this slot.
    pub fn accepts(&self, c: char) -> bool {
        match &self.kind {
            SlotKind::Literal(l) => *l == c,
            SlotKind::Digit => c.is_ascii_digit(),
            SlotKind::Letter | SlotKind::UpperLetter | SlotKind::LowerLetter => c.is_alphabetic(),
            SlotKind::LetterOrDigit => c.is_alphanumeric(),
            SlotKind::Hex => c.is_ascii_hexdigit(),
            SlotKind::Any => true,
            SlotKind::Custom(rule) => rule.accepts(c),
        }
    }

    /// The character stored when `c` is typed into this slot.
    ///
    /// Only meaningful when [Slot::accepts] returned `true` for `c`.
    pub fn transform(&self, c: char) -> char {
        match &self.kind {
            SlotKind::Literal(l) => *l,
            SlotKind::UpperLetter | SlotKind::Hex => single_upper(c),
            SlotKind::LowerLetter => single_lower(c),
            SlotKind::Digit | SlotKind::Letter | SlotKind::LetterOrDigit | SlotKind::Any => c,
            SlotKind::Custom(rule) => rule.apply(c),
        }
    }

    /// The character this slot holds when it's empty.
    pub fn default_char(&self) -> char {
        self.default
    }

    /// Whether the caret may rest in front of this slot.
    pub fn is_navigable(&self) -> bool {
        !self.is_literal()
    }

    /// Whether this is a fixed, non-editable slot.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, SlotKind::Literal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtins() -> Vec<Slot> {
        vec![
            Slot::digit(),
            Slot::letter(),
            Slot::upper_letter(),
            Slot::lower_letter(),
            Slot::letter_or_digit(),
            Slot::hex(),
            Slot::any(),
            Slot::literal('-'),
        ]
    }

    #[test]
    fn test_builtin_defaults_are_stable() {
        for slot in builtins() {
            let d = slot.default_char();

            assert!(slot.accepts(d), "{:?} rejects its default", slot);
            assert_eq!(slot.transform(d), d, "{:?} rewrites its default", slot);
            assert_eq!(slot.kind().builtin_default(), Some(d));
        }
    }

    #[test]
    fn test_navigable() {
        for slot in builtins() {
            assert_eq!(slot.is_navigable(), !matches!(slot.kind(), SlotKind::Literal(_)));
        }

        let rule = CustomRule::new(|c| c == 'x');
        assert!(Slot::custom(rule, 'x').is_navigable());
    }

    #[test]
    fn test_literal() {
        let slot = Slot::literal('/');

        assert!(slot.accepts('/'));
        assert!(!slot.accepts('\\'));
        assert_eq!(slot.transform('/'), '/');
        assert_eq!(slot.default_char(), '/');

        // Literals can't be given another default.
        let slot = slot.with_default('x');
        assert_eq!(slot.default_char(), '/');
    }

    #[test]
    fn test_digit() {
        let slot = Slot::digit();

        for c in '0'..='9' {
            assert!(slot.accepts(c));
            assert_eq!(slot.transform(c), c);
        }

        assert!(!slot.accepts('a'));
        assert!(!slot.accepts(' '));
        assert!(!slot.accepts('٣'));
    }

    #[test]
    fn test_letters() {
        let letter = Slot::letter();
        let upper = Slot::upper_letter();
        let lower = Slot::lower_letter();

        assert!(letter.accepts('é'));
        assert_eq!(letter.transform('Q'), 'Q');
        assert!(!letter.accepts('4'));

        assert_eq!(upper.transform('b'), 'B');
        assert_eq!(upper.transform('B'), 'B');
        assert_eq!(upper.transform('é'), 'É');
        assert!(!upper.accepts('+'));

        assert_eq!(lower.transform('Z'), 'z');
        assert_eq!(lower.transform('z'), 'z');
        assert!(!lower.accepts('*'));
    }

    #[test]
    fn test_multi_char_case_mapping() {
        // 'ß' uppercases to "SS", which doesn't fit in one slot.
        assert_eq!(Slot::upper_letter().transform('ß'), 'ß');
        assert_eq!(single_lower('İ'), 'İ');
    }

    #[test]
    fn test_letter_or_digit() {
        let slot = Slot::letter_or_digit();

        assert!(slot.accepts('k'));
        assert!(slot.accepts('K'));
        assert!(slot.accepts('7'));
        assert!(!slot.accepts('+'));
        assert_eq!(slot.transform('K'), 'K');
    }

    #[test]
    fn test_hex() {
        let slot = Slot::hex();

        for c in "0123456789abcdefABCDEF".chars() {
            assert!(slot.accepts(c));
        }

        assert_eq!(slot.transform('c'), 'C');
        assert_eq!(slot.transform('9'), '9');
        assert!(!slot.accepts('g'));
        assert!(!slot.accepts('G'));
    }

    #[test]
    fn test_any() {
        let slot = Slot::any();

        for c in ['+', ' ', '=', 'z', '3', '\u{1F600}'] {
            assert!(slot.accepts(c));
            assert_eq!(slot.transform(c), c);
        }
    }

    #[test]
    fn test_custom() {
        let rule = CustomRule::new(|c| matches!(c, '-' | '+' | 'M' | 'P'))
            .transform(|c| if c == '+' || c == 'P' { 'P' } else { 'M' });
        let slot = Slot::custom(rule, 'M');

        assert!(slot.accepts('+'));
        assert!(!slot.accepts('0'));
        assert_eq!(slot.transform('+'), 'P');
        assert_eq!(slot.transform('-'), 'M');
        assert_eq!(slot.default_char(), 'M');

        let plain = Slot::custom(CustomRule::new(|c| c == 'x' || c == 'y'), 'x');
        assert_eq!(plain.transform('y'), 'y');
    }

    #[test]
    fn test_with_default() {
        let slot = Slot::digit().with_default('6');

        assert_eq!(slot.default_char(), '6');
        assert_eq!(slot.kind(), &SlotKind::Digit);
        assert_ne!(slot, Slot::digit());
    }

    #[test]
    fn test_custom_eq() {
        let rule = CustomRule::new(|c| c == 'x');
        let a = Slot::custom(rule.clone(), 'x');
        let b = Slot::custom(rule, 'x');
        let c = Slot::custom(CustomRule::new(|c| c == 'x'), 'x');

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
