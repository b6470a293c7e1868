//! # inputmask-field
//!
//! ## Overview
//!
//! This crate provides [MaskedField], a single-line text field whose contents are kept in
//! shape by an [inputmask] filter. The field proposes the same changes a typical text control
//! would, such as replacing the selection when typing or removing the previous character on
//! backspace, and applies whatever the filter hands back.
//!
//! Terminal applications can feed [crossterm] events straight into the field with
//! [MaskedField::handle_event].
//!
//! ## Example
//!
//! ```
//! use inputmask::install::DefaultPolicy;
//! use inputmask_field::MaskedField;
//!
//! let mut field = MaskedField::from_pattern("##/##/####", DefaultPolicy::Immediate).unwrap();
//! assert_eq!(field.text(), "00/00/0000");
//!
//! for c in "31122024".chars() {
//!     field.type_char(c);
//! }
//!
//! assert_eq!(field.text(), "31/12/2024");
//! assert_eq!(field.caret(), 10);
//!
//! // Letters don't fit.
//! field.home(false);
//! assert!(!field.type_char('x'));
//! assert_eq!(field.text(), "31/12/2024");
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_return)]

mod field;
mod keys;

pub use self::field::MaskedField;

pub use crossterm;
pub use inputmask;
