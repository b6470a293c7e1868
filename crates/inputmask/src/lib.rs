//! # inputmask
//!
//! ## Overview
//!
//! This crate enforces positional input masks on single-line text fields, such as the fields
//! used for phone numbers, dates, serial keys, or colour codes.
//!
//! A [Mask](mask::Mask) is a fixed sequence of [slots](slot::Slot). Each slot either holds a
//! literal separator, or accepts one character of some class, like a digit or an uppercase
//! letter. The text of a masked field always has exactly one character per slot.
//!
//! Masks are put together with a [MaskBuilder](builder::MaskBuilder), or parsed from a
//! [pattern string](pattern). A [MaskFilter](filter::MaskFilter) then sits between a text
//! control and its buffer, and corrects or rejects every [Change](change::Change) the control
//! proposes, while [install] takes care of giving the field its initial text.
//!
//! The [inputmask-field] crate contains a ready-made field built on top of these pieces.
//!
//! ## Example
//!
//! ```
//! use inputmask::prelude::*;
//!
//! let mask = MaskBuilder::new().digit(2).literal("/").digit(2).build();
//! let filter = MaskFilter::new(mask);
//!
//! let change = ControlState::new("00/00", 1, 1).replace_selection("2/3");
//! let change = filter.filter(change, ChangeOrigin::User).unwrap();
//!
//! assert_eq!(change.new_text(), "02/30");
//! assert_eq!(change.caret(), 4);
//! ```
//!
//! [inputmask-field]: https://docs.rs/inputmask-field/latest/inputmask_field/

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::type_complexity)]

mod util;

pub mod builder;
pub mod change;
pub mod errors;
pub mod filter;
pub mod install;
pub mod mask;
pub mod pattern;
pub mod prelude;
pub mod slot;
