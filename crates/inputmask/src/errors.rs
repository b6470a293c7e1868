//! # Error Types
//!
//! ## Overview
//!
//! This module contains the errors returned while building a [Mask](crate::mask::Mask).
//!
//! Rejecting an edit is not an error: [MaskFilter::filter](crate::filter::MaskFilter::filter)
//! returns `None` for that, and the field is left as it was.

/// Errors returned while building or parsing a mask.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MaskError {
    /// A slot does not accept its own default character, so resetting it would produce text
    /// that the mask itself would refuse.
    #[error("Slot {index} does not accept its default character {default:?}")]
    DefaultNotAccepted {
        /// Position of the offending slot.
        index: usize,

        /// The default character that the slot rejects.
        default: char,
    },

    /// Failure to interpret a mask pattern string.
    #[error("Invalid mask pattern: {0:?}")]
    InvalidPattern(String),

    /// A pattern used a repeat count that is zero, or above
    /// [MAX_REPEAT](crate::pattern::MAX_REPEAT).
    #[error("Invalid repeat count in mask pattern: {0:?}")]
    InvalidRepeat(String),
}

/// Common result type for mask construction.
pub type MaskResult<V> = Result<V, MaskError>;
