//! # Common imports
//!
//! Everything needed to build masks and attach them to a field.
pub use crate::builder::MaskBuilder;
pub use crate::change::{Change, ChangeOrigin, ChangeShape, ControlState};
pub use crate::errors::{MaskError, MaskResult};
pub use crate::filter::MaskFilter;
pub use crate::install::{DefaultInstaller, DefaultPolicy, FocusSignal, FocusState, TextInput};
pub use crate::mask::Mask;
pub use crate::slot::{CustomRule, Slot, SlotKind};
