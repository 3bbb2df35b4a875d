//! EditParser EDL - Edit list data model
//!
//! Implements the structure every format parser produces:
//! - Edit lists carrying title, source path and start timecode
//! - Edits mapping a source range onto the program timeline
//! - Typed, format-specific edit attributes

pub mod attribute;
pub mod edit;
pub mod edl;

pub use attribute::{AttrValue, Attributes};
pub use edit::{Edit, DEFAULT_EDIT_NAME, DEFAULT_EDIT_NUMBER};
pub use edl::{EditList, DEFAULT_START_TIMECODE};
