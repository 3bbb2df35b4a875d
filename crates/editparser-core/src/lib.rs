//! EditParser Core - Foundation types for edit list parsing
//!
//! This crate provides the types shared by every EditParser crate:
//! - Timecode representation (Base, Timecode)
//! - The error taxonomy and `Result` alias

pub mod error;
pub mod time;

pub use error::{EditParserError, Result};
pub use time::{Base, Timecode};
