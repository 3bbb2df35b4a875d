//! Error types for EditParser.

use thiserror::Error;

use crate::time::Base;

/// Main error type for EditParser operations.
#[derive(Error, Debug)]
pub enum EditParserError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Timecode of invalid format, expecting [-]HH:MM:SS:FF, got '{0}'")]
    InvalidTimecodeFormat(String),

    #[error("Timecode out of range: {0}")]
    TimecodeOutOfRange(String),

    #[error("Invalid base: {0} (frame rate must be positive)")]
    InvalidBase(u32),

    #[error("Base mismatch: {left} vs {right}")]
    BaseMismatch { left: Base, right: Base },

    #[error("Invalid event line {line}: '{text}'")]
    InvalidEventLine { line: usize, text: String },

    #[error("Mismatched field count: expected {expected}, found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    #[error("Invalid value for field {field}: '{value}'")]
    InvalidField { field: String, value: String },

    #[error("Global out {global_out} precedes global in {global_in}")]
    GlobalRangeInvalid { global_in: String, global_out: String },
}

/// Result type alias for EditParser operations.
pub type Result<T> = std::result::Result<T, EditParserError>;
