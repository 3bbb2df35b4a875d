//! Timecode representation for frame-accurate edit lists
//!
//! A timecode is stored as a signed frame count at a fixed integer base.
//! The `HH:MM:SS:FF` form is derived on display and never stored, so all
//! arithmetic is exact integer math.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{EditParserError, Result};

/// 2^63: frame counts converted from `f64` must lie in `-LIMIT..LIMIT`.
const FRAME_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Nominal frame rate a timecode counts in (frames per timecode second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Base(u32);

impl Base {
    /// Create a base, rejecting zero.
    pub fn new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(EditParserError::InvalidBase(fps));
        }
        Ok(Self(fps))
    }

    /// Frames per timecode second.
    #[inline]
    pub const fn fps(self) -> u32 {
        self.0
    }

    /// Duration of a single frame in seconds.
    #[inline]
    pub fn frame_duration(self) -> Rational64 {
        Rational64::new(1, i64::from(self.0))
    }

    /// Common bases
    pub const FPS_24: Self = Self(24);
    pub const FPS_25: Self = Self(25);
    pub const FPS_30: Self = Self(30);
    pub const FPS_50: Self = Self(50);
    pub const FPS_60: Self = Self(60);
}

impl Default for Base {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl TryFrom<u32> for Base {
    type Error = EditParserError;

    fn try_from(fps: u32) -> Result<Self> {
        Self::new(fps)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

/// A position or duration expressed as a signed frame count at a base.
///
/// Two timecodes are equal only when both base and frame count match, and
/// timecodes of different bases are unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timecode {
    frames: i64,
    base: Base,
}

impl Timecode {
    /// Create a timecode from a raw frame count.
    #[inline]
    pub const fn from_frames(frames: i64, base: Base) -> Self {
        Self { frames, base }
    }

    /// Zero frames at the given base.
    #[inline]
    pub const fn zero(base: Base) -> Self {
        Self::from_frames(0, base)
    }

    /// Parse a `[-]HH:MM:SS:FF` string.
    ///
    /// Each field must be all digits. Fields are not range-checked, so
    /// `00:00:00:30` at base 24 is simply 30 frames.
    pub fn from_string(text: &str, base: Base) -> Result<Self> {
        let invalid = || EditParserError::InvalidTimecodeFormat(text.to_string());

        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, text),
        };

        let fields: Vec<&str> = body.split(':').collect();
        if fields.len() != 4 {
            return Err(invalid());
        }

        let mut values = [0i64; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = field.parse().map_err(|_| invalid())?;
        }
        let [hours, minutes, seconds, frames] = values;

        let total = hours
            .checked_mul(60)
            .and_then(|v| v.checked_add(minutes))
            .and_then(|v| v.checked_mul(60))
            .and_then(|v| v.checked_add(seconds))
            .and_then(|v| v.checked_mul(i64::from(base.fps())))
            .and_then(|v| v.checked_add(frames))
            .ok_or_else(invalid)?;

        Ok(Self::from_frames(sign * total, base))
    }

    /// Create a timecode from a millisecond duration.
    ///
    /// Whole seconds contribute `base` frames each; the millisecond
    /// remainder is converted and truncated to whole frames. Non-finite
    /// input and frame counts outside `i64` are rejected.
    pub fn from_milliseconds(msec: f64, base: Base) -> Result<Self> {
        let rate = f64::from(base.fps());
        let seconds = (msec / 1000.0).floor();
        let remainder = msec.rem_euclid(1000.0);
        let frames = seconds * rate + (rate * remainder / 1000.0).floor();

        if !(-FRAME_LIMIT..FRAME_LIMIT).contains(&frames) {
            return Err(EditParserError::TimecodeOutOfRange(format!("{msec} ms")));
        }
        Ok(Self::from_frames(frames as i64, base))
    }

    /// Frame count (the canonical value).
    #[inline]
    pub const fn frames(self) -> i64 {
        self.frames
    }

    #[inline]
    pub const fn base(self) -> Base {
        self.base
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.frames < 0
    }

    /// Exact position in seconds.
    pub fn seconds(self) -> Rational64 {
        Rational64::new(self.frames, i64::from(self.base.fps()))
    }

    /// Sum of two timecodes at the same base.
    pub fn try_add(self, other: Self) -> Result<Self> {
        self.ensure_same_base(other)?;
        let frames = self
            .frames
            .checked_add(other.frames)
            .ok_or_else(|| EditParserError::TimecodeOutOfRange(format!("{self} + {other}")))?;
        Ok(Self::from_frames(frames, self.base))
    }

    /// Difference of two timecodes at the same base. May be negative.
    pub fn try_sub(self, other: Self) -> Result<Self> {
        self.ensure_same_base(other)?;
        let frames = self
            .frames
            .checked_sub(other.frames)
            .ok_or_else(|| EditParserError::TimecodeOutOfRange(format!("{self} - {other}")))?;
        Ok(Self::from_frames(frames, self.base))
    }

    fn ensure_same_base(self, other: Self) -> Result<()> {
        if self.base != other.base {
            return Err(EditParserError::BaseMismatch {
                left: self.base,
                right: other.base,
            });
        }
        Ok(())
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.base == other.base).then(|| self.frames.cmp(&other.frames))
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let rate = u64::from(self.base.fps());
        let total = self.frames.unsigned_abs();

        let (seconds, frames) = (total / rate, total % rate);
        let (minutes, seconds) = (seconds / 60, seconds % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);

        write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}:{frames:02}")
    }
}
