//! A single timeline event.

use editparser_core::{Base, EditParserError, Result, Timecode};
use std::fmt;

use crate::attribute::{AttrValue, Attributes};

/// Fallback returned by [`Edit::name`] when no name attribute is present.
pub const DEFAULT_EDIT_NAME: &str = "edit";

/// Fallback returned by [`Edit::number`] when no event number is present.
pub const DEFAULT_EDIT_NUMBER: i64 = 1;

/// One event of an edit list: where a piece of source media lands on the
/// program timeline.
///
/// All four timecodes share one base and the global range is never
/// reversed. Both are checked on construction and by every setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    /// In point within the source clip
    media_in: Timecode,
    /// Out point within the source clip
    media_out: Timecode,
    /// In point on the program timeline
    global_in: Timecode,
    /// Out point on the program timeline
    global_out: Timecode,
    /// Format-specific event data
    attributes: Attributes,
}

impl Edit {
    /// Create an edit without attributes.
    pub fn new(
        media_in: Timecode,
        media_out: Timecode,
        global_in: Timecode,
        global_out: Timecode,
    ) -> Result<Self> {
        Self::with_attributes(media_in, media_out, global_in, global_out, Attributes::new())
    }

    /// Create an edit carrying the given attributes.
    pub fn with_attributes(
        media_in: Timecode,
        media_out: Timecode,
        global_in: Timecode,
        global_out: Timecode,
        attributes: Attributes,
    ) -> Result<Self> {
        let base = global_in.base();
        for tc in [media_in, media_out, global_out] {
            ensure_base(base, tc)?;
        }
        ensure_range(global_in, global_out)?;

        Ok(Self {
            media_in,
            media_out,
            global_in,
            global_out,
            attributes,
        })
    }

    /// Base shared by all four timecodes.
    pub fn base(&self) -> Base {
        self.global_in.base()
    }

    pub fn media_in(&self) -> Timecode {
        self.media_in
    }

    pub fn media_out(&self) -> Timecode {
        self.media_out
    }

    pub fn global_in(&self) -> Timecode {
        self.global_in
    }

    pub fn global_out(&self) -> Timecode {
        self.global_out
    }

    pub fn media_range(&self) -> (Timecode, Timecode) {
        (self.media_in, self.media_out)
    }

    pub fn global_range(&self) -> (Timecode, Timecode) {
        (self.global_in, self.global_out)
    }

    /// Length of the event on the program timeline.
    pub fn duration(&self) -> Result<Timecode> {
        self.global_out.try_sub(self.global_in)
    }

    /// Global in point relative to `reference` (usually the list's start).
    pub fn global_in_from(&self, reference: Timecode) -> Result<Timecode> {
        self.global_in.try_sub(reference)
    }

    /// Global out point relative to `reference`.
    pub fn global_out_from(&self, reference: Timecode) -> Result<Timecode> {
        self.global_out.try_sub(reference)
    }

    pub fn global_range_from(&self, reference: Timecode) -> Result<(Timecode, Timecode)> {
        Ok((
            self.global_in_from(reference)?,
            self.global_out_from(reference)?,
        ))
    }

    pub fn set_media_in(&mut self, tc: Timecode) -> Result<()> {
        ensure_base(self.base(), tc)?;
        self.media_in = tc;
        Ok(())
    }

    pub fn set_media_out(&mut self, tc: Timecode) -> Result<()> {
        ensure_base(self.base(), tc)?;
        self.media_out = tc;
        Ok(())
    }

    pub fn set_global_in(&mut self, tc: Timecode) -> Result<()> {
        ensure_base(self.base(), tc)?;
        ensure_range(tc, self.global_out)?;
        self.global_in = tc;
        Ok(())
    }

    pub fn set_global_out(&mut self, tc: Timecode) -> Result<()> {
        ensure_base(self.base(), tc)?;
        ensure_range(self.global_in, tc)?;
        self.global_out = tc;
        Ok(())
    }

    // ── Attributes ──────────────────────────────────────────────

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Look up an attribute, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a AttrValue) -> &'a AttrValue {
        self.attributes.get(key).unwrap_or(default)
    }

    /// Insert or replace an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Event number: `number` (CMX3600) or `ID` (Vegas), else 1.
    pub fn number(&self) -> i64 {
        self.get("number")
            .or_else(|| self.get("ID"))
            .and_then(AttrValue::as_i64)
            .unwrap_or(DEFAULT_EDIT_NUMBER)
    }

    /// Display name of the event, else `"edit"`.
    ///
    /// Checks `name`, then the CMX3600 `from_clip_name` comment, then the
    /// file part of the Vegas `FileName`.
    pub fn name(&self) -> &str {
        let text = |key: &str| self.get(key).and_then(AttrValue::as_str);

        text("name")
            .or_else(|| text("from_clip_name"))
            .or_else(|| {
                text("FileName")
                    .and_then(|path| path.rsplit(['\\', '/']).next())
                    .filter(|file| !file.is_empty())
            })
            .unwrap_or(DEFAULT_EDIT_NAME)
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "< Edit: {}[{};{}]{}>",
            self.global_in, self.media_in, self.media_out, self.global_out
        )
    }
}

fn ensure_base(expected: Base, tc: Timecode) -> Result<()> {
    if tc.base() != expected {
        return Err(EditParserError::BaseMismatch {
            left: expected,
            right: tc.base(),
        });
    }
    Ok(())
}

fn ensure_range(global_in: Timecode, global_out: Timecode) -> Result<()> {
    if global_in.frames() > global_out.frames() {
        return Err(EditParserError::GlobalRangeInvalid {
            global_in: global_in.to_string(),
            global_out: global_out.to_string(),
        });
    }
    Ok(())
}
