//! Parse configuration.

use editparser_core::{Base, Result, Timecode};
use editparser_edl::EditList;
use serde::{Deserialize, Serialize};

/// Format used when none is configured.
pub const DEFAULT_FORMAT: &str = "cmx3600";

/// Caller-facing parse settings.
///
/// Every field has a default, so a partial JSON document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Registered format name (`cmx3600`, `vegas`)
    pub format: String,
    /// Frame rate all timecodes are built in
    pub base: Base,
    /// Program start as `HH:MM:SS:FF`; `01:00:00:00` when absent
    pub start_timecode: Option<String>,
    /// Path the lines were read from
    pub source_path: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            base: Base::FPS_25,
            start_timecode: None,
            source_path: String::new(),
        }
    }
}

impl ParseOptions {
    /// Default options for the given format.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    pub fn with_start_timecode(mut self, start: impl Into<String>) -> Self {
        self.start_timecode = Some(start.into());
        self
    }

    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Resolve into the values a parser works with. Fails if the start
    /// timecode does not parse.
    pub fn context(&self) -> Result<ParseContext> {
        let start_timecode = self
            .start_timecode
            .as_deref()
            .map(|text| Timecode::from_string(text, self.base))
            .transpose()?;

        Ok(ParseContext {
            base: self.base,
            start_timecode,
            source_path: self.source_path.clone(),
        })
    }
}

/// Resolved settings passed to an [`EdlParser`](crate::EdlParser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    pub base: Base,
    pub start_timecode: Option<Timecode>,
    pub source_path: String,
}

impl ParseContext {
    /// Context with the default start and no source path.
    pub fn new(base: Base) -> Self {
        Self {
            base,
            start_timecode: None,
            source_path: String::new(),
        }
    }

    /// Empty edit list for this context.
    pub fn edit_list(&self, title: impl Into<String>) -> EditList {
        match self.start_timecode {
            Some(start) => EditList::with_start_timecode(title, self.source_path.clone(), start),
            None => EditList::new(title, self.source_path.clone(), self.base),
        }
    }
}
