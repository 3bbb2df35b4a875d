//! Edit Decision List container.

use editparser_core::{Base, EditParserError, Result, Timecode};

use crate::edit::Edit;

/// Start of program used when the source does not specify one.
pub const DEFAULT_START_TIMECODE: &str = "01:00:00:00";

/// An ordered list of edits with the metadata of the file it came from.
///
/// Edits are kept in record order, which is not necessarily sorted by
/// timeline position.
#[derive(Debug, Clone, PartialEq)]
pub struct EditList {
    title: String,
    source_path: String,
    start_timecode: Timecode,
    edits: Vec<Edit>,
}

impl EditList {
    /// Create an empty list starting at `01:00:00:00` in `base`.
    pub fn new(title: impl Into<String>, source_path: impl Into<String>, base: Base) -> Self {
        let start = i64::from(base.fps()) * 60 * 60;
        Self {
            title: title.into(),
            source_path: source_path.into(),
            start_timecode: Timecode::from_frames(start, base),
            edits: Vec::new(),
        }
    }

    /// Create an empty list with an explicit start timecode; its base
    /// becomes the list's base.
    pub fn with_start_timecode(
        title: impl Into<String>,
        source_path: impl Into<String>,
        start_timecode: Timecode,
    ) -> Self {
        Self {
            title: title.into(),
            source_path: source_path.into(),
            start_timecode,
            edits: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn start_timecode(&self) -> Timecode {
        self.start_timecode
    }

    pub fn base(&self) -> Base {
        self.start_timecode.base()
    }

    /// Replace the start timecode, which must be in the list's base.
    pub fn set_start_timecode(&mut self, start: Timecode) -> Result<()> {
        if start.base() != self.base() {
            return Err(EditParserError::BaseMismatch {
                left: self.base(),
                right: start.base(),
            });
        }
        self.start_timecode = start;
        Ok(())
    }

    /// Add an edit at the end of the list.
    pub fn append(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Insert an edit at `index`; indices past the end append.
    pub fn insert(&mut self, index: usize, edit: Edit) {
        let index = index.min(self.edits.len());
        self.edits.insert(index, edit);
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn get(&self, index: usize) -> Option<&Edit> {
        self.edits.get(index)
    }

    /// Most recently appended edit.
    pub fn last_mut(&mut self) -> Option<&mut Edit> {
        self.edits.last_mut()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
        self.edits.iter()
    }

    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}

impl<'a> IntoIterator for &'a EditList {
    type Item = &'a Edit;
    type IntoIter = std::slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}
