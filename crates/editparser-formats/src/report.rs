//! Parse results and non-fatal diagnostics.

use editparser_edl::EditList;
use std::fmt;
use tracing::warn;

/// Input that was skipped without aborting the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A record line could not be turned into an edit.
    SkippedRecord { line: usize, reason: String },
    /// An info line appeared before any event it could attach to.
    UnattachedInfo { line: usize, key: String },
}

impl ParseWarning {
    /// 1-based input line the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::SkippedRecord { line, .. } | Self::UnattachedInfo { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedRecord { line, reason } => {
                write!(f, "line {line}: skipped record ({reason})")
            }
            Self::UnattachedInfo { line, key } => {
                write!(f, "line {line}: '{key}' precedes the first event, ignored")
            }
        }
    }
}

/// A parsed edit list together with the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub edl: EditList,
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    pub fn new(edl: EditList) -> Self {
        Self {
            edl,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and emit it as a tracing event.
    pub fn warn(&mut self, warning: ParseWarning) {
        warn!(line = warning.line(), "{warning}");
        self.warnings.push(warning);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_edl(self) -> EditList {
        self.edl
    }
}
