//! EditParser Formats - Line-based edit list parsers
//!
//! Provides the format registry and the built-in parsers:
//! - CMX3600 event/info line lists
//! - Vegas semicolon-delimited record lists
//!
//! Parsers consume already-decoded lines; [`parse_file`] is a thin helper
//! that reads a file first.

pub mod cmx3600;
pub mod options;
pub mod report;
pub mod vegas;

use editparser_core::{EditParserError, Result};
use std::path::Path;
use tracing::info;

pub use cmx3600::Cmx3600Parser;
pub use options::{ParseContext, ParseOptions, DEFAULT_FORMAT};
pub use report::{ParseReport, ParseWarning};
pub use vegas::{VegasParser, VegasRecord};

/// Trait for line-based edit list formats.
pub trait EdlParser: Send + Sync {
    /// Format identifier used for registry lookup.
    fn name(&self) -> &str;

    /// Turn the full sequence of input lines into an edit list.
    fn parse(&self, lines: &[&str], ctx: &ParseContext) -> Result<ParseReport>;
}

/// Registry of the formats a caller can choose between.
pub struct FormatRegistry {
    parsers: Vec<Box<dyn EdlParser>>,
}

impl FormatRegistry {
    /// Create a new registry with the built-in formats.
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(Cmx3600Parser), Box::new(VegasParser)],
        }
    }

    /// Create a registry with no formats.
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Add a parser, replacing any registered under the same name.
    pub fn register(&mut self, parser: Box<dyn EdlParser>) {
        self.parsers
            .retain(|p| !p.name().eq_ignore_ascii_case(parser.name()));
        self.parsers.push(parser);
    }

    /// Get all registered parsers.
    pub fn parsers(&self) -> &[Box<dyn EdlParser>] {
        &self.parsers
    }

    pub fn formats(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Find a parser by format name (ASCII case-insensitive).
    pub fn find(&self, name: &str) -> Option<&dyn EdlParser> {
        self.parsers
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .map(|p| p.as_ref())
    }

    /// Parse `lines` with the format named in `options`.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S], options: &ParseOptions) -> Result<ParseReport> {
        let parser = self
            .find(&options.format)
            .ok_or_else(|| EditParserError::UnsupportedFormat(options.format.clone()))?;
        let ctx = options.context()?;
        let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();

        info!(format = parser.name(), lines = lines.len(), base = %ctx.base, "parsing edit list");
        let report = parser.parse(&lines, &ctx)?;
        info!(
            title = report.edl.title(),
            edits = report.edl.len(),
            warnings = report.warnings.len(),
            "parsed edit list"
        );
        Ok(report)
    }

    /// Read `path` and parse it. The path becomes the list's source path.
    pub fn parse_file(&self, path: impl AsRef<Path>, options: &ParseOptions) -> Result<ParseReport> {
        let path = path.as_ref();
        let lines = read_lines(path)?;
        let options = options
            .clone()
            .with_source_path(path.to_string_lossy().into_owned());
        self.parse(&lines, &options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `lines` with the built-in formats.
pub fn parse<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> Result<ParseReport> {
    FormatRegistry::new().parse(lines, options)
}

/// Read and parse a file with the built-in formats.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<ParseReport> {
    FormatRegistry::new().parse_file(path, options)
}

/// Read a file as lines. Invalid UTF-8 is replaced rather than rejected
/// and a leading byte-order mark is dropped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&data);
    let text: &str = &text;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(text.lines().map(str::to_string).collect())
}
