//! CMX3600 edit decision lists.
//!
//! A CMX3600 file is a title line followed by event lines, each optionally
//! trailed by free-form info lines that describe it:
//!
//! ```text
//! TITLE: PROMO_V3
//! 001  AX       V     C        00:00:00:00 00:00:05:00 01:00:00:00 01:00:05:00
//! * FROM CLIP NAME: intro.mov
//! ```
//!
//! Info lines are attached as attributes to the most recent event.

use editparser_core::{Base, EditParserError, Result, Timecode};
use editparser_edl::{AttrValue, Attributes, Edit};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

use crate::options::ParseContext;
use crate::report::{ParseReport, ParseWarning};
use crate::EdlParser;

/// Registry name of this format.
pub const FORMAT_NAME: &str = "cmx3600";

/// Title used when the first line carries none.
pub const DEFAULT_TITLE: &str = "edl";

const TITLE_PATTERN: &str = r"TITLE:\s+(.*)";

const EVENT_PATTERN: &str = concat!(
    r"^(?P<number>[0-9]{3})\s+",
    r"(?:(?P<tape>\S+)\s+)?",
    r"(?P<channels>[AV]+)\s+",
    r"(?P<transition>[A-Za-z])\s+",
    r"(?:(?P<duration>[0-9]{3})\s+)?",
    r"(?P<media_in>[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2})\s+",
    r"(?P<media_out>[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2})\s+",
    r"(?P<global_in>[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2})\s+",
    r"(?P<global_out>[0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2})",
);

fn title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TITLE_PATTERN).expect("title pattern compiles"))
}

fn event_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EVENT_PATTERN).expect("event pattern compiles"))
}

/// Line-by-line CMX3600 parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cmx3600Parser;

impl EdlParser for Cmx3600Parser {
    fn name(&self) -> &str {
        FORMAT_NAME
    }

    /// Parse all lines. An event line that does not match the grammar
    /// aborts the whole parse with [`EditParserError::InvalidEventLine`].
    fn parse(&self, lines: &[&str], ctx: &ParseContext) -> Result<ParseReport> {
        let title = lines.first().and_then(|first| parse_title(first));
        let has_title = title.is_some();
        if !has_title {
            debug!("no title found, defaulting to '{DEFAULT_TITLE}'");
        }

        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut report = ParseReport::new(ctx.edit_list(title));

        for (index, raw) in lines.iter().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if is_event_line(line) {
                let edit = parse_event_line(line, line_no, ctx.base)?;
                debug!(line = line_no, number = edit.number(), "event");
                report.edl.append(edit);
                continue;
            }

            let (key, value) = parse_info_line(line);
            match report.edl.last_mut() {
                Some(edit) => edit.set(key, value),
                None if index == 0 && has_title => {}
                None => report.warn(ParseWarning::UnattachedInfo { line: line_no, key }),
            }
        }

        Ok(report)
    }
}

/// Title from a `TITLE: ...` line, if present.
pub fn parse_title(line: &str) -> Option<String> {
    title_regex()
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
}

/// Event lines are the ones starting with a three-digit event number.
pub fn is_event_line(line: &str) -> bool {
    line.len() >= 3 && line.as_bytes()[..3].iter().all(u8::is_ascii_digit)
}

/// Parse an event line into an edit at `base`.
///
/// Attributes: `number`, `tape` (empty when absent), `channels` (one entry
/// per channel letter), `transition`, `duration` (0 when absent).
pub fn parse_event_line(line: &str, line_no: usize, base: Base) -> Result<Edit> {
    let invalid = || EditParserError::InvalidEventLine {
        line: line_no,
        text: line.to_string(),
    };

    let caps = event_regex().captures(line).ok_or_else(invalid)?;
    let timecode = |name: &str| Timecode::from_string(&caps[name], base);

    let number: i64 = caps["number"].parse().map_err(|_| invalid())?;
    let duration: i64 = match caps.name("duration") {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    let mut attributes = Attributes::new();
    attributes.insert("number".into(), AttrValue::Int(number));
    attributes.insert("tape".into(), AttrValue::Text(optional(&caps, "tape")));
    attributes.insert(
        "channels".into(),
        AttrValue::List(caps["channels"].chars().map(String::from).collect()),
    );
    attributes.insert(
        "transition".into(),
        AttrValue::Text(caps["transition"].to_string()),
    );
    attributes.insert("duration".into(), AttrValue::Int(duration));

    Edit::with_attributes(
        timecode("media_in")?,
        timecode("media_out")?,
        timecode("global_in")?,
        timecode("global_out")?,
        attributes,
    )
}

fn optional(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Parse an info line into a normalized key and its value.
///
/// `KEY: value` yields a text value; a line without a colon is a flag and
/// yields `true`.
pub fn parse_info_line(line: &str) -> (String, AttrValue) {
    let (key, value) = match line.split_once(':') {
        Some((key, value)) => (key, AttrValue::Text(value.trim().to_string())),
        None => (line, AttrValue::Bool(true)),
    };
    (normalize_key(key), value)
}

/// `* FROM CLIP NAME` becomes `from_clip_name`.
fn normalize_key(key: &str) -> String {
    key.trim_start_matches('*')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}
