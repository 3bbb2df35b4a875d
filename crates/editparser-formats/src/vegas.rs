//! Vegas semicolon-delimited edit lists.
//!
//! Every line is an independent record with a fixed set of fields. Times
//! are given in milliseconds, so timecodes are derived with
//! [`Timecode::from_milliseconds`] at the configured base.

use editparser_core::{Base, EditParserError, Result, Timecode};
use editparser_edl::{AttrValue, Attributes, Edit};
use std::path::Path;
use tracing::debug;

use crate::options::ParseContext;
use crate::report::{ParseReport, ParseWarning};
use crate::EdlParser;

/// Registry name of this format.
pub const FORMAT_NAME: &str = "vegas";

/// Title used when there is no source path to name the list after.
pub const DEFAULT_TITLE: &str = "edl";

/// Record schema, in column order.
pub const FIELDS: [&str; 30] = [
    "ID",
    "Track",
    "StartTime",
    "Length",
    "PlayRate",
    "Locked",
    "Normalized",
    "StretchMethod",
    "Looped",
    "OnRuler",
    "MediaType",
    "FileName",
    "Stream",
    "StreamStart",
    "StreamLength",
    "FadeTimeIn",
    "FadeTimeOut",
    "SustainGain",
    "CurveIn",
    "GainIn",
    "CurveOut",
    "GainOut",
    "Layer",
    "Color",
    "CurveInR",
    "CurveOutR",
    "PlayPitch",
    "LockPitch",
    "FirstChannel",
    "Channels",
];

/// One decoded record, keyed by schema field name.
#[derive(Debug, Clone, PartialEq)]
pub struct VegasRecord {
    fields: Attributes,
}

impl VegasRecord {
    /// Split and decode a record line.
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(';').collect();
        if parts.len() != FIELDS.len() {
            return Err(EditParserError::FieldCountMismatch {
                expected: FIELDS.len(),
                found: parts.len(),
            });
        }

        let fields = FIELDS
            .iter()
            .zip(parts)
            .map(|(name, part)| (name.to_string(), coerce(part.trim())))
            .collect();

        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<&AttrValue> {
        self.fields.get(field)
    }

    /// Numeric field as finite milliseconds.
    pub fn millis(&self, field: &str) -> Result<f64> {
        self.get(field)
            .and_then(AttrValue::as_f64)
            .filter(|ms| ms.is_finite())
            .ok_or_else(|| self.invalid(field))
    }

    /// Field converted to a timecode at `base`.
    pub fn timecode(&self, field: &str, base: Base) -> Result<Timecode> {
        Timecode::from_milliseconds(self.millis(field)?, base).map_err(|_| self.invalid(field))
    }

    fn invalid(&self, field: &str) -> EditParserError {
        EditParserError::InvalidField {
            field: field.to_string(),
            value: self.get(field).map(ToString::to_string).unwrap_or_default(),
        }
    }

    pub fn into_attributes(self) -> Attributes {
        self.fields
    }
}

/// Decode a field: `FALSE`/`TRUE`, then integer, then float, then text
/// with quote characters removed.
pub fn coerce(field: &str) -> AttrValue {
    match field {
        "FALSE" => AttrValue::Bool(false),
        "TRUE" => AttrValue::Bool(true),
        _ => {
            if let Ok(v) = field.parse::<i64>() {
                AttrValue::Int(v)
            } else if let Ok(v) = field.parse::<f64>() {
                AttrValue::Float(v)
            } else {
                AttrValue::Text(field.replace('"', ""))
            }
        }
    }
}

/// Header lines start with the `"ID"` column name.
pub fn is_header(line: &str) -> bool {
    line.trim_start().trim_start_matches('"').starts_with("ID")
}

/// Build an edit from a record line at `base`.
pub fn parse_record(line: &str, base: Base) -> Result<Edit> {
    let record = VegasRecord::parse(line)?;

    let media_in = record.timecode("StreamStart", base)?;
    let media_out = media_in.try_add(record.timecode("StreamLength", base)?)?;
    let global_in = record.timecode("StartTime", base)?;
    let global_out = global_in.try_add(record.timecode("Length", base)?)?;

    Edit::with_attributes(
        media_in,
        media_out,
        global_in,
        global_out,
        record.into_attributes(),
    )
}

fn title_from_path(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

/// Record-per-line Vegas parser.
///
/// Records with the wrong field count, or timing fields that are not
/// numeric or do not fit a timecode, are skipped and reported; parsing
/// continues with the next line.
#[derive(Debug, Clone, Copy, Default)]
pub struct VegasParser;

impl EdlParser for VegasParser {
    fn name(&self) -> &str {
        FORMAT_NAME
    }

    fn parse(&self, lines: &[&str], ctx: &ParseContext) -> Result<ParseReport> {
        let mut report = ParseReport::new(ctx.edit_list(title_from_path(&ctx.source_path)));
        let skip = usize::from(lines.first().is_some_and(|line| is_header(line)));

        for (index, line) in lines.iter().enumerate().skip(skip) {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match parse_record(line, ctx.base) {
                Ok(edit) => {
                    debug!(line = line_no, id = edit.number(), "record");
                    report.edl.append(edit);
                }
                Err(
                    err @ (EditParserError::FieldCountMismatch { .. }
                    | EditParserError::InvalidField { .. }
                    | EditParserError::TimecodeOutOfRange(_)),
                ) => report.warn(ParseWarning::SkippedRecord {
                    line: line_no,
                    reason: err.to_string(),
                }),
                Err(err) => return Err(err),
            }
        }

        Ok(report)
    }
}
