//! Integration tests for Vegas record lists.

use editparser_core::{Base, EditParserError};
use editparser_edl::AttrValue;
use editparser_formats::vegas::FIELDS;
use editparser_formats::{parse, parse_file, ParseOptions, ParseWarning};

// ── Helpers ────────────────────────────────────────────────────

fn header() -> String {
    FIELDS
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(";")
}

fn record(id: i64, start_ms: f64, length_ms: f64, file: &str) -> String {
    format!(
        "{id}; 1; {start_ms:.4}; {length_ms:.4}; 1.000000; FALSE; FALSE; 0; TRUE; FALSE; VIDEO; \
         \"{file}\"; 0; 0.0000; {length_ms:.4}; 0.0000; 0.0000; 1.000000; 4; 0.000000; 4; \
         0.000000; 0; -1; 4; 4; 0.000000; FALSE; 0; 0"
    )
}

fn options() -> ParseOptions {
    ParseOptions::new("vegas").with_base(Base::FPS_25)
}

// ── Records ────────────────────────────────────────────────────

#[test]
fn header_is_discarded() {
    let lines = vec![header(), record(1, 0.0, 2520.0, r"C:\media\a.mov")];
    let report = parse(&lines, &options()).unwrap();

    assert_eq!(report.edl.len(), 1);
    assert!(report.warnings.is_empty());
    let edit = report.edl.get(0).unwrap();
    assert_eq!(edit.number(), 1);
    assert_eq!(edit.name(), "a.mov");
    assert_eq!(edit.global_out().to_string(), "00:00:02:13");
}

#[test]
fn records_keep_order_and_attributes() {
    let lines: Vec<String> = (1..=6)
        .map(|id| record(id, (id - 1) as f64 * 1000.0, 1000.0, &format!("/media/{id}.avi")))
        .collect();
    let report = parse(&lines, &options()).unwrap();

    assert_eq!(report.edl.len(), 6);
    for (i, edit) in report.edl.iter().enumerate() {
        assert_eq!(edit.number(), i as i64 + 1);
        assert_eq!(edit.global_in().frames(), i as i64 * 25);
        assert_eq!(edit.get("MediaType").and_then(AttrValue::as_str), Some("VIDEO"));
        assert_eq!(edit.get("Looped").and_then(AttrValue::as_bool), Some(true));
        assert_eq!(edit.attributes().len(), FIELDS.len());
    }
}

#[test]
fn short_record_skipped_and_parsing_continues() {
    let lines = vec![
        header(),
        record(1, 0.0, 1000.0, "a.mov"),
        "2; 1; 1000.0000".to_string(),
        record(3, 2000.0, 1000.0, "c.mov"),
    ];
    let report = parse(&lines, &options()).unwrap();

    let numbers: Vec<i64> = report.edl.iter().map(|edit| edit.number()).collect();
    assert_eq!(numbers, vec![1, 3]);
    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        ParseWarning::SkippedRecord { line, reason } => {
            assert_eq!(*line, 3);
            assert!(reason.contains("expected 30"), "reason: {reason}");
        }
        other => panic!("unexpected warning {other:?}"),
    }
}

#[test]
fn fractional_milliseconds_truncate() {
    // 40ms is exactly one frame at 25 fps, 39.9ms is not
    let lines = vec![record(1, 39.9, 40.0, "a.mov")];
    let report = parse(&lines, &options()).unwrap();
    let edit = report.edl.get(0).unwrap();

    assert_eq!(edit.global_in().frames(), 0);
    assert_eq!(edit.global_out().frames(), 1);
    assert_eq!(edit.media_out().frames(), 1);
}

#[test]
fn negative_length_aborts() {
    let lines = vec![record(1, 1000.0, -500.0, "a.mov")];
    let result = parse(&lines, &options());
    assert!(matches!(result, Err(EditParserError::GlobalRangeInvalid { .. })));
}

#[test]
fn title_comes_from_file_name() {
    let path = std::env::temp_dir().join(format!("editparser-it-{}.vegas.txt", std::process::id()));
    let text = [header(), record(1, 0.0, 1000.0, "a.mov")].join("\n");
    std::fs::write(&path, text).unwrap();

    let report = parse_file(&path, &options());
    std::fs::remove_file(&path).unwrap();
    let report = report.unwrap();

    let expected = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(report.edl.title(), expected);
    assert_eq!(report.edl.len(), 1);

    let untitled = parse(&[record(1, 0.0, 1000.0, "a.mov")], &options()).unwrap();
    assert_eq!(untitled.edl.title(), "edl");
}
