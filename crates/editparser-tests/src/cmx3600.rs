//! Integration tests for CMX3600 lists.
//!
//! Drives the format registry in editparser-formats and inspects the
//! resulting editparser-edl lists.

use editparser_core::{Base, EditParserError, Timecode};
use editparser_edl::AttrValue;
use editparser_formats::{parse, parse_file, FormatRegistry, ParseOptions, ParseWarning};

// ── Helpers ────────────────────────────────────────────────────

/// A titled list of `count` one-second cuts, each with a clip name.
fn fixture(count: usize) -> Vec<String> {
    let mut lines = vec!["TITLE: REEL_ONE".to_string(), String::new()];
    for i in 0..count {
        lines.push(format!(
            "{:03}  AX       V     C        00:00:{:02}:00 00:00:{:02}:00 01:00:{:02}:00 01:00:{:02}:00",
            i + 1,
            i,
            i + 1,
            i,
            i + 1,
        ));
        lines.push(format!("* FROM CLIP NAME: clip_{:02}.mov", i + 1));
    }
    lines
}

fn options(base: Base) -> ParseOptions {
    ParseOptions::new("cmx3600").with_base(base)
}

// ── Event ordering ─────────────────────────────────────────────

#[test]
fn twenty_events_parse_in_order() {
    let report = parse(&fixture(20), &options(Base::FPS_30)).unwrap();
    let edl = &report.edl;

    assert_eq!(edl.title(), "REEL_ONE");
    assert_eq!(edl.len(), 20);
    assert!(report.warnings.is_empty());

    for (i, edit) in edl.iter().enumerate() {
        assert_eq!(edit.number(), i as i64 + 1);
        assert_eq!(edit.name(), format!("clip_{:02}.mov", i + 1));
        assert_eq!(edit.base(), Base::FPS_30);
        assert_eq!(edit.duration().unwrap().frames(), 30);
    }
}

#[test]
fn offsets_follow_program_start() {
    let report = parse(&fixture(3), &options(Base::FPS_30)).unwrap();
    let edl = &report.edl;
    assert_eq!(edl.start_timecode().to_string(), "01:00:00:00");

    let offsets: Vec<i64> = edl
        .iter()
        .map(|edit| edit.global_in_from(edl.start_timecode()).unwrap().frames())
        .collect();
    assert_eq!(offsets, vec![0, 30, 60]);
}

#[test]
fn explicit_start_timecode() {
    let options = options(Base::FPS_24).with_start_timecode("00:00:00:00");
    let report = parse(&fixture(1), &options).unwrap();
    let edit = report.edl.get(0).unwrap();

    let offset = edit.global_in_from(report.edl.start_timecode()).unwrap();
    assert_eq!(offset, Timecode::from_frames(24 * 3600, Base::FPS_24));
}

#[test]
fn bad_start_timecode_rejected() {
    let options = options(Base::FPS_25).with_start_timecode("one hour");
    let result = parse(&fixture(1), &options);
    assert!(matches!(result, Err(EditParserError::InvalidTimecodeFormat(_))));
}

// ── Info lines ─────────────────────────────────────────────────

#[test]
fn info_lines_become_attributes() {
    let lines = [
        "TITLE: NOTES",
        "001  AX V D 015 00:00:00:00 00:00:02:00 01:00:00:00 01:00:02:00",
        "* SOURCE FILE: /media/a.mov",
        "* FREEZE FRAME",
    ];
    let report = parse(&lines, &options(Base::FPS_25)).unwrap();
    let edit = report.edl.get(0).unwrap();

    assert_eq!(
        edit.get("source_file").and_then(AttrValue::as_str),
        Some("/media/a.mov")
    );
    assert_eq!(edit.get("freeze_frame"), Some(&AttrValue::Bool(true)));
    assert_eq!(edit.get("transition").and_then(AttrValue::as_str), Some("D"));
    assert_eq!(edit.get("duration").and_then(AttrValue::as_i64), Some(15));
    assert_eq!(edit.name(), "edit");
}

#[test]
fn info_before_first_event_is_reported() {
    let lines = [
        "TITLE: HEADER NOTES",
        "FCM: NON-DROP FRAME",
        "001  AX V C 00:00:00:00 00:00:01:00 01:00:00:00 01:00:01:00",
    ];
    let report = parse(&lines, &options(Base::FPS_25)).unwrap();

    assert_eq!(report.edl.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        ParseWarning::UnattachedInfo { line, key } => {
            assert_eq!(*line, 2);
            assert_eq!(key, "fcm");
        }
        other => panic!("unexpected warning {other:?}"),
    }
    assert!(report.edl.get(0).unwrap().get("fcm").is_none());
}

// ── Failures ───────────────────────────────────────────────────

#[test]
fn malformed_event_aborts() {
    let mut lines = fixture(4);
    lines[6] = "003  AX V C 00:00:02:00 00:00:03:00 01:00:02:00".to_string();

    match parse(&lines, &options(Base::FPS_25)) {
        Err(EditParserError::InvalidEventLine { line, text }) => {
            assert_eq!(line, 7);
            assert_eq!(text, lines[6]);
        }
        other => panic!("expected InvalidEventLine, got {other:?}"),
    }
}

#[test]
fn registry_exposes_parsers_and_owned_results() {
    let registry = FormatRegistry::new();
    let names: Vec<&str> = registry.parsers().iter().map(|p| p.name()).collect();
    assert_eq!(names, registry.formats());

    let options = ParseOptions::new("vegas").with_format("CMX3600");
    let edits = registry
        .parse(&fixture(2), &options)
        .unwrap()
        .into_edl()
        .into_edits();
    assert_eq!(edits.len(), 2);
    assert_eq!(edits[1].number(), 2);
}

#[test]
fn out_of_range_frame_field_is_accepted() {
    let lines = ["001  AX V C 00:00:00:99 00:00:01:00 01:00:00:00 01:00:01:00"];
    let report = parse(&lines, &options(Base::FPS_25)).unwrap();
    assert_eq!(report.edl.get(0).unwrap().media_in().frames(), 99);
}

#[test]
fn unknown_format_is_error() {
    let registry = FormatRegistry::new();
    let result = registry.parse(&fixture(1), &ParseOptions::new("final-cut-xml"));
    assert!(matches!(result, Err(EditParserError::UnsupportedFormat(_))));
}

#[test]
fn parse_file_end_to_end() {
    let path = std::env::temp_dir().join(format!("editparser-it-{}.edl", std::process::id()));
    std::fs::write(&path, fixture(5).join("\r\n")).unwrap();

    let report = parse_file(&path, &options(Base::FPS_25));
    std::fs::remove_file(&path).unwrap();
    let report = report.unwrap();

    assert_eq!(report.edl.len(), 5);
    assert_eq!(report.edl.source_path(), path.to_string_lossy());
    assert_eq!(report.edl.get(4).unwrap().name(), "clip_05.mov");
}
