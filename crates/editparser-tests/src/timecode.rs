//! Integration tests for timecode arithmetic.
//!
//! Exercises editparser-core together with the edit model in
//! editparser-edl.

use editparser_core::{Base, EditParserError, Timecode};
use editparser_edl::Edit;
use num_rational::Rational64;

fn tc(text: &str, base: Base) -> Timecode {
    Timecode::from_string(text, base).unwrap()
}

// ── Conversions ────────────────────────────────────────────────

#[test]
fn milliseconds_convert_at_base() {
    let t = Timecode::from_milliseconds(2520.0, Base::FPS_25).unwrap();
    assert_eq!(t.frames(), 63);
    assert_eq!(t.to_string(), "00:00:02:13");
    assert_eq!(t.seconds(), Rational64::new(63, 25));
}

#[test]
fn string_round_trip_across_bases() {
    for base in [Base::FPS_24, Base::FPS_25, Base::FPS_30, Base::FPS_60] {
        let t = tc("10:11:12:13", base);
        assert_eq!(t.to_string(), "10:11:12:13");
        assert_eq!(t.base(), base);
    }
}

#[test]
fn malformed_strings_rejected() {
    for text in ["abc", "00:00:00", "00:00:00:00:00", "00:0a:00:00", "", "-"] {
        let result = Timecode::from_string(text, Base::FPS_25);
        assert!(
            matches!(result, Err(EditParserError::InvalidTimecodeFormat(ref t)) if t == text),
            "accepted '{text}'"
        );
    }
}

#[test]
fn negative_difference_formats_with_sign() {
    let early = tc("00:59:59:00", Base::FPS_25);
    let start = tc("01:00:00:00", Base::FPS_25);
    let offset = early.try_sub(start).unwrap();

    assert!(offset.is_negative());
    assert_eq!(offset.frames(), -25);
    assert_eq!(offset.to_string(), "-00:00:01:00");
    assert_eq!(tc("-00:00:01:00", Base::FPS_25), offset);
}

// ── Base handling ──────────────────────────────────────────────

#[test]
fn mixed_bases_do_not_combine() {
    let a = tc("00:00:01:00", Base::FPS_24);
    let b = tc("00:00:01:00", Base::FPS_30);

    assert!(matches!(a.try_add(b), Err(EditParserError::BaseMismatch { .. })));
    assert!(a.partial_cmp(&b).is_none());
    assert_ne!(a, b);
    assert_eq!(a.seconds(), b.seconds());
}

#[test]
fn edits_reject_mixed_bases() {
    let result = Edit::new(
        tc("00:00:00:00", Base::FPS_25),
        tc("00:00:01:00", Base::FPS_30),
        tc("01:00:00:00", Base::FPS_25),
        tc("01:00:01:00", Base::FPS_25),
    );
    assert!(matches!(result, Err(EditParserError::BaseMismatch { .. })));
}

#[test]
fn edit_offsets_relative_to_program_start() {
    let edit = Edit::new(
        tc("00:00:10:00", Base::FPS_30),
        tc("00:00:12:00", Base::FPS_30),
        tc("01:00:02:00", Base::FPS_30),
        tc("01:00:04:00", Base::FPS_30),
    )
    .unwrap();
    let start = tc("01:00:00:00", Base::FPS_30);

    let (global_in, global_out) = edit.global_range_from(start).unwrap();
    assert_eq!(global_in.frames(), 60);
    assert_eq!(global_out.frames(), 120);
    assert_eq!(edit.duration().unwrap().to_string(), "00:00:02:00");
}
