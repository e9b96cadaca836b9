//! Tests for record block encoding/decoding
//!
//! These tests verify:
//! - Exact encoded text
//! - Round trips in both directions
//! - Lenient handling of unknown lines and missing fields
//! - Strict vs lenient treatment of non-positive ids
//! - Format errors for malformed integers

use aqlstore::codec::{decode_block, decode_records, encode_record};
use aqlstore::{AqlError, DecodeMode, Record};

// =============================================================================
// Helper Functions
// =============================================================================

fn alice() -> Record {
    Record::new("Alice", 30, "Springfield").with_id(1)
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_exact_text() {
    let text = encode_record(&alice());

    assert_eq!(
        text,
        "- id: 1\n  name: \"Alice\"\n  age: 30\n  city: \"Springfield\"\n"
    );
}

#[test]
fn test_encode_empty_fields() {
    let text = encode_record(&Record::default().with_id(7));

    assert_eq!(text, "- id: 7\n  name: \"\"\n  age: 0\n  city: \"\"\n");
}

#[test]
fn test_encode_negative_age() {
    let text = encode_record(&Record::new("X", -3, "Y").with_id(2));

    assert!(text.contains("  age: -3\n"));
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_decode_encode_is_identity_on_block() {
    let block = "- id: 12\n  name: \"Bob Smith\"\n  age: 25\n  city: \"Metropolis\"\n";

    let record = decode_block(block, DecodeMode::Strict).unwrap().unwrap();

    assert_eq!(encode_record(&record), block);
}

#[test]
fn test_encode_decode_preserves_record() {
    let records = [
        alice(),
        Record::new("", 0, "").with_id(3),
        Record::new("  padded  ", 99, "Los Angeles").with_id(42),
        Record::new("colon: inside", 1, "a:b:c").with_id(5),
        Record::new("Zoë", 41, "Zürich").with_id(i64::MAX),
    ];

    for record in records {
        let decoded = decode_block(&encode_record(&record), DecodeMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, record);
    }
}

// =============================================================================
// Lenient Parsing Tests
// =============================================================================

#[test]
fn test_decode_ignores_unknown_lines() {
    let block = "- id: 3\n  name: \"Carl\"\n  email: \"c@x\"\n# comment\n  age: 40\n  city: \"Gotham\"\n";

    let record = decode_block(block, DecodeMode::Strict).unwrap().unwrap();

    assert_eq!(record, Record::new("Carl", 40, "Gotham").with_id(3));
}

#[test]
fn test_decode_missing_fields_use_defaults() {
    let record = decode_block("- id: 4\n", DecodeMode::Strict)
        .unwrap()
        .unwrap();

    assert_eq!(record, Record::default().with_id(4));
}

#[test]
fn test_decode_unquoted_text() {
    let block = "- id: 1\n  name: Alice\n  city: Springfield\n";

    let record = decode_block(block, DecodeMode::Lenient).unwrap().unwrap();

    assert_eq!(record.name, "Alice");
    assert_eq!(record.city, "Springfield");
}

#[test]
fn test_decode_requires_two_space_indent() {
    let block = "- id: 1\nname: \"NoIndent\"\n   age: 9\n  city: \"Ok\"\n";

    let record = decode_block(block, DecodeMode::Strict).unwrap().unwrap();

    assert_eq!(record.name, "");
    assert_eq!(record.age, 0);
    assert_eq!(record.city, "Ok");
}

#[test]
fn test_decode_other_list_marker_does_not_start_record() {
    let body = "- id: 1\n  name: \"A\"\n- note: 5\n  age: 7\n";

    let records = decode_records(body, 1, DecodeMode::Strict).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].age, 7);
}

#[test]
fn test_decode_block_without_id_is_absent() {
    let block = "  name: \"Ghost\"\n  age: 1\n";

    assert_eq!(decode_block(block, DecodeMode::Lenient).unwrap(), None);
    assert_eq!(decode_block(block, DecodeMode::Strict).unwrap(), None);
    assert_eq!(decode_block("", DecodeMode::Strict).unwrap(), None);
}

#[test]
fn test_decode_block_stops_at_next_record() {
    let text = "- id: 1\n  name: \"First\"\n- id: 2\n  name: \"Second\"\n";

    let record = decode_block(text, DecodeMode::Strict).unwrap().unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.name, "First");
}

// =============================================================================
// Decode Mode Tests
// =============================================================================

#[test]
fn test_lenient_skips_non_positive_ids() {
    let body = "- id: 0\n  name: \"Zero\"\n- id: 2\n  name: \"Two\"\n- id: -5\n  name: \"Neg\"\n";

    let records = decode_records(body, 1, DecodeMode::Lenient).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 2);
    assert_eq!(decode_block("- id: 0\n", DecodeMode::Lenient).unwrap(), None);
}

#[test]
fn test_strict_rejects_non_positive_ids() {
    let body = "- id: 2\n  name: \"Two\"\n- id: -5\n  name: \"Neg\"\n";

    let err = decode_records(body, 4, DecodeMode::Strict).unwrap_err();

    match err {
        AqlError::InvalidRecord { line, id } => {
            assert_eq!(line, 6);
            assert_eq!(id, -5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// Format Error Tests
// =============================================================================

#[test]
fn test_malformed_id_is_format_error() {
    for mode in [DecodeMode::Lenient, DecodeMode::Strict] {
        let err = decode_block("- id: abc\n", mode).unwrap_err();
        assert!(matches!(err, AqlError::Format { line: 1, .. }));
    }
}

#[test]
fn test_malformed_age_reports_line() {
    let body = "- id: 1\n  age: 30\n- id: 2\n  age: thirty\n";

    let err = decode_records(body, 10, DecodeMode::Lenient).unwrap_err();

    match err {
        AqlError::Format { line, message } => {
            assert_eq!(line, 13);
            assert!(message.contains("age"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_id_is_format_error() {
    let err = decode_block("- id:\n", DecodeMode::Lenient).unwrap_err();

    assert!(matches!(err, AqlError::Format { .. }));
}
