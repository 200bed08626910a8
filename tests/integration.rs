//! Integration tests for the full parsing pipeline.

use chatscope::prelude::*;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::tempdir;

const END_TO_END: &str = "1/5/23, 10:15 AM - Alice: Good morning!\n1/5/23, 10:16 AM - Bob: Morning!\n";

/// Renders (timestamp, sender, body) triples in `grammar`.
fn render(grammar: FormatGrammar, messages: &[(NaiveDateTime, &str, &str)]) -> String {
    messages
        .iter()
        .map(|(ts, sender, body)| format!("{}{}: {}\n", grammar.format_timestamp(ts), sender, body))
        .collect()
}

/// Timestamps on days 13-20 so day-first and month-first readings can't both succeed.
fn sample_messages(grammar: FormatGrammar) -> Vec<(NaiveDateTime, &'static str, &'static str)> {
    let start = NaiveDate::from_ymd_opt(2023, 3, 13)
        .unwrap()
        .and_hms_opt(8, 5, if grammar.has_seconds() { 42 } else { 0 })
        .unwrap();
    let bodies = [
        ("Alice", "Good morning!"),
        ("Bob", "Morning, how are you?"),
        ("Carol", "Meeting at 10:30 - bring notes"),
        ("Alice", "See you there: room 4"),
        ("Bob", "👍"),
    ];
    bodies
        .iter()
        .enumerate()
        .map(|(i, (sender, body))| {
            let ts = start + Duration::hours(i as i64 * 37) + Duration::minutes(i as i64 * 7);
            (ts, *sender, *body)
        })
        .collect()
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_end_to_end_example() {
    let chat = preprocess(END_TO_END).unwrap();

    assert_eq!(chat.len(), 2);
    assert_eq!(chat.records()[0].sender, "Alice");
    assert_eq!(chat.records()[1].sender, "Bob");
    for record in &chat {
        assert_eq!(record.hour, 10);
        assert_eq!(record.period_bucket, "10AM-11AM");
        assert_eq!(record.date_only, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    }
    assert_eq!(chat.records()[0].body, "Good morning!");
    assert_eq!(chat.records()[1].body, "Morning!");
}

#[test]
fn test_parse_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, END_TO_END).unwrap();

    let chat = TranscriptParser::new().parse(&path).unwrap();
    assert_eq!(chat.senders(), vec!["Alice", "Bob"]);
}

// ============================================================================
// Per-grammar round trip
// ============================================================================

#[test]
fn test_round_trip_every_grammar() {
    for &grammar in FormatGrammar::all() {
        let messages = sample_messages(grammar);
        let text = render(grammar, &messages);

        let chat = preprocess(&text).unwrap_or_else(|e| panic!("{grammar}: {e}"));
        assert!(chat.detected_grammar().is_some(), "{grammar}: not detected");
        assert!(
            !chat.is_degraded(),
            "{grammar}: unexpected warnings {:?}",
            chat.warnings()
        );
        assert_eq!(chat.len(), messages.len(), "{grammar}");

        for (record, (ts, sender, body)) in chat.iter().zip(&messages) {
            assert_eq!(record.timestamp, *ts, "{grammar}");
            assert_eq!(record.sender, *sender, "{grammar}");
            assert_eq!(record.body, *body, "{grammar}");
        }
    }
}

#[test]
fn test_day_first_export_read_day_first() {
    let text = "13/01/23, 22:15 - Alice: late\n14/01/23, 07:00 - Bob: early\n";
    let chat = preprocess(text).unwrap();

    assert_eq!(
        chat.date_strategy(),
        DateStrategy::Template(FormatGrammar::UkTwentyFourHourComma)
    );
    assert_eq!(chat.records()[0].month_name, "January");
    assert_eq!(chat.records()[0].day_of_month, 13);
}

#[test]
fn test_ambiguous_dates_read_month_first() {
    let text = "1/5/23, 10:15 - Alice: hi\n2/5/23, 10:16 - Bob: hey\n";
    let chat = preprocess(text).unwrap();
    assert_eq!(chat.records()[0].month_number, 1);
    assert_eq!(chat.records()[0].day_of_month, 5);
}

// ============================================================================
// Determinism and ordering
// ============================================================================

#[test]
fn test_parsing_is_deterministic() {
    let text = render(FormatGrammar::Iso, &sample_messages(FormatGrammar::Iso));
    let first = preprocess(&text).unwrap();
    let second = preprocess(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_transcript_order_kept() {
    let text = "1/6/23, 9:00 AM - Bob: second\n1/5/23, 9:00 AM - Alice: first\n";
    let chat = preprocess(text).unwrap();
    assert_eq!(chat.records()[0].body, "second");
    assert_eq!(chat.sorted_by_timestamp()[0].body, "first");
}

// ============================================================================
// Minimum viable data
// ============================================================================

#[test]
fn test_one_record_is_insufficient() {
    let err = preprocess("1/5/23, 10:15 AM - Alice: alone\n").unwrap_err();
    assert!(matches!(
        err,
        ChatscopeError::InsufficientData {
            found: 1,
            required: 2
        }
    ));
    assert_eq!(err.stage(), Some(Stage::Validated));
}

#[test]
fn test_two_records_suffice() {
    assert_eq!(preprocess(END_TO_END).unwrap().len(), 2);
}

#[test]
fn test_custom_minimum() {
    let parser = TranscriptParser::with_config(ParserConfig::new().with_min_records(3));
    assert!(parser.parse_str(END_TO_END).unwrap_err().is_insufficient_data());

    let parser = TranscriptParser::with_config(ParserConfig::new().with_min_records(1));
    assert!(parser.parse_str("1/5/23, 10:15 AM - Alice: alone\n").is_ok());
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_unrecognized_format_generic_fallback() {
    let text = "(2023.01.15 22:15) - Alice: hi\n(2023.01.15 22:16) - Bob: hello\n";
    let chat = preprocess(text).unwrap();

    assert_eq!(chat.detected_grammar(), None);
    assert_eq!(chat.date_strategy(), DateStrategy::Flexible);
    assert_eq!(chat.records()[1].sender, "Bob");
    assert_eq!(chat.records()[1].minute, 16);
}

#[test]
fn test_unrecognized_and_unextractable() {
    let err = preprocess("Dear diary,\ntoday nothing happened.\n").unwrap_err();
    assert!(err.is_extraction_failure());
    assert_eq!(err.stage(), Some(Stage::Split));
}
