//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions that might not be covered by
//! regular unit and integration tests.

use chatlens::config::ParserConfig;
use chatlens::preprocess::{DateFormat, Preprocessor};
use chatlens::prelude::*;
use chatlens::stats::Selection;

fn parse(export: &str) -> Transcript {
    Preprocessor::new().preprocess(export).unwrap()
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let export = "15/1/2024, 10:30 - Иван: Привет мир!\n\
                  15/1/2024, 10:31 - 村上: こんにちは世界！\n\
                  15/1/2024, 10:32 - محمد: مرحبا بالعالم";
    let transcript = parse(export);

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.records()[0].sender, Sender::named("Иван"));
    assert_eq!(transcript.records()[1].body, "こんにちは世界！");
    assert_eq!(transcript.senders(), vec!["Иван", "محمد", "村上"]);
}

#[test]
fn test_emoji_in_sender_name() {
    let export = "15/1/2024, 10:30 - 🔥FireUser🔥: hello";
    let transcript = parse(export);
    assert_eq!(transcript.records()[0].sender, Sender::named("🔥FireUser🔥"));
}

#[test]
fn test_zwj_emoji_sequences_count_per_scalar() {
    // Family emoji is several scalars joined by ZWJ; the char-by-char scan
    // counts the visible member emoji, never panics mid-cluster
    let export = "15/1/2024, 10:30 - Alice: 👨‍👩‍👧";
    let transcript = parse(export);
    let emoji = emoji_helper(&Selection::Overall, &transcript);
    assert!(!emoji.is_empty());
}

#[test]
fn test_colon_in_body_keeps_first_split() {
    let export = "15/1/2024, 10:30 - Alice: note: remember the plan";
    let transcript = parse(export);

    let record = &transcript.records()[0];
    assert_eq!(record.sender, Sender::named("Alice"));
    assert_eq!(record.body, "note: remember the plan");
}

// =========================================================================
// Malformed input
// =========================================================================

#[test]
fn test_malformed_lines_do_not_abort() {
    let export = "15/1/2024, 10:30 - Alice: first\n\
                  99/99/9999, 99:99 - Ghost: never\n\
                  15/1/2024, 10:31 - Bob: second";
    let transcript = parse(export);

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.skipped_lines(), 1);
    assert_eq!(transcript.records()[1].sender, Sender::named("Bob"));
}

#[test]
fn test_strict_mode_reports_line_number() {
    let export = "15/1/2024, 10:30 - Alice: ok\n99/99/9999, 99:99 - Ghost: bad";
    let preprocessor = Preprocessor::with_config(ParserConfig::new().with_skip_invalid(false));

    let err = preprocessor.preprocess(export).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("Line 2"));
}

#[test]
fn test_not_an_export_is_invalid_format() {
    let err = Preprocessor::new()
        .preprocess("just some\nrandom prose\nwith no timestamps")
        .unwrap_err();
    assert!(err.is_invalid_format());
}

#[test]
fn test_invalid_utf8_bytes() {
    let err = Preprocessor::new()
        .preprocess_bytes(&[0x31, 0x2f, 0xff, 0xfe])
        .unwrap_err();
    assert!(matches!(err, ChatlensError::Utf8 { .. }));
}

#[test]
fn test_leading_junk_before_first_boundary_is_dropped() {
    let export = "junk line one\njunk line two\n15/1/2024, 10:30 - Alice: hi";
    let transcript = parse(export);
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.records()[0].body, "hi");
}

// =========================================================================
// Timestamp format behavior
// =========================================================================

#[test]
fn test_ambiguous_slash_date_resolves_day_first() {
    // 3/4/2024 could be March 4 or April 3; the 24-hour variant is
    // documented day-first
    let transcript = parse("3/4/2024, 10:00 - Alice: hi\n3/4/2024, 11:00 - Bob: hey");
    assert_eq!(transcript.records()[0].month_number, 4);
    assert_eq!(transcript.records()[0].day, 3);
}

#[test]
fn test_us_ampm_resolves_month_first() {
    let transcript = parse("3/4/24, 10:00 AM - Alice: hi\n3/4/24, 11:00 AM - Bob: hey");
    assert_eq!(transcript.records()[0].month_number, 3);
    assert_eq!(transcript.records()[0].day, 4);
}

#[test]
fn test_narrow_no_break_space_meridiem() {
    let export = "1/15/24, 9:41\u{202f}AM - Alice: from an iPhone";
    let transcript = parse(export);
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.records()[0].hour, 9);
}

#[test]
fn test_midnight_and_noon_in_twelve_hour_format() {
    let export = "1/15/24, 12:00 AM - Alice: midnight\n1/15/24, 12:00 PM - Bob: noon";
    let transcript = parse(export);
    assert_eq!(transcript.records()[0].hour, 0);
    assert_eq!(transcript.records()[0].period, "0-1");
    assert_eq!(transcript.records()[1].hour, 12);
}

#[test]
fn test_seconds_in_timestamp_accepted() {
    let transcript = parse("15/1/2024, 10:30:45 - Alice: hi\n15/1/2024, 10:31:02 - Bob: hey");
    assert_eq!(transcript.len(), 2);
}

#[test]
fn test_forced_format_skips_detection() {
    // One line would not be enough for ambiguity, but detection is bypassed
    let preprocessor =
        Preprocessor::with_config(ParserConfig::new().with_format(DateFormat::Dot24));
    let transcript = preprocessor
        .preprocess("15.01.24, 10:30 - Alice: hi")
        .unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.records()[0].year, 2024);
}

// =========================================================================
// Sparse data
// =========================================================================

#[test]
fn test_system_only_chat() {
    let export = "15/1/2024, 10:30 - Alice created group \"x\"\n\
                  15/1/2024, 10:31 - Bob joined using this group's invite link";
    let transcript = parse(export);

    assert_eq!(transcript.len(), 2);
    assert!(transcript.senders().is_empty());

    let stats = fetch_stats(&Selection::Overall, &transcript);
    assert_eq!(stats.messages, 2);

    assert!(most_busy_users(&transcript).top.is_empty());
    assert!(most_common_words(&Selection::Overall, &transcript, Lexicon::builtin()).is_empty());
    assert!(emoji_helper(&Selection::Overall, &transcript).is_empty());
    assert!(
        create_wordcloud(
            &Selection::Overall,
            &transcript,
            Lexicon::builtin(),
            &WordcloudConfig::new()
        )
        .is_err()
    );
}

#[test]
fn test_unknown_user_selection_is_all_zeroes() {
    let transcript = parse("15/1/2024, 10:30 - Alice: hi");
    let selection = Selection::user("Nobody");

    assert_eq!(fetch_stats(&selection, &transcript).messages, 0);
    assert!(monthly_timeline(&selection, &transcript).is_empty());
    assert_eq!(activity_heatmap(&selection, &transcript).total(), 0);
}

#[test]
fn test_empty_and_whitespace_input() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n   \n").is_empty());
}

#[test]
fn test_interior_blank_lines_stay_in_body() {
    let export = "15/1/2024, 10:30 - Alice: first\n\nthird\n15/1/2024, 10:31 - Bob: ok";
    let transcript = parse(export);
    assert_eq!(transcript.records()[0].body, "first\n\nthird");
}
