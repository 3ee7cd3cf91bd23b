//! Estonian formatting integration tests
//!
//! Exercises the public API end to end

use chrono::{NaiveDate, NaiveTime};
use eesti_core::lang::{EstonianFormatter, Number, NumberExtractor, NumberPronouncer};
use eesti_core::{extract_number, nice_number, nice_time, pronounce_number, pronounce_ordinal};

#[test]
fn test_zero_and_negation() {
    assert_eq!(pronounce_number(0, 2), "null");

    for n in [1i64, 7, 19, 42, 100, 999, 1000, 123_456, 1_000_001] {
        assert_eq!(
            pronounce_number(-n, 2),
            format!("miinus {}", pronounce_number(n, 2))
        );
    }
}

#[test]
fn test_round_trip_single_words() {
    // The parser only knows 0..=10, so a one-word pronunciation comes back
    // as exactly its digits
    for n in 0..=10u32 {
        let words = pronounce_number(n, 2);
        assert_eq!(
            NumberExtractor::convert_words_to_numbers(&words),
            n.to_string(),
            "round trip of {} ({})",
            n,
            words
        );
    }
}

#[test]
fn test_round_trip_keeps_known_digits() {
    // "kakskümmend seitse" -> "kakskümmend 7"
    let rewritten = NumberExtractor::convert_words_to_numbers(&pronounce_number(27, 2));
    assert_eq!(rewritten, "kakskümmend 7");
}

#[test]
fn test_descending_scale_order() {
    assert_eq!(
        pronounce_ordinal(1983),
        "tuhande üheksasaja kaheksakümne kolmas"
    );
    assert_eq!(
        pronounce_number(1983, 2),
        "tuhat üheksasada kaheksakümmend kolm"
    );
    assert_eq!(
        pronounce_number(7_002_003_004i64, 2),
        "seitse miljardit kaks miljonit kolm tuhat neli"
    );
}

#[test]
fn test_out_of_range_degrades_to_digits() {
    let big = NumberPronouncer::MAX_MAGNITUDE as i128;
    assert_eq!(pronounce_number(big, 2), "1000000000000000000000000");
    assert_eq!(pronounce_number(1e25, 2), 1e25_f64.to_string());
}

#[test]
fn test_time_special_phrases() {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    assert_eq!(nice_time(&midnight, true, false, false), "kesköö");
    assert_eq!(nice_time(&noon, true, false, false), "keskpäev");
}

#[test]
fn test_time_leading_zero_word() {
    let dt = NaiveDate::from_ymd_opt(2017, 1, 31)
        .unwrap()
        .and_hms_opt(13, 2, 0)
        .unwrap();
    assert_eq!(nice_time(&dt, true, true, false), "kolmteist null kaks");
    assert_eq!(nice_time(&dt, true, false, false), "üks null kaks");
}

#[test]
fn test_extract_number_cases() {
    assert_eq!(extract_number("see on 7. test"), Some(Number::Int(7)));
    assert_eq!(extract_number("see on esimene test"), Some(Number::Int(1)));
    assert_eq!(extract_number("see on test"), None);
}

#[test]
fn test_fraction_cases() {
    assert_eq!(nice_number(0.5, true, &[]), "pool");
    assert_eq!(nice_number(0.25, true, &[]), "1 neljandik");
    assert_eq!(nice_number(1.25, true, &[]), "1 ja 1 neljandik");
    assert_eq!(nice_number(4.5, false, &[]), "4 1/2");
}

#[test]
fn test_formatter_from_config_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[number]").unwrap();
    writeln!(file, "places = 1").unwrap();
    writeln!(file, "[time]").unwrap();
    writeln!(file, "use_24hour = true").unwrap();
    file.flush().unwrap();

    let config = eesti_core::FormatConfig::load_from(file.path()).unwrap();
    let formatter = EstonianFormatter::new(config);

    assert_eq!(formatter.pronounce_number(3.14159), "kolm koma üks");
    let t = NaiveTime::from_hms_opt(19, 40, 0).unwrap();
    assert_eq!(formatter.nice_time(&t), "üheksateist nelikümmend");
    assert_eq!(
        formatter.nice_response("1. mai ja 2 ^ 8"),
        "esimene mai ja 2 astmes 8"
    );
}
