#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── not_empty / no_spaces / range ─────────────────────────────

#[test]
fn test_not_empty() {
    assert!(not_empty("a").is_ok());
    assert_eq!(not_empty(""), Err(TrackerError::EmptyInput));
}

#[test]
fn test_no_spaces() {
    assert!(no_spaces("abc").is_ok());
    assert_eq!(no_spaces("a b"), Err(TrackerError::ContainsSpace));
    assert_eq!(no_spaces(" "), Err(TrackerError::ContainsSpace));
}

#[test]
fn test_range() {
    assert!(range(1, 1, 12).is_ok());
    assert!(range(12, 1, 12).is_ok());
    assert_eq!(range(0, 1, 12), Err(TrackerError::OutOfRange { min: 1, max: 12 }));
    assert_eq!(range(13, 1, 12), Err(TrackerError::OutOfRange { min: 1, max: 12 }));
}

// ── numeric / parse_amount ────────────────────────────────────

#[test]
fn test_numeric_accepts() {
    for s in ["0", "7", "42", "3.14", "100.00", "0.5"] {
        assert!(numeric(s).is_ok(), "should accept {s:?}");
    }
}

#[test]
fn test_numeric_rejects() {
    for s in ["", ".", ".5", "1.2.3", "12a", "a12", "-1", "1 2", "1,000"] {
        assert_eq!(numeric(s), Err(TrackerError::NotANumber), "should reject {s:?}");
    }
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("50.00").unwrap(), dec!(50.00));
    assert_eq!(parse_amount("0").unwrap(), dec!(0));
    assert_eq!(parse_amount("abc"), Err(TrackerError::NotANumber));
    assert_eq!(parse_amount(".5"), Err(TrackerError::NotANumber));
}

// ── username / password / category ────────────────────────────

#[test]
fn test_username_accepts_alphanumeric() {
    assert!(username("ana42").is_ok());
    assert!(username("A").is_ok());
}

#[test]
fn test_username_rejects() {
    assert!(username("").is_err());
    assert!(username(" ana").is_err());
    assert!(username("ana ").is_err());
    assert!(username("an a").is_err());
    assert!(username("ana!").is_err());
    assert!(username("an_a").is_err());
}

#[test]
fn test_password() {
    assert!(password("hunter2").is_ok());
    assert_eq!(password(""), Err(TrackerError::InvalidPassword));
    assert_eq!(password("a b"), Err(TrackerError::InvalidPassword));
}

#[test]
fn test_category() {
    assert!(category("Food").is_ok());
    assert!(category("Food and Drink").is_ok());
    assert!(category("Taxi 2024").is_ok());
    assert_eq!(category("Food!"), Err(TrackerError::InvalidCategory));
    assert_eq!(category("caf\u{e9}"), Err(TrackerError::InvalidCategory));
}

// ── dates ─────────────────────────────────────────────────────

#[test]
fn test_date_format_shape_only() {
    assert!(date_format("2024-01-15").is_ok());
    // Shape check does not look at the calendar.
    assert!(date_format("2024-13-40").is_ok());

    assert_eq!(date_format("2024-1-15"), Err(TrackerError::BadDateFormat));
    assert_eq!(date_format("15-01-2024"), Err(TrackerError::BadDateFormat));
    assert_eq!(date_format("2024/01/15"), Err(TrackerError::BadDateFormat));
    assert_eq!(date_format(""), Err(TrackerError::BadDateFormat));
}

#[test]
fn test_date_format_ascii_digits_only() {
    // The shape check runs without the regex crate's unicode tables, so
    // it must both accept plain ASCII digits and reject non-ASCII ones.
    assert!(date_format("2024-01-15").is_ok());
    assert!(date_format("0001-01-01").is_ok());
    assert_eq!(
        date_format("\u{0662}\u{0660}\u{0662}\u{0664}-01-15"),
        Err(TrackerError::BadDateFormat)
    );
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-01-15").unwrap(), date(2024, 1, 15));
    // Correct shape, impossible calendar date.
    assert_eq!(parse_date("2024-13-01"), Err(TrackerError::BadDateFormat));
    assert_eq!(parse_date("2023-02-29"), Err(TrackerError::BadDateFormat));
}

#[test]
fn test_not_future() {
    let today = date(2024, 6, 15);
    assert!(not_future(date(2024, 6, 15), today).is_ok());
    assert!(not_future(date(2024, 6, 14), today).is_ok());
    assert_eq!(
        not_future(date(2024, 6, 16), today),
        Err(TrackerError::FutureDate)
    );
}

// ── username set ──────────────────────────────────────────────

#[test]
fn test_claim_username() {
    let mut taken = BTreeSet::new();
    assert!(!is_username_taken(&taken, "ana"));
    assert!(claim_username(&mut taken, "ana").is_ok());
    assert!(is_username_taken(&taken, "ana"));
    assert_eq!(
        claim_username(&mut taken, "ana"),
        Err(TrackerError::DuplicateUsername)
    );
    // Case sensitive, like login.
    assert!(claim_username(&mut taken, "Ana").is_ok());
}

#[test]
fn test_fold() {
    assert_eq!(fold("FoOd"), "food");
    assert_eq!(fold("TRANSPORT"), "transport");
}
