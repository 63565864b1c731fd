use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::TrackerError;

/// Shape only ("four digits, dash, two, dash, two"); calendar validity is
/// checked separately by [`parse_date`], so "2024-13-40" passes here.
/// ASCII classes: the unicode tables are compiled out of the regex crate.
#[allow(clippy::expect_used)]
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("literal pattern compiles")
});

pub(crate) fn not_empty(input: &str) -> Result<(), TrackerError> {
    if input.is_empty() {
        return Err(TrackerError::EmptyInput);
    }
    Ok(())
}

/// Digits with at most one '.', non-empty, not leading with '.'.
/// No sign: amounts and budgets are entered as plain magnitudes.
pub(crate) fn numeric(input: &str) -> Result<(), TrackerError> {
    if input.is_empty() || input.starts_with('.') {
        return Err(TrackerError::NotANumber);
    }
    let mut seen_decimal = false;
    for c in input.chars() {
        if c.is_ascii_digit() {
            continue;
        }
        if c == '.' && !seen_decimal {
            seen_decimal = true;
            continue;
        }
        return Err(TrackerError::NotANumber);
    }
    Ok(())
}

pub(crate) fn parse_amount(input: &str) -> Result<Decimal, TrackerError> {
    numeric(input)?;
    input.parse::<Decimal>().map_err(|_| TrackerError::NotANumber)
}

pub(crate) fn range(value: i64, min: i64, max: i64) -> Result<(), TrackerError> {
    if value < min || value > max {
        return Err(TrackerError::OutOfRange { min, max });
    }
    Ok(())
}

pub(crate) fn no_spaces(input: &str) -> Result<(), TrackerError> {
    if input.contains(' ') {
        return Err(TrackerError::ContainsSpace);
    }
    Ok(())
}

pub(crate) fn username(name: &str) -> Result<(), TrackerError> {
    if name.is_empty() {
        return Err(TrackerError::InvalidUsername("cannot be empty"));
    }
    if name.starts_with(' ') || name.ends_with(' ') {
        return Err(TrackerError::InvalidUsername(
            "cannot have leading or trailing spaces",
        ));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TrackerError::InvalidUsername(
            "can only contain letters and numbers",
        ));
    }
    // Already implied by the alphanumeric check; kept as an explicit guard.
    if name.contains(' ') {
        return Err(TrackerError::InvalidUsername("cannot contain spaces"));
    }
    Ok(())
}

pub(crate) fn password(input: &str) -> Result<(), TrackerError> {
    if input.is_empty() || input.contains(' ') {
        return Err(TrackerError::InvalidPassword);
    }
    Ok(())
}

/// Letters, digits, and spaces only. Applied when a category is edited;
/// add accepts any non-empty text.
pub(crate) fn category(input: &str) -> Result<(), TrackerError> {
    if input.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        Ok(())
    } else {
        Err(TrackerError::InvalidCategory)
    }
}

pub(crate) fn date_format(input: &str) -> Result<(), TrackerError> {
    if DATE_SHAPE.is_match(input) {
        Ok(())
    } else {
        Err(TrackerError::BadDateFormat)
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, TrackerError> {
    date_format(input)?;
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| TrackerError::BadDateFormat)
}

pub(crate) fn not_future(date: NaiveDate, today: NaiveDate) -> Result<(), TrackerError> {
    if date > today {
        return Err(TrackerError::FutureDate);
    }
    Ok(())
}

pub(crate) fn is_username_taken(taken: &BTreeSet<String>, name: &str) -> bool {
    taken.contains(name)
}

/// Insert-if-absent against the set of accepted usernames.
pub(crate) fn claim_username(
    taken: &mut BTreeSet<String>,
    name: &str,
) -> Result<(), TrackerError> {
    if is_username_taken(taken, name) {
        return Err(TrackerError::DuplicateUsername);
    }
    taken.insert(name.to_string());
    Ok(())
}

/// ASCII case fold for case-insensitive category matching.
pub(crate) fn fold(input: &str) -> String {
    input.to_ascii_lowercase()
}

#[cfg(test)]
mod tests;
