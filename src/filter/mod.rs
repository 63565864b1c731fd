use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Expense;
use crate::validate;

/// The interchangeable "view expenses" rules. A closed enum dispatched
/// through [`select`]; every kind is read-only and keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilterKind {
    All,
    /// Inclusive 7-day window ending today.
    Weekly,
    /// Calendar month 1-12, current year only.
    Monthly(u32),
    /// Current calendar year.
    Yearly,
    /// Case-insensitive exact category match.
    Category(String),
}

#[derive(Debug)]
pub(crate) struct FilterReport<'a> {
    /// Matching records in their original insertion order.
    pub(crate) matches: Vec<&'a Expense>,
    pub(crate) total: Decimal,
    /// False means "no expenses" should be shown instead of an empty table.
    pub(crate) found: bool,
}

pub(crate) fn select<'a>(
    expenses: &'a [Expense],
    kind: &FilterKind,
    today: NaiveDate,
) -> FilterReport<'a> {
    let mut matches = Vec::new();
    let mut total = Decimal::ZERO;

    for expense in expenses {
        if keeps(expense, kind, today) {
            total += expense.amount;
            matches.push(expense);
        }
    }

    let found = !matches.is_empty();
    FilterReport {
        matches,
        total,
        found,
    }
}

/// Records whose stored date no longer parses are silently excluded from
/// the date-based views rather than erroring.
fn keeps(expense: &Expense, kind: &FilterKind, today: NaiveDate) -> bool {
    match kind {
        FilterKind::All => true,
        FilterKind::Weekly => expense
            .parsed_date()
            .is_some_and(|d| (0..=7).contains(&(today - d).num_days())),
        FilterKind::Monthly(month) => expense
            .parsed_date()
            .is_some_and(|d| d.month() == *month && d.year() == today.year()),
        FilterKind::Yearly => expense
            .parsed_date()
            .is_some_and(|d| d.year() == today.year()),
        FilterKind::Category(name) => validate::fold(&expense.category) == validate::fold(name),
    }
}

/// Distinct categories present, alphabetical. Shown before the category
/// view to aid selection.
pub(crate) fn categories(expenses: &[Expense]) -> BTreeSet<String> {
    expenses.iter().map(|e| e.category.clone()).collect()
}
