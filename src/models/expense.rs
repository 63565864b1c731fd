use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One recorded spend. The id is unique for the life of the owning user
/// and never reused, even after deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expense {
    pub(crate) id: u32,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    /// Kept as the validated "YYYY-MM-DD" text the user typed. Date-based
    /// filters re-parse on the fly and silently skip anything that no
    /// longer parses.
    pub(crate) date: String,
}

impl Expense {
    pub(crate) fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
