use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::ledger;
use crate::models::{Expense, User};
use crate::validate;

/// Field edits for [`modify`]; `None` retains the current value.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExpenseUpdate {
    pub(crate) amount: Option<Decimal>,
    pub(crate) category: Option<String>,
    pub(crate) date: Option<String>,
}

/// Validates and appends a new expense, returning its id. A rejected add
/// leaves the store untouched.
pub(crate) fn add(
    user: &mut User,
    category: &str,
    amount: Decimal,
    date: &str,
    today: NaiveDate,
) -> Result<u32, TrackerError> {
    validate::not_empty(category)?;
    if amount < Decimal::ZERO {
        return Err(TrackerError::NotANumber);
    }
    if !ledger::can_afford(user, amount) {
        return Err(TrackerError::InsufficientBudget);
    }
    let parsed = validate::parse_date(date)?;
    validate::not_future(parsed, today)?;

    let id = user.take_expense_id();
    user.expenses.push(Expense {
        id,
        category: category.to_string(),
        amount,
        date: date.to_string(),
    });
    Ok(id)
}

/// Linear scan by id.
pub(crate) fn find(user: &User, id: u32) -> Result<&Expense, TrackerError> {
    user.expenses
        .iter()
        .find(|e| e.id == id)
        .ok_or(TrackerError::RecordNotFound(id))
}

/// Applies a partial edit in place. Everything is validated up front so a
/// failed modify leaves the record exactly as it was. The id never changes.
pub(crate) fn modify(
    user: &mut User,
    id: u32,
    update: ExpenseUpdate,
    today: NaiveDate,
) -> Result<(), TrackerError> {
    let position = user
        .expenses
        .iter()
        .position(|e| e.id == id)
        .ok_or(TrackerError::RecordNotFound(id))?;
    let old_amount = user.expenses[position].amount;

    if let Some(amount) = update.amount {
        if amount < Decimal::ZERO {
            return Err(TrackerError::NotANumber);
        }
        // The record being edited is not counted against itself: the new
        // amount competes for remaining budget plus the amount it replaces.
        if amount > ledger::remaining(user) + old_amount {
            return Err(TrackerError::InsufficientBudget);
        }
    }
    if let Some(category) = update.category.as_deref() {
        validate::not_empty(category)?;
        validate::category(category)?;
    }
    if let Some(date) = update.date.as_deref() {
        let parsed = validate::parse_date(date)?;
        validate::not_future(parsed, today)?;
    }

    let expense = &mut user.expenses[position];
    if let Some(amount) = update.amount {
        expense.amount = amount;
    }
    if let Some(category) = update.category {
        expense.category = category;
    }
    if let Some(date) = update.date {
        expense.date = date;
    }
    Ok(())
}

/// Removes exactly the record with the given id, keeping the order of the
/// rest. Returns the removed record for the confirmation display.
pub(crate) fn remove(user: &mut User, id: u32) -> Result<Expense, TrackerError> {
    let position = user
        .expenses
        .iter()
        .position(|e| e.id == id)
        .ok_or(TrackerError::RecordNotFound(id))?;
    Ok(user.expenses.remove(position))
}
