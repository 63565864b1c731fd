use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::models::User;

pub(crate) fn spent(user: &User) -> Decimal {
    user.expenses.iter().map(|e| e.amount).sum()
}

/// Budget ceiling minus everything recorded so far. Recomputed on every
/// call, never cached. Goes negative when the ceiling was lowered below
/// current spend; that is allowed and not retro-validated.
pub(crate) fn remaining(user: &User) -> Decimal {
    user.budget - spent(user)
}

pub(crate) fn set_budget(user: &mut User, value: Decimal) -> Result<(), TrackerError> {
    if value < Decimal::ZERO {
        return Err(TrackerError::NegativeBudget);
    }
    user.budget = value;
    Ok(())
}

pub(crate) fn can_afford(user: &User, amount: Decimal) -> bool {
    amount <= remaining(user)
}
