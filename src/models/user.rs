use rust_decimal::Decimal;

use super::Expense;

/// One registered account. Lives for the whole process run; there is no
/// delete-account operation.
#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) username: String,
    /// Stored and compared as plain text; hashing is out of scope.
    pub(crate) password: String,
    /// The editable spending ceiling, not the remaining balance.
    pub(crate) budget: Decimal,
    /// Insertion order is display order for "view all".
    pub(crate) expenses: Vec<Expense>,
    next_expense_id: u32,
}

impl User {
    pub(crate) fn new(username: String, password: String, budget: Decimal) -> Self {
        Self {
            username,
            password,
            budget,
            expenses: Vec::new(),
            next_expense_id: 1,
        }
    }

    /// Hands out the next expense id. Monotonic for the life of the user,
    /// independent of the current collection size, so a deleted record's
    /// id can never be handed out again.
    pub(crate) fn take_expense_id(&mut self) -> u32 {
        let id = self.next_expense_id;
        self.next_expense_id += 1;
        id
    }

    pub(crate) fn verify_password(&self, input: &str) -> bool {
        self.password == input
    }
}
