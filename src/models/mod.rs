mod expense;
mod user;

pub(crate) use expense::Expense;
pub(crate) use user::User;
