use thiserror::Error;

/// Every way user input can be rejected. The `Display` strings are printed
/// verbatim at the prompt that produced the rejection, and the prompt is
/// re-issued; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TrackerError {
    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Input must be a number (digits with at most one '.', not starting with '.').")]
    NotANumber,

    #[error("Input is out of valid range ({min} - {max}).")]
    OutOfRange { min: i64, max: i64 },

    #[error("Input cannot contain spaces.")]
    ContainsSpace,

    #[error("Invalid username: {0}.")]
    InvalidUsername(&'static str),

    #[error("Password cannot be empty or contain spaces.")]
    InvalidPassword,

    #[error("Username already exists. Please choose a different username.")]
    DuplicateUsername,

    #[error("Date must be a real date in YYYY-MM-DD format.")]
    BadDateFormat,

    #[error("Date cannot be in the future.")]
    FutureDate,

    #[error("Category can only contain letters, numbers, and spaces.")]
    InvalidCategory,

    #[error("Insufficient budget! Cannot exceed the available budget.")]
    InsufficientBudget,

    #[error("Budget cannot be negative!")]
    NegativeBudget,

    #[error("Expense ID {0} not found.")]
    RecordNotFound(u32),
}
