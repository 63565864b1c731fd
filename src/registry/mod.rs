use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::models::User;
use crate::validate;

/// All registered accounts for one process run. Built once in `main` and
/// passed by reference into the session layer; nothing survives exit.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    users: Vec<User>,
    taken: BTreeSet<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LoginOutcome {
    /// Index of the matched user.
    Success(usize),
    UnknownUser,
    WrongPassword,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Full credential validation plus the uniqueness claim. A rejected
    /// registration leaves every existing account untouched.
    pub(crate) fn register(
        &mut self,
        username: &str,
        password: &str,
        budget: Decimal,
    ) -> Result<(), TrackerError> {
        validate::username(username)?;
        validate::password(password)?;
        if budget < Decimal::ZERO {
            return Err(TrackerError::NegativeBudget);
        }
        validate::claim_username(&mut self.taken, username)?;
        self.users.push(User::new(
            username.to_string(),
            password.to_string(),
            budget,
        ));
        Ok(())
    }

    /// Exact, case-sensitive plaintext match.
    pub(crate) fn login(&self, username: &str, password: &str) -> LoginOutcome {
        match self.users.iter().position(|u| u.username == username) {
            Some(index) if self.users[index].verify_password(password) => {
                LoginOutcome::Success(index)
            }
            Some(_) => LoginOutcome::WrongPassword,
            None => LoginOutcome::UnknownUser,
        }
    }

    pub(crate) fn is_taken(&self, username: &str) -> bool {
        validate::is_username_taken(&self.taken, username)
    }

    pub(crate) fn user(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    pub(crate) fn user_mut(&mut self, index: usize) -> Option<&mut User> {
        self.users.get_mut(index)
    }
}

#[cfg(test)]
mod tests;
