use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use super::{format_amount, Console, Input};
use crate::error::TrackerError;
use crate::filter::{self, FilterKind};
use crate::ledger;
use crate::models::User;
use crate::registry::{LoginOutcome, Registry};
use crate::store::{self, ExpenseUpdate};
use crate::validate;

enum MenuExit {
    Logout,
    Quit,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Start menu loop: register, login, exit.
pub(crate) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> Result<()> {
    loop {
        console.header("EXPENSE TRACKER")?;
        console.say("1 - Register an account")?;
        console.say("2 - Login")?;
        console.say("3 - Exit")?;

        let session = match menu_choice(console, 1, 3)? {
            1 => register_flow(console, registry)?,
            2 => login_flow(console, registry)?,
            _ => {
                console.say("Thank you for using the expense tracker. Goodbye!")?;
                return Ok(());
            }
        };

        if let Some(index) = session {
            if let MenuExit::Quit = main_menu(console, registry, index)? {
                console.say("Exiting the program ...")?;
                return Ok(());
            }
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    index: usize,
) -> Result<MenuExit> {
    loop {
        let username = match registry.user(index) {
            Some(user) => user.username.clone(),
            None => return Ok(MenuExit::Logout),
        };

        console.header("EXPENSE TRACKER MAIN MENU")?;
        console.say("1 - Add expense")?;
        console.say("2 - View expenses")?;
        console.say("3 - Modify expenses")?;
        console.say("4 - Manage budget")?;
        console.say("5 - Remove expenses")?;
        console.say("6 - Generate report")?;
        console.say("7 - Logout")?;
        console.say("8 - Exit")?;
        console.say(&format!("\nHello, '{username}'!"))?;

        let choice = menu_choice(console, 1, 8)?;
        let Some(user) = registry.user_mut(index) else {
            return Ok(MenuExit::Logout);
        };

        match choice {
            1 => add_flow(console, user)?,
            2 => view_flow(console, user)?,
            3 => modify_flow(console, user)?,
            4 => budget_flow(console, user)?,
            5 => remove_flow(console, user)?,
            6 => report_flow(console, user)?,
            7 => {
                console.say("Logging out, returning to the start screen ...")?;
                console.pause()?;
                return Ok(MenuExit::Logout);
            }
            _ => return Ok(MenuExit::Quit),
        }
    }
}

fn menu_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    min: i64,
    max: i64,
) -> Result<i64> {
    loop {
        let line = console.ask("> Please input your choice")?;
        match line.parse::<i64>() {
            Ok(value) if validate::range(value, min, max).is_ok() => return Ok(value),
            _ => console.say("Invalid choice. Please try again.")?,
        }
    }
}

fn cancelled<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("> Operation cancelled. Redirecting to the main menu ...")?;
    console.pause()
}

// ── registration / login ─────────────────────────────────────

fn register_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> Result<Option<usize>> {
    console.header("REGISTER USER")?;
    console.say("> Please enter the following credentials (case sensitive).")?;
    console.say("> Input 'x' to cancel anytime.")?;

    let username = loop {
        match console.prompt("\nEnter username")? {
            Input::Cancelled => return Ok(None),
            Input::Value(raw) => {
                let checked = validate::username(&raw).and_then(|()| {
                    if registry.is_taken(&raw) {
                        Err(TrackerError::DuplicateUsername)
                    } else {
                        Ok(())
                    }
                });
                match checked {
                    Ok(()) => break raw,
                    Err(error) => console.report(&error)?,
                }
            }
        }
    };

    let password = loop {
        match console.prompt("Enter password")? {
            Input::Cancelled => return Ok(None),
            Input::Value(raw) => match validate::password(&raw) {
                Ok(()) => break raw,
                Err(error) => console.report(&error)?,
            },
        }
    };

    let budget = loop {
        match console.prompt("Enter initial budget")? {
            Input::Cancelled => return Ok(None),
            Input::Value(raw) => {
                let checked = validate::no_spaces(&raw).and_then(|()| validate::parse_amount(&raw));
                match checked {
                    Ok(value) => break value,
                    Err(error) => console.report(&error)?,
                }
            }
        }
    };

    console.say("\nPlease confirm the details below:")?;
    console.say(&format!("Username: {username}"))?;
    console.say(&format!("Password: {password}"))?;
    console.say(&format!("Initial budget: {}", format_amount(budget)))?;

    if !console.confirm("\n> Confirm registration?")? {
        console.say("> Redirecting to the start menu ...")?;
        console.pause()?;
        return Ok(None);
    }

    match registry.register(&username, &password, budget) {
        Ok(()) => {
            console.say(&format!("\n> Account successfully registered for: {username}"))?;
            match registry.login(&username, &password) {
                LoginOutcome::Success(index) => {
                    console.say(&format!("Welcome, {username}!"))?;
                    console.pause()?;
                    Ok(Some(index))
                }
                // A freshly registered account always logs in.
                _ => Ok(None),
            }
        }
        Err(error) => {
            console.report(&error)?;
            console.pause()?;
            Ok(None)
        }
    }
}

fn login_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> Result<Option<usize>> {
    console.header("LOG IN")?;
    console.say("> Please enter the following credentials (case sensitive).")?;
    console.say("> Input 'x' to cancel anytime.")?;

    let username = match console.prompt("\nEnter username")? {
        Input::Cancelled => return Ok(None),
        Input::Value(raw) => raw,
    };
    let password = match console.prompt("Enter password")? {
        Input::Cancelled => return Ok(None),
        Input::Value(raw) => raw,
    };

    match registry.login(&username, &password) {
        LoginOutcome::Success(index) => {
            console.say(&format!("Welcome, {username}!"))?;
            Ok(Some(index))
        }
        LoginOutcome::WrongPassword => {
            console.say("Invalid password!")?;
            console.pause()?;
            Ok(None)
        }
        LoginOutcome::UnknownUser => {
            console.say("User doesn't exist.")?;
            console.pause()?;
            Ok(None)
        }
    }
}

// ── add ───────────────────────────────────────────────────────

fn add_flow<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &mut User) -> Result<()> {
    loop {
        console.header("ADD EXPENSE")?;
        console.say("> Please enter the following expense details to add.")?;
        console.say("> Input 'x' to cancel anytime.")?;
        console.say(&format!(
            "CURRENT BUDGET: {}",
            format_amount(ledger::remaining(user))
        ))?;

        let amount = loop {
            match console.prompt("\nAMOUNT")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) => match validate::parse_amount(&raw) {
                    Ok(value) if ledger::can_afford(user, value) => break value,
                    Ok(_) => console.report(&TrackerError::InsufficientBudget)?,
                    Err(error) => console.report(&error)?,
                },
            }
        };

        let category = loop {
            match console.prompt("CATEGORY")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) => match validate::not_empty(&raw) {
                    Ok(()) => break raw,
                    Err(error) => console.report(&error)?,
                },
            }
        };

        let date = loop {
            match console.prompt("DATE (YYYY-MM-DD)")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) => {
                    let checked = validate::parse_date(&raw)
                        .and_then(|parsed| validate::not_future(parsed, today()));
                    match checked {
                        Ok(()) => break raw,
                        Err(error) => console.report(&error)?,
                    }
                }
            }
        };

        match store::add(user, &category, amount, &date, today()) {
            Ok(id) => {
                console.say("\n> Expense added successfully!")?;
                console.say(&format!("EXPENSE ID: {id}"))?;
                console.say(&format!("AMOUNT: {}", format_amount(amount)))?;
                console.say(&format!("CATEGORY: {category}"))?;
                console.say(&format!("DATE: {date}"))?;
                console.say(&format!(
                    "\nREMAINING BUDGET: {}",
                    format_amount(ledger::remaining(user))
                ))?;
            }
            Err(error) => console.report(&error)?,
        }

        if !console.confirm("\n> Add another expense?")? {
            console.say("> Redirecting to the main menu ...")?;
            console.pause()?;
            return Ok(());
        }
    }
}

// ── view ──────────────────────────────────────────────────────

fn view_flow<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &User) -> Result<()> {
    loop {
        console.header("VIEW EXPENSES")?;
        if no_expenses_notice(console, user)? {
            return Ok(());
        }

        let Some(kind) = pick_filter(console, user)? else {
            return Ok(());
        };
        render_report(console, user, &kind)?;

        if !console.confirm("\n> View in another display type?")? {
            console.say("> Redirecting to the main menu ...")?;
            console.pause()?;
            return Ok(());
        }
    }
}

fn no_expenses_notice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> Result<bool> {
    if user.expenses.is_empty() {
        console.say("> You do not have any expense entries yet.")?;
        console.say("> Redirecting to the main menu ...")?;
        console.pause()?;
        return Ok(true);
    }
    Ok(false)
}

fn pick_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> Result<Option<FilterKind>> {
    loop {
        console.say("\n> Select display type to view your expenses:")?;
        console.say("> Input 'x' to cancel anytime.")?;
        console.say("1 - Category")?;
        console.say("2 - Weekly")?;
        console.say("3 - Monthly")?;
        console.say("4 - Yearly")?;
        console.say("5 - View all")?;

        let line = match console.prompt("CHOICE")? {
            Input::Cancelled => return Ok(None),
            Input::Value(raw) => raw,
        };
        let choice = match line.parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                console.say("Invalid choice! Please enter a number between 1 and 5.")?;
                continue;
            }
        };

        let kind = match choice {
            1 => match pick_category(console, user)? {
                Some(name) => FilterKind::Category(name),
                None => return Ok(None),
            },
            2 => FilterKind::Weekly,
            3 => match pick_month(console)? {
                Some(month) => FilterKind::Monthly(month),
                None => return Ok(None),
            },
            4 => FilterKind::Yearly,
            5 => FilterKind::All,
            _ => {
                console.say("Invalid choice! Please select a valid option.")?;
                continue;
            }
        };
        return Ok(Some(kind));
    }
}

fn pick_month<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<u32>> {
    loop {
        match console.prompt("> Enter the month (1 - 12)")? {
            Input::Cancelled => return Ok(None),
            Input::Value(raw) => {
                if let Ok(month) = raw.parse::<u32>() {
                    if validate::range(i64::from(month), 1, 12).is_ok() {
                        return Ok(Some(month));
                    }
                }
                console.report(&TrackerError::OutOfRange { min: 1, max: 12 })?;
            }
        }
    }
}

fn pick_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> Result<Option<String>> {
    console.say("\n> Your available categories:")?;
    console.say("---------------------------------")?;
    for name in filter::categories(&user.expenses) {
        console.say(&name)?;
    }
    match console.prompt("\nCATEGORY")? {
        Input::Cancelled => Ok(None),
        Input::Value(raw) => Ok(Some(raw)),
    }
}

fn render_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
    kind: &FilterKind,
) -> Result<Decimal> {
    let report = filter::select(&user.expenses, kind, today());
    if report.found {
        console.expense_table(&report.matches)?;
    } else {
        console.say("> No matching expenses.")?;
    }
    Ok(report.total)
}

// ── modify ────────────────────────────────────────────────────

fn modify_flow<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &mut User) -> Result<()> {
    loop {
        console.header("MODIFY EXPENSE")?;
        if no_expenses_notice(console, user)? {
            return Ok(());
        }

        let Some(kind) = pick_filter(console, user)? else {
            return Ok(());
        };
        render_report(console, user, &kind)?;

        let Some(id) = prompt_id(console, "\n> Input expense ID to modify")? else {
            return Ok(());
        };
        let current = match store::find(user, id) {
            Ok(expense) => expense.clone(),
            Err(error) => {
                console.report(&error)?;
                console.pause()?;
                return Ok(());
            }
        };

        console.say("\nCurrent details:")?;
        console.expense_table(&[&current])?;
        console.say("\nEnter new details (leave blank to retain the current value):")?;

        // The record under edit gives its own amount back to the ceiling.
        let ceiling = ledger::remaining(user) + current.amount;

        let amount = loop {
            match console.prompt("New amount")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) if raw.is_empty() => break None,
                Input::Value(raw) => match validate::parse_amount(&raw) {
                    Ok(value) if value <= ceiling => break Some(value),
                    Ok(_) => console.report(&TrackerError::InsufficientBudget)?,
                    Err(error) => console.report(&error)?,
                },
            }
        };

        let category = loop {
            match console.prompt("New category")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) if raw.is_empty() => break None,
                Input::Value(raw) => {
                    let checked =
                        validate::not_empty(&raw).and_then(|()| validate::category(&raw));
                    match checked {
                        Ok(()) => break Some(raw),
                        Err(error) => console.report(&error)?,
                    }
                }
            }
        };

        let date = loop {
            match console.prompt("New date (YYYY-MM-DD)")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) if raw.is_empty() => break None,
                Input::Value(raw) => {
                    let checked = validate::parse_date(&raw)
                        .and_then(|parsed| validate::not_future(parsed, today()));
                    match checked {
                        Ok(()) => break Some(raw),
                        Err(error) => console.report(&error)?,
                    }
                }
            }
        };

        let update = ExpenseUpdate {
            amount,
            category,
            date,
        };
        match store::modify(user, id, update, today()) {
            Ok(()) => {
                console.say("\n> Expense modified successfully!")?;
                if let Ok(updated) = store::find(user, id) {
                    let row = updated.clone();
                    console.expense_table(&[&row])?;
                }
                console.say(&format!(
                    "\nREMAINING BUDGET: {}",
                    format_amount(ledger::remaining(user))
                ))?;
            }
            Err(error) => console.report(&error)?,
        }

        if !console.confirm("\n> Modify another expense?")? {
            console.say("> Redirecting to the main menu ...")?;
            console.pause()?;
            return Ok(());
        }
    }
}

fn prompt_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<Option<u32>> {
    loop {
        match console.prompt(&format!("{label} (or '0' to cancel)"))? {
            Input::Cancelled => return Ok(None),
            Input::Value(raw) => match raw.parse::<u32>() {
                Ok(0) => return Ok(None),
                Ok(id) => return Ok(Some(id)),
                Err(_) => console.report(&TrackerError::NotANumber)?,
            },
        }
    }
}

// ── remove ────────────────────────────────────────────────────

fn remove_flow<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &mut User) -> Result<()> {
    loop {
        console.header("REMOVE EXPENSE")?;
        if no_expenses_notice(console, user)? {
            return Ok(());
        }

        let Some(kind) = pick_filter(console, user)? else {
            return Ok(());
        };
        render_report(console, user, &kind)?;

        let Some(id) = prompt_id(console, "\n> Enter the ID of the expense to delete")? else {
            return Ok(());
        };
        let target = match store::find(user, id) {
            Ok(expense) => expense.clone(),
            Err(error) => {
                console.report(&error)?;
                console.pause()?;
                return Ok(());
            }
        };

        console.say("\nExpense details:")?;
        console.expense_table(&[&target])?;

        if console.confirm("\n> Delete this expense?")? {
            match store::remove(user, id) {
                Ok(_) => console.say("\n> Expense deleted successfully!")?,
                Err(error) => console.report(&error)?,
            }
        } else {
            console.say("\n> Deletion cancelled.")?;
        }

        console.say(&format!(
            "\nCURRENT BUDGET: {}",
            format_amount(ledger::remaining(user))
        ))?;

        if !console.confirm("\n> Delete another expense?")? {
            console.say("> Redirecting to the main menu ...")?;
            console.pause()?;
            return Ok(());
        }
    }
}

// ── budget ────────────────────────────────────────────────────

fn budget_flow<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &mut User) -> Result<()> {
    console.header("MANAGE BUDGET")?;
    console.say(&format!(
        "CURRENT BUDGET: {}",
        format_amount(ledger::remaining(user))
    ))?;

    if console.confirm("\n> Modify existing budget?")? {
        loop {
            match console.prompt("\n> Input the amount of the new budget")? {
                Input::Cancelled => return cancelled(console),
                Input::Value(raw) => {
                    let checked = validate::parse_amount(&raw)
                        .and_then(|value| ledger::set_budget(user, value));
                    match checked {
                        Ok(()) => {
                            console.say("> Successfully changed the budget!")?;
                            console.say(&format!(
                                "\nCURRENT BUDGET: {}",
                                format_amount(ledger::remaining(user))
                            ))?;
                            break;
                        }
                        Err(error) => console.report(&error)?,
                    }
                }
            }
        }
    } else {
        console.say("\n> Redirecting to the main menu ...")?;
    }
    console.pause()
}

// ── report ────────────────────────────────────────────────────

fn report_flow<R: BufRead, W: Write>(console: &mut Console<R, W>, user: &User) -> Result<()> {
    loop {
        console.header("EXPENSE REPORT")?;
        if no_expenses_notice(console, user)? {
            return Ok(());
        }

        let Some(kind) = pick_filter(console, user)? else {
            return Ok(());
        };
        let total = render_report(console, user, &kind)?;

        console.say(&format!("\nTOTAL EXPENSE: {}", format_amount(total)))?;
        console.say(&format!(
            "CURRENT BUDGET: {}",
            format_amount(ledger::remaining(user))
        ))?;

        if console.confirm("\n> Return to main menu?")? {
            console.pause()?;
            return Ok(());
        }
    }
}
