use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::models::Expense;

pub(crate) mod session;


/// One line of user input at a free-text prompt.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Value(String),
    /// The `x`/`X` sentinel: abandon the current operation.
    Cancelled,
}

/// Line-oriented terminal collaborator. Generic over reader and writer so
/// tests can drive whole flows with in-memory cursors.
pub(crate) struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            anyhow::bail!("unexpected end of input");
        }
        Ok(line.trim().to_string())
    }

    /// Raw labeled prompt, no sentinel handling (menu choices).
    pub(crate) fn ask(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.writer, "{label}: ")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Free-text prompt honoring the `x`/`X` cancellation sentinel.
    pub(crate) fn prompt(&mut self, label: &str) -> anyhow::Result<Input> {
        let line = self.ask(label)?;
        if line.eq_ignore_ascii_case("x") {
            return Ok(Input::Cancelled);
        }
        Ok(Input::Value(line))
    }

    /// Case-insensitive Y/N; re-asks until one of the two is given.
    pub(crate) fn confirm(&mut self, label: &str) -> anyhow::Result<bool> {
        loop {
            write!(self.writer, "{label} (Y/N): ")?;
            self.writer.flush()?;
            match self.read_line()?.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.writer, "Invalid answer!")?,
            }
        }
    }

    pub(crate) fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Rejection message for a re-prompt loop.
    pub(crate) fn report(&mut self, error: &TrackerError) -> anyhow::Result<()> {
        writeln!(self.writer, "Error: {error}")?;
        writeln!(self.writer, "Please try again.")?;
        Ok(())
    }

    pub(crate) fn pause(&mut self) -> anyhow::Result<()> {
        write!(self.writer, "> Press Enter to continue ...")?;
        self.writer.flush()?;
        let mut line = String::new();
        // EOF here is fine; the caller is about to redraw anyway.
        let _ = self.reader.read_line(&mut line)?;
        Ok(())
    }

    /// Cosmetic only; failures (output not a terminal) are ignored.
    pub(crate) fn clear_screen(&mut self) {
        let _ = crossterm::execute!(
            self.writer,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0),
        );
    }

    pub(crate) fn header(&mut self, title: &str) -> anyhow::Result<()> {
        self.clear_screen();
        writeln!(self.writer, "================================================")?;
        writeln!(self.writer, "  {title}")?;
        writeln!(self.writer, "================================================")?;
        Ok(())
    }

    pub(crate) fn expense_table(&mut self, expenses: &[&Expense]) -> anyhow::Result<()> {
        writeln!(self.writer, "-------------------------------------------------------")?;
        writeln!(self.writer, "{:<6} {:>14}  {:<18} DATE", "ID", "AMOUNT", "CATEGORY")?;
        writeln!(self.writer, "-------------------------------------------------------")?;
        for expense in expenses {
            writeln!(
                self.writer,
                "{:<6} {:>14}  {:<18} {}",
                expense.id,
                format_amount(expense.amount),
                expense.category,
                expense.date,
            )?;
        }
        Ok(())
    }
}

/// Format an amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}
