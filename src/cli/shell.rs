use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::domain::{Ledger, TransactionKind, format_cents, format_total, parse_cents};
use crate::io::{DATE_FORMAT, Exporter};

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    DisplayTransactions,
    TotalIncome,
    TotalExpenses,
    Export,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddTransaction),
            "2" => Some(MenuChoice::DisplayTransactions),
            "3" => Some(MenuChoice::TotalIncome),
            "4" => Some(MenuChoice::TotalExpenses),
            "5" => Some(MenuChoice::Export),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Personal Budget Tracker ---\n\
1. Add Transaction\n\
2. Display Transactions\n\
3. Show Total Income\n\
4. Show Total Expenses\n\
5. Save Transactions to CSV\n\
6. Exit\n";

/// Interactive menu loop over an owned ledger.
///
/// Reads one answer per line from `input` and writes prompts and results to
/// `output`, so it runs the same against a terminal, a script file or a test
/// buffer.
pub struct Shell<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run until the exit action or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(answer) = self.prompt("Choose an option: ")? else {
                debug!("input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::AddTransaction) => self.add_transaction()?,
                Some(MenuChoice::DisplayTransactions) => self.display_transactions()?,
                Some(MenuChoice::TotalIncome) => {
                    let total = self.ledger.total(&TransactionKind::Income);
                    writeln!(self.output, "Total Income: {}", format_total(total))?;
                }
                Some(MenuChoice::TotalExpenses) => {
                    let total = self.ledger.total(&TransactionKind::Expense);
                    writeln!(self.output, "Total Expenses: {}", format_total(total))?;
                }
                Some(MenuChoice::Export) => self.export()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn add_transaction(&mut self) -> Result<()> {
        let Some(raw_amount) = self.prompt("Enter amount: ")? else {
            return Ok(());
        };
        let amount = match parse_cents(&raw_amount) {
            Ok(amount) => amount,
            Err(err) => {
                writeln!(self.output, "Invalid amount '{raw_amount}': {err}")?;
                return Ok(());
            }
        };

        let category = self.prompt("Enter category: ")?.unwrap_or_default();
        let raw_kind = self
            .prompt("Enter type (income/expense): ")?
            .unwrap_or_default();

        let kind = TransactionKind::parse(&raw_kind);
        if !kind.is_known() {
            warn!(kind = %kind, "recording transaction with unrecognised type");
        }

        self.ledger.append(amount, category, kind);
        writeln!(self.output, "Transaction added!")?;
        Ok(())
    }

    fn display_transactions(&mut self) -> Result<()> {
        writeln!(self.output, "ID\tAmount\tCategory\tDate\t\tType")?;
        for transaction in self.ledger.list() {
            writeln!(
                self.output,
                "{}\t{}\t{}\t{}\t{}",
                transaction.id(),
                format_cents(transaction.amount()),
                transaction.category(),
                transaction.date().format(DATE_FORMAT),
                transaction.kind()
            )?;
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let filename = self
            .prompt("Enter filename (e.g., transactions.csv): ")?
            .unwrap_or_default();

        match Exporter::new(&self.ledger).export_file(&filename) {
            Ok(_) => writeln!(self.output, "Transactions saved to {filename}")?,
            Err(err) => writeln!(self.output, "Error saving transactions: {err}")?,
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
