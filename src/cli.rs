//! Interactive invoice-tracker session.
//!
//! The session owns one [`Ledger`] for its whole lifetime and feeds it from a
//! line-oriented command stream. Handlers take the ledger explicitly; there is
//! no process-wide state.

use crate::blockchain::{Block, Ledger};
use crate::config::{Config, OutputFormat};
use crate::display;
use crate::error::{LedgerError, Result};
use crate::transaction::parse_submission;
use colored::*;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

pub const ADD_SUCCESS: &str = "Transaction added to blockchain!";
pub const ADD_FAILURE: &str = "Please fill in all fields correctly.";
pub const CHAIN_VALID: &str = "Blockchain is valid";
pub const CHAIN_INVALID: &str = "Blockchain is invalid";

const HELP: &str = "\
Commands:
  add                               add a transaction (prompts for each field)
  add <sender>, <recipient>, <amt>  add a transaction inline
  show | ledger                     display every block
  validate                          check chain integrity
  help                              show this message
  quit | exit                       end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` means prompt for the fields.
    Add(Option<String>),
    Show,
    Validate,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = LedgerError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "add" if rest.is_empty() => Ok(Command::Add(None)),
            "add" => Ok(Command::Add(Some(rest.to_string()))),
            "show" | "ledger" => Ok(Command::Show),
            "validate" => Ok(Command::Validate),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(LedgerError::UnknownCommand(line.to_string())),
        }
    }
}

/// Validates the form fields and appends a single-transaction block.
pub fn add_transaction<'a>(
    ledger: &'a mut Ledger,
    sender: &str,
    recipient: &str,
    amount: &str,
) -> Result<&'a Block> {
    let tx = parse_submission(sender, recipient, amount)?;
    Ok(ledger.append(vec![tx]))
}

/// Splits `sender, recipient, amount` into its three fields.
pub fn parse_inline_fields(fields: &str) -> Result<(String, String, String)> {
    let parts: Vec<&str> = fields.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [sender, recipient, amount] => Ok((
            sender.to_string(),
            recipient.to_string(),
            amount.to_string(),
        )),
        _ => Err(LedgerError::InvalidInput(format!(
            "expected 'sender, recipient, amount', got {} field(s)",
            parts.len()
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub hash_width: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions::from(&Config::default())
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        SessionOptions {
            format: config.display.format,
            hash_width: config.display.hash_width,
        }
    }
}

pub struct Session<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W, options: SessionOptions) -> Self {
        Session {
            ledger,
            input,
            output,
            options,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Processes commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("invoice session started");
        writeln!(self.output, "{}", "Blockchain Invoice Tracker".bright_cyan().bold())?;
        writeln!(self.output, "Type 'help' for commands.")?;

        loop {
            self.prompt("> ")?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!(error = %e, "rejected command");
                    writeln!(self.output, "{}", e.to_string().red())?;
                }
            }
        }

        info!(blocks = self.ledger.len(), "invoice session ended");
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add(None) => self.add_from_form(),
            Command::Add(Some(fields)) => {
                let result = parse_inline_fields(&fields)
                    .and_then(|(s, r, a)| add_transaction(&mut self.ledger, &s, &r, &a).map(|_| ()));
                self.report_add(result)
            }
            Command::Show => self.show(),
            Command::Validate => self.validate(),
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn add_from_form(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Add a New Transaction".bright_green().underline())?;
        let Some(sender) = self.ask("Sender (Client Name): ")? else {
            return Ok(());
        };
        let Some(recipient) = self.ask("Recipient (Invoice ID): ")? else {
            return Ok(());
        };
        let Some(amount) = self.ask("Amount: ")? else {
            return Ok(());
        };

        let result = add_transaction(&mut self.ledger, &sender, &recipient, &amount).map(|_| ());
        self.report_add(result)
    }

    fn report_add(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", ADD_SUCCESS.green())?,
            Err(LedgerError::InvalidInput(reason)) => {
                writeln!(self.output, "{} ({})", ADD_FAILURE.red(), reason)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let snapshot = self.ledger.snapshot();
        let rendered = display::render(&snapshot, self.options.format, self.options.hash_width)?;
        writeln!(self.output, "{}", "Blockchain Ledger".bright_blue().bold())?;
        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }

    fn validate(&mut self) -> Result<()> {
        if self.ledger.is_valid() {
            writeln!(self.output, "{}", CHAIN_VALID.green().bold())?;
        } else {
            writeln!(self.output, "{}", CHAIN_INVALID.red().bold())?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        self.prompt(label)?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
