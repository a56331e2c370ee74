#![forbid(unsafe_code)]
//! Blockchain invoice tracker - terminal edition

use clap::Parser;
use colored::*;
use invoicechain::blockchain::Ledger;
use invoicechain::cli::{Session, SessionOptions};
use invoicechain::config::{init_logging, load_config, OutputFormat, DEFAULT_CONFIG_FILE};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Ledger display format, overrides the config file
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Log filter, e.g. "debug" or "invoicechain=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(level)?;

    let mut options = SessionOptions::from(&config);
    if let Some(format) = cli.format {
        options.format = format;
    }

    let stdin = io::stdin();
    let mut session = Session::new(Ledger::new(), stdin.lock(), io::stdout(), options);
    session.run()?;

    let ledger = session.into_ledger();
    let status = if ledger.is_valid() {
        "valid".green()
    } else {
        "invalid".red()
    };
    eprintln!("Session closed with {} block(s); chain is {}.", ledger.len(), status);

    Ok(())
}
