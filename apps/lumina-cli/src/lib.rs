//! # Lumina CLI Library
//!
//! Argument parsing, logging setup and command dispatch for the `lumina`
//! binary. All invoice math is delegated to `lumina-core`.
//!
//! ## Module Organization
//! ```text
//! lumina_cli/
//! ├── lib.rs      ◄─── You are here (CLI definition, tracing, dispatch)
//! └── config.rs   ◄─── Environment configuration
//! ```

pub mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use lumina_core::summary::format_amount;
use lumina_core::{compute_amount, parse_numeric, to_words, Invoice, InvoiceSummary};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

/// Invoice calculations with amounts in words (Indian numbering).
#[derive(Debug, Parser)]
#[command(name = "lumina", version)]
pub struct Cli {
    /// GST percentage; overrides LUMINA_GST_RATE
    #[arg(long, global = true, value_name = "PERCENT")]
    pub tax_rate: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the display-ready summary of an invoice JSON file
    Summary {
        /// Path to the invoice JSON document
        path: PathBuf,
    },
    /// Spell an amount in words
    Words {
        /// Amount in rupees; paise are ignored
        amount: String,
    },
    /// Compute one line amount from quantity and rate
    Amount { quantity: String, rate: String },
}

/// Runs one command and returns what should be printed on stdout.
pub fn run(cli: Cli, config: CliConfig) -> anyhow::Result<String> {
    let config = config.with_tax_rate_override(cli.tax_rate.as_deref())?;
    debug!(tax_rate = %config.tax_rate, "Configuration resolved");

    match cli.command {
        Command::Summary { path } => summarize_file(&path, &config),
        Command::Words { amount } => Ok(to_words(parse_numeric(&amount))),
        Command::Amount { quantity, rate } => {
            let amount = compute_amount(parse_numeric(&quantity), parse_numeric(&rate));
            Ok(format!("{} {}", config.currency_symbol, format_amount(amount)))
        }
    }
}

/// Loads an invoice document and renders its summary as pretty JSON.
fn summarize_file(path: &Path, config: &CliConfig) -> anyhow::Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading invoice {}", path.display()))?;
    let invoice: Invoice = serde_json::from_str(&raw)
        .with_context(|| format!("parsing invoice {}", path.display()))?;

    info!(
        path = %path.display(),
        number = %invoice.details.number,
        lines = invoice.items().len(),
        "Invoice loaded"
    );

    let summary = InvoiceSummary::build(&invoice, config.tax_rate);
    info!(grand_total = %summary.grand_total, "Invoice summarized");

    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=lumina_core=debug` - Show invoice edit events
/// - Default: INFO, with debug for the lumina crates
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lumina_cli=debug,lumina_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
