//! # Lumina CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Parse arguments
//! 3. Load configuration from the environment
//! 4. Run the command and print its output

use clap::Parser;
use tracing::info;

use lumina_cli::config::CliConfig;
use lumina_cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    info!(tax_rate = %config.tax_rate, "Configuration loaded");

    let output = run(cli, config)?;
    println!("{}", output);
    Ok(())
}
