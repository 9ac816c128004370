use interest_ledger::{config::LedgerConfig, run::run};

use anyhow::Context;
use clap::Parser;
use std::{fs::File, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// Replay ledger commands from a CSV file, and print the resulting accounts as CSV.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file of commands: type,caller,to,amount,time
    commands: PathBuf,

    #[command(flatten)]
    ledger: LedgerConfig,

    /// Also write every emitted event, as CSV, to this file.
    #[arg(long)]
    events: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is for the accounts only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "interest_ledger=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = File::open(&cli.commands)
        .with_context(|| format!("cannot open {}", cli.commands.display()))?;
    let events = cli
        .events
        .as_ref()
        .map(|path| File::create(path).with_context(|| format!("cannot create {}", path.display())))
        .transpose()?;

    run(&cli.ledger, input, std::io::stdout().lock(), events)?;

    Ok(())
}
