use crate::{
    config::LedgerConfig,
    error_handler, input,
    ledger::{clock::ManualClock, LedgerError},
    output, process,
};

use std::sync::mpsc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot set up the ledger: {0}")]
    Ledger(#[from] LedgerError),

    #[error("cannot write output: {0}")]
    Output(#[from] csv::Error),

    #[error("the ledger stopped before processing every command")]
    Interrupted,
}

/// Replay a CSV stream of commands against a new ledger, and write the final
/// state of every account to `output_stream`.
///
/// Each command is applied with the ledger's clock set to the command's time.
/// Rejected commands and malformed rows are logged and skipped.
pub fn run(
    config: &LedgerConfig,
    input_stream: (impl std::io::Read + Send + 'static),
    output_stream: impl std::io::Write,
    events_stream: Option<impl std::io::Write>,
) -> Result<(), Error> {
    let clock = ManualClock::default();
    let ledger = config.initialize(clock.clone())?;
    tracing::info!(
        owner = config.owner,
        total_supply = config.total_supply,
        interest_pool = config.reserved_interest_pool,
        "replaying commands"
    );

    let (ledger_tx, ledger_rx) = mpsc::channel();

    let (commands, input_errors) = input::parse(input_stream);
    let rejections = process::process(commands, ledger, clock, ledger_tx);
    let reporters = error_handler::report(input_errors, rejections);

    let mut ledger = ledger_rx.recv().map_err(|_| Error::Interrupted)?;
    for reporter in reporters {
        reporter.join().map_err(|_| Error::Interrupted)?;
    }

    output::write_accounts(output_stream, &ledger)?;
    let events = ledger.take_events();
    if let Some(events_stream) = events_stream {
        output::write_events(events_stream, &events)?;
    }

    tracing::info!(
        events = events.len(),
        total_deposited = ledger.total_deposited(),
        interest_pool = ledger.interest_pool(),
        "done"
    );

    Ok(())
}
