use crate::command::Command;
use crate::ledger::{clock::ManualClock, LedgerEngine, LedgerError, Timestamp};

use std::sync::mpsc::{self, Receiver, Sender};

/// A command the ledger refused to apply.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("rejected {command:?}: {error}")]
pub struct Rejection {
    pub command: Command,
    pub error: LedgerError,
}

/// Apply a stream of commands to the ledger, one at a time and in order.
///
/// `clock` must be the clock the ledger was initialized with: it is set to
/// each command's time before the command is applied. The clock never goes
/// backwards: a command timed before the previous one is rejected with
/// `ClockRegression`, without being applied.
/// Rejected commands are streamed as they happen, and once every command has
/// been processed the ledger itself is sent to `ledger_tx`.
pub fn process(
    commands: Receiver<Command>,
    mut ledger: LedgerEngine,
    clock: ManualClock,
    ledger_tx: Sender<LedgerEngine>,
) -> Receiver<Rejection> {
    let (tx, rx) = mpsc::channel();

    // A single thread owns the ledger, so commands can never interleave.
    std::thread::spawn(move || {
        let mut last_time: Option<Timestamp> = None;

        for command in commands {
            let applied = match last_time {
                Some(last) if command.time < last => Err(LedgerError::ClockRegression),
                _ => {
                    last_time = Some(command.time);
                    clock.set(command.time);
                    command.apply(&mut ledger)
                }
            };

            if let Err(error) = applied {
                // Nobody listening for rejections is not a reason to stop.
                let _ = tx.send(Rejection { command, error });
            };
        }

        tracing::debug!(events = ledger.events().len(), "all commands processed");

        // Would only fail if the receiver is gone, in which case there is nobody left to report to.
        let _ = ledger_tx.send(ledger);
    });

    rx
}
