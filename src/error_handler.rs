use crate::{input::Error, process::Rejection};

use std::sync::mpsc::Receiver;

// Bad rows and rejected commands don't stop the run: the ledger keeps
// processing the commands after them, exactly like a host would keep
// accepting calls after one of them reverted.
//
// They are reported as warnings, so they can be told apart from the account
// output (stdout) and filtered with RUST_LOG.
pub fn report(
    input_errors: Receiver<Error>,
    rejections: Receiver<Rejection>,
) -> Vec<std::thread::JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                tracing::warn!(%err, "failed to read command");
            }
        }),
        std::thread::spawn(move || {
            for rejection in rejections {
                tracing::warn!(
                    caller = rejection.command.caller,
                    time = rejection.command.time,
                    command = ?rejection.command.cmd_type,
                    error = %rejection.error,
                    "command rejected"
                );
            }
        }),
    ]
}
