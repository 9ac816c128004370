use crate::ledger::{error::LedgerError, event::Event, AccountId, Amount};

use super::engine::LedgerEngine;

impl LedgerEngine {
    /// Move tokens from the caller's balance to another account.
    /// Transferring to yourself is allowed, and changes nothing but the event log.
    pub fn transfer(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        self.accounts.transfer(caller, to, amount)?;

        self.emit(Event::Transfer {
            from: caller,
            to,
            amount,
        });

        Ok(())
    }
}
