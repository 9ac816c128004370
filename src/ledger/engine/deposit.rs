use crate::ledger::{error::LedgerError, event::Event, AccountId, Amount};

use super::engine::LedgerEngine;

impl LedgerEngine {
    /// Lock `amount` tokens from the caller's balance into an interest-bearing
    /// deposit, timestamped with the current clock reading.
    ///
    /// An account can only have one open deposit: it must be withdrawn before
    /// depositing again.
    pub fn deposit(&mut self, caller: AccountId, amount: Amount) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        if amount > self.accounts.get(caller) {
            return Err(LedgerError::InsufficientBalance);
        }

        if self.deposits.has(caller) {
            return Err(LedgerError::DuplicateDeposit);
        }

        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let timestamp = self.clock.now();

        // Nothing below can fail: the balance and the registry were checked above.
        self.deposits.open(caller, amount, timestamp)?;
        self.accounts.debit(caller, amount)?;
        self.total_deposited = total_deposited;

        self.emit(Event::TokensDeposited {
            depositor: caller,
            amount,
            timestamp,
        });

        Ok(())
    }
}
