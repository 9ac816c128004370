use super::{error::LedgerError, AccountId, Amount};

use std::collections::HashMap;

/// The balance of every account the ledger has seen.
///
/// Accounts are created implicitly: reading an account that was never
/// credited returns 0, it is not an error. Accounts are never removed.
#[derive(Debug, Default, Clone)]
pub struct AccountStore {
    balances: HashMap<AccountId, Amount>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn credit(&mut self, account: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let balance = self
            .get(account)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(account, balance);

        Ok(())
    }

    pub fn debit(&mut self, account: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let balance = self
            .get(account)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.balances.insert(account, balance);

        Ok(())
    }

    /// Move `amount` from one account to another.
    ///
    /// Both legs are computed before anything is written, so a failing credit
    /// never leaves a debited sender behind.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self
            .get(from)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;

        if from == to {
            // Nothing moves, but the sender still needs the funds.
            self.balances.entry(from).or_default();
            return Ok(());
        }

        let to_balance = self
            .get(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(from, from_balance);
        self.balances.insert(to, to_balance);

        Ok(())
    }

    /// Sum of all balances.
    pub fn total(&self) -> Result<Amount, LedgerError> {
        self.balances
            .values()
            .try_fold(0 as Amount, |sum, balance| sum.checked_add(*balance))
            .ok_or(LedgerError::Overflow)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountId, Amount)> + '_ {
        self.balances
            .iter()
            .map(|(account, balance)| (*account, *balance))
    }
}
