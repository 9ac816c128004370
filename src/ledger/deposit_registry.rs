use super::{error::LedgerError, AccountId, Amount, Timestamp};

use std::collections::HashMap;

/// An open, interest-bearing deposit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DepositRecord {
    pub amount: Amount,
    pub timestamp: Timestamp,
}

/// Holds at most one open deposit per account.
///
/// Closing a deposit removes it from the map entirely, so a closed deposit
/// cannot be told apart from an account that never deposited.
#[derive(Debug, Default, Clone)]
pub struct DepositRegistry {
    pub(super) deposits: HashMap<AccountId, DepositRecord>,
}

impl DepositRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, account: AccountId) -> bool {
        self.deposits.contains_key(&account)
    }

    pub fn get(&self, account: AccountId) -> Option<&DepositRecord> {
        self.deposits.get(&account)
    }

    pub fn open(
        &mut self,
        account: AccountId,
        amount: Amount,
        timestamp: Timestamp,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        if self.has(account) {
            return Err(LedgerError::DuplicateDeposit);
        }

        self.deposits
            .insert(account, DepositRecord { amount, timestamp });

        Ok(())
    }

    pub fn close(&mut self, account: AccountId) -> Result<DepositRecord, LedgerError> {
        self.deposits
            .remove(&account)
            .ok_or(LedgerError::NoDeposit)
    }

    /// Sum of all open deposits.
    pub fn total(&self) -> Result<Amount, LedgerError> {
        self.deposits
            .values()
            .try_fold(0 as Amount, |sum, record| sum.checked_add(record.amount))
            .ok_or(LedgerError::Overflow)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountId, &DepositRecord)> + '_ {
        self.deposits.iter().map(|(account, record)| (*account, record))
    }
}
