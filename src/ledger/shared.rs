use super::{engine::LedgerEngine, error::LedgerError, interest::Accrual, AccountId, Amount};

use std::sync::{Arc, Mutex, MutexGuard};

/// A ledger that can be shared between threads.
///
/// Every operation takes the lock once and runs to completion while holding
/// it, so operations are totally ordered and never interleave.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<LedgerEngine>>,
}

impl SharedLedger {
    pub fn new(ledger: LedgerEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // Operations never panic on their own, except on a failed debug assertion.
    fn lock(&self) -> MutexGuard<'_, LedgerEngine> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn transfer(
        &self,
        caller: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.lock().transfer(caller, to, amount)
    }

    pub fn deposit(&self, caller: AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.lock().deposit(caller, amount)
    }

    pub fn withdraw(&self, caller: AccountId) -> Result<(), LedgerError> {
        self.lock().withdraw(caller)
    }

    pub fn calculate_interest(&self, account: AccountId) -> Result<Accrual, LedgerError> {
        self.lock().calculate_interest(account)
    }

    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.lock().balance_of(account)
    }

    pub fn total_deposited(&self) -> Amount {
        self.lock().total_deposited()
    }

    pub fn interest_pool(&self) -> Amount {
        self.lock().interest_pool()
    }

    pub fn total_supply(&self) -> Amount {
        self.lock().total_supply()
    }

    /// Run `f` with exclusive access to the ledger, e.g. to read several
    /// figures from the same state.
    pub fn with<T>(&self, f: impl FnOnce(&mut LedgerEngine) -> T) -> T {
        f(&mut self.lock())
    }
}
