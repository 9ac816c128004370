use crate::ledger::{
    account_store::AccountStore,
    clock::Clock,
    deposit_registry::{DepositRecord, DepositRegistry},
    error::LedgerError,
    event::Event,
    interest::{self, Accrual},
    AccountId, Amount,
};

/// LedgerEngine owns the whole ledger state, and is the only way to change it.
///
/// Every public operation either commits all of its changes and emits exactly
/// one event, or returns an error and leaves the ledger exactly as it was.
/// Operations validate everything they need before writing anything.
///
/// The engine is not thread-safe on its own: calls must be serialized by the
/// caller, e.g. with a single processing thread or a `SharedLedger`.
pub struct LedgerEngine {
    pub(super) owner: AccountId,
    pub(super) total_supply: Amount,
    pub(super) total_deposited: Amount,
    pub(super) interest_pool: Amount,

    pub(super) accounts: AccountStore,
    pub(super) deposits: DepositRegistry,

    pub(super) clock: Box<dyn Clock>,

    // Every event emitted so far, in order.
    pub(super) events: Vec<Event>,
}

impl LedgerEngine {
    /// Set up a new ledger: `owner` receives everything that isn't reserved to
    /// pay interest.
    pub fn initialize(
        owner: AccountId,
        total_supply: Amount,
        reserved_interest_pool: Amount,
        clock: impl Clock + 'static,
    ) -> Result<Self, LedgerError> {
        let circulating = total_supply
            .checked_sub(reserved_interest_pool)
            .ok_or(LedgerError::InvalidConfiguration)?;

        let mut accounts = AccountStore::new();
        accounts.credit(owner, circulating)?;

        tracing::debug!(
            owner,
            total_supply,
            reserved_interest_pool,
            "ledger initialized"
        );

        Ok(Self {
            owner,
            total_supply,
            total_deposited: 0,
            interest_pool: reserved_interest_pool,
            accounts,
            deposits: DepositRegistry::new(),
            clock: Box::new(clock),
            events: Vec::new(),
        })
    }

    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.accounts.get(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn total_deposited(&self) -> Amount {
        self.total_deposited
    }

    pub fn interest_pool(&self) -> Amount {
        self.interest_pool
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    pub fn deposit_of(&self, account: AccountId) -> Option<&DepositRecord> {
        self.deposits.get(account)
    }

    /// What the account's open deposit is worth right now.
    /// Read-only: calling it any number of times changes nothing.
    pub fn calculate_interest(&self, account: AccountId) -> Result<Accrual, LedgerError> {
        let record = self.deposits.get(account).ok_or(LedgerError::NoDeposit)?;
        interest::accrued(record, self.clock.now())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain the events emitted so far, e.g. to hand them over to an event
    /// consumer once a batch of operations is done.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn deposits(&self) -> &DepositRegistry {
        &self.deposits
    }

    /// Check that every token is accounted for: balances, open deposits and
    /// the interest pool must add up to the total supply.
    pub fn check_invariants(&self) -> Result<(), LedgerError> {
        if self.deposits.total()? != self.total_deposited {
            return Err(LedgerError::InvariantViolation(
                "open deposits don't add up to the total deposited",
            ));
        }

        if self.deposits.iter().any(|(_, record)| record.amount == 0) {
            return Err(LedgerError::InvariantViolation("empty open deposit"));
        }

        let accounted = self
            .accounts
            .total()?
            .checked_add(self.total_deposited)
            .and_then(|sum| sum.checked_add(self.interest_pool))
            .ok_or(LedgerError::Overflow)?;
        if accounted != self.total_supply {
            return Err(LedgerError::InvariantViolation(
                "tokens are not conserved",
            ));
        }

        Ok(())
    }

    // Called once an operation has committed all of its changes.
    pub(super) fn emit(&mut self, event: Event) {
        debug_assert_eq!(Ok(()), self.check_invariants());
        tracing::debug!(?event, "ledger event");
        self.events.push(event);
    }
}
