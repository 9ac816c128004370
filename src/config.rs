use crate::ledger::{clock::Clock, AccountId, Amount, LedgerEngine, LedgerError};

/// How a new ledger is set up.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct LedgerConfig {
    /// Account receiving every token that isn't reserved for interest.
    #[arg(long)]
    pub owner: AccountId,

    /// Total number of tokens, fixed for the lifetime of the ledger.
    #[arg(long)]
    pub total_supply: Amount,

    /// Tokens set aside to pay interest on deposits.
    #[arg(long = "interest-pool")]
    pub reserved_interest_pool: Amount,
}

impl LedgerConfig {
    pub fn initialize(&self, clock: impl Clock + 'static) -> Result<LedgerEngine, LedgerError> {
        LedgerEngine::initialize(
            self.owner,
            self.total_supply,
            self.reserved_interest_pool,
            clock,
        )
    }
}
