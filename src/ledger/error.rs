use thiserror::Error;

/// Note: I chose to keep errors simple here, like the ledger operations they
/// come from: every variant is a deterministic rejection based on the current
/// state, and none of them is retried internally.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum LedgerError {
    /// The reserved interest pool is larger than the total supply.
    #[error("reserved interest pool exceeds total supply")]
    InvalidConfiguration,

    /// Amounts must be strictly positive.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// Funds in the account are insufficient for a transfer or deposit.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The account already has an open deposit.
    #[error("a deposit is already open for this account")]
    DuplicateDeposit,

    /// The account has no open deposit.
    #[error("no open deposit for this account")]
    NoDeposit,

    /// Paying the accrued interest would drain more than the remaining pool.
    #[error("interest pool cannot cover the accrued interest")]
    InsufficientInterestPool,

    /// The clock reads a time before the deposit was opened.
    #[error("clock reads a time before the deposit timestamp")]
    ClockRegression,

    /// An amount would go past the representable range.
    #[error("arithmetic overflow")]
    Overflow,

    /// Balances, deposits and the interest pool no longer add up to the total supply.
    #[error("ledger invariant violated: {0}")]
    InvariantViolation(&'static str),
}
