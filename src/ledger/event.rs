use super::{AccountId, Amount, Timestamp};

/// Notifications emitted by committed ledger operations, one per operation.
/// Failed operations emit nothing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Event {
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
    TokensDeposited {
        depositor: AccountId,
        amount: Amount,
        timestamp: Timestamp,
    },
    TokensWithdrawn {
        depositor: AccountId,
        principal: Amount,
        interest: Amount,
        total: Amount,
    },
}
