use crate::ledger::{AccountId, Amount, LedgerEngine, LedgerError, Timestamp};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Type {
    Transfer { to: AccountId, amount: Amount }, // Move tokens to another account.
    Deposit(Amount),                            // Lock tokens in an interest-bearing deposit.
    Withdraw,                                   // Close the deposit, with interest.
}

/// A ledger operation, as requested by `caller` at time `time`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Command {
    pub(crate) cmd_type: Type,
    pub(crate) caller: AccountId,
    pub(crate) time: Timestamp,
}

impl Command {
    pub fn new(cmd_type: Type, caller: AccountId, time: Timestamp) -> Self {
        Self {
            cmd_type,
            caller,
            time,
        }
    }

    /// Apply the command to the ledger. The ledger's clock must already read
    /// `self.time`.
    pub fn apply(&self, ledger: &mut LedgerEngine) -> Result<(), LedgerError> {
        match self.cmd_type {
            Type::Transfer { to, amount } => ledger.transfer(self.caller, to, amount),
            Type::Deposit(amount) => ledger.deposit(self.caller, amount),
            Type::Withdraw => ledger.withdraw(self.caller),
        }
    }
}
