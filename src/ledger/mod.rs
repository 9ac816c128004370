pub mod account_store;
pub mod clock;
pub mod deposit_registry;
pub mod engine;
pub mod error;
pub mod event;
pub mod interest;
pub mod shared;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the balances HashMap:
// (1) balances: HashMap<u32, u128>
// (2) balances: HashMap<AccountId, Amount>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
pub type AccountId = u32;

// Token amounts are whole, indivisible units. Interest is computed in integer
// fixed-point arithmetic, so there is no use for a decimal or float type here.
pub type Amount = u128;

/// Seconds since the UNIX epoch, as read from a `Clock`.
pub type Timestamp = i64;

pub use engine::LedgerEngine;
pub use error::LedgerError;
