//! A single-asset token ledger with interest-bearing deposits.
//!
//! `ledger`: the ledger itself. Balances, deposits, interest, and the engine
//! enforcing that every token stays accounted for.
//! The other modules replay a CSV stream of commands against a ledger and
//! report the resulting accounts.

pub mod command;
pub mod config;
pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod process;
pub mod run;
