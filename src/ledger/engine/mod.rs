#[allow(clippy::module_inception)]
pub mod engine;
mod deposit;
mod transfer;
mod withdraw;

pub use engine::LedgerEngine;
