//! Interest accrued by a deposit.
//!
//! Interest accrues at a fixed rate, only for whole elapsed intervals, and is
//! always truncated: the payout is never rounded up.

use super::{deposit_registry::DepositRecord, error::LedgerError, Amount, Timestamp};

/// Interest rate per interval, in basis points (2%).
pub const RATE_BPS: Amount = 200;
pub const BPS_DENOMINATOR: Amount = 10_000;
/// Length of an interest interval (5 minutes).
pub const INTERVAL_SECONDS: i64 = 300;

/// What a deposit is worth at a given time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Accrual {
    pub principal: Amount,
    pub interest: Amount,
    pub total: Amount,
}

pub fn accrued(record: &DepositRecord, now: Timestamp) -> Result<Accrual, LedgerError> {
    let elapsed = now
        .checked_sub(record.timestamp)
        .ok_or(LedgerError::Overflow)?;
    if elapsed < 0 {
        return Err(LedgerError::ClockRegression);
    }

    let intervals = Amount::from((elapsed / INTERVAL_SECONDS).unsigned_abs());

    let interest = record
        .amount
        .checked_mul(RATE_BPS)
        .and_then(|scaled| scaled.checked_mul(intervals))
        .ok_or(LedgerError::Overflow)?
        / BPS_DENOMINATOR;

    let total = record
        .amount
        .checked_add(interest)
        .ok_or(LedgerError::Overflow)?;

    Ok(Accrual {
        principal: record.amount,
        interest,
        total,
    })
}
