use super::Timestamp;

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the ledger reads the current time from.
///
/// Readings must never go backwards for a given ledger. The ledger doesn't
/// enforce it on its own, but withdrawing from a deposit opened "in the
/// future" is rejected, and the replay pipeline refuses commands timed before
/// the previous one.
pub trait Clock: Send {
    fn now(&self) -> Timestamp;
}

/// Wall clock time, in seconds since the UNIX epoch.
///
/// The replay pipeline drives its own `ManualClock`; this is the clock for
/// hosts embedding the ledger and serving live calls.
///
/// ```
/// use interest_ledger::ledger::{clock::SystemClock, shared::SharedLedger, LedgerEngine};
///
/// let ledger = LedgerEngine::initialize(1, 1_000_000, 100_000, SystemClock).unwrap();
/// let shared = SharedLedger::new(ledger);
///
/// shared.deposit(1, 500).unwrap();
/// assert_eq!(0, shared.calculate_interest(1).unwrap().interest);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => Timestamp::try_from(elapsed.as_secs()).unwrap_or(Timestamp::MAX),
            Err(before_epoch) => {
                -Timestamp::try_from(before_epoch.duration().as_secs()).unwrap_or(Timestamp::MAX)
            }
        }
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so the caller can keep a handle to drive
/// the clock after handing a clone to the ledger. Used to replay commands at
/// their recorded time, and in tests.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}
