use crate::ledger::{error::LedgerError, event::Event, interest, AccountId};

use super::engine::LedgerEngine;

impl LedgerEngine {
    /// Close the caller's deposit, and pay back the principal plus the
    /// interest accrued so far.
    ///
    /// Interest is paid out of the interest pool only. If the pool can't cover
    /// it, the withdrawal is rejected as a whole: interest is never partially
    /// paid.
    pub fn withdraw(&mut self, caller: AccountId) -> Result<(), LedgerError> {
        let record = self.deposits.get(caller).ok_or(LedgerError::NoDeposit)?;
        let accrual = interest::accrued(record, self.clock.now())?;

        if accrual.interest > self.interest_pool {
            return Err(LedgerError::InsufficientInterestPool);
        }

        let total_deposited = self
            .total_deposited
            .checked_sub(accrual.principal)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .accounts
            .get(caller)
            .checked_add(accrual.total)
            .ok_or(LedgerError::Overflow)?;

        self.deposits.close(caller)?;
        self.accounts.credit(caller, accrual.total)?;
        self.total_deposited = total_deposited;
        self.interest_pool -= accrual.interest;
        debug_assert_eq!(balance, self.accounts.get(caller));

        self.emit(Event::TokensWithdrawn {
            depositor: caller,
            principal: accrual.principal,
            interest: accrual.interest,
            total: accrual.total,
        });

        Ok(())
    }
}

#[cfg(test)]
mod withdraw_tests {
    use crate::ledger::{
        clock::ManualClock,
        engine::{
            engine::tests::{new_ledger, ALICE, BOB, OWNER, T0},
            LedgerEngine,
        },
        error::LedgerError,
        event::Event,
    };

    #[test]
    fn test_withdraw_after_one_interval() {
        let (mut ledger, clock) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        clock.advance(300);

        ledger.withdraw(ALICE).expect("should withdraw");

        assert_eq!(1_010, ledger.balance_of(ALICE));
        assert_eq!(99_990, ledger.interest_pool());
        assert_eq!(0, ledger.total_deposited());
        assert_eq!(None, ledger.deposit_of(ALICE));
        assert_eq!(
            Some(&Event::TokensWithdrawn {
                depositor: ALICE,
                principal: 500,
                interest: 10,
                total: 510
            }),
            ledger.events().last()
        );
    }

    #[test]
    fn test_withdraw_after_three_intervals() {
        let (mut ledger, clock) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        clock.advance(900);

        ledger.withdraw(ALICE).expect("should withdraw");

        assert_eq!(1_030, ledger.balance_of(ALICE));
        assert_eq!(
            Some(&Event::TokensWithdrawn {
                depositor: ALICE,
                principal: 500,
                interest: 30,
                total: 530
            }),
            ledger.events().last()
        );
    }

    #[test]
    fn test_withdraw_immediately() {
        let (mut ledger, _) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();

        ledger.withdraw(ALICE).expect("should withdraw");

        assert_eq!(1_000, ledger.balance_of(ALICE));
        assert_eq!(100_000, ledger.interest_pool());
        assert_eq!(
            Some(&Event::TokensWithdrawn {
                depositor: ALICE,
                principal: 500,
                interest: 0,
                total: 500
            }),
            ledger.events().last()
        );
    }

    #[test]
    fn test_withdraw_without_deposit() {
        let (mut ledger, _) = new_ledger();

        assert_eq!(Err(LedgerError::NoDeposit), ledger.withdraw(ALICE));
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn test_withdraw_twice() {
        let (mut ledger, _) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        ledger.withdraw(ALICE).unwrap();

        assert_eq!(Err(LedgerError::NoDeposit), ledger.withdraw(ALICE));
        assert_eq!(1_000, ledger.balance_of(ALICE));
    }

    #[test]
    fn test_deposit_again_after_withdraw() {
        let (mut ledger, clock) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        ledger.withdraw(ALICE).unwrap();
        clock.advance(42);

        ledger.deposit(ALICE, 700).expect("should deposit again");
        assert_eq!(700, ledger.deposit_of(ALICE).unwrap().amount);
        assert_eq!(T0 + 42, ledger.deposit_of(ALICE).unwrap().timestamp);
    }

    #[test]
    // A withdrawal that would drain more than the pool is rejected outright.
    fn test_withdraw_insufficient_interest_pool() {
        let clock = ManualClock::new(T0);
        let mut ledger = LedgerEngine::initialize(OWNER, 1_000_000, 15, clock.clone()).unwrap();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        clock.advance(600); // 20 tokens of interest

        assert_eq!(
            Err(LedgerError::InsufficientInterestPool),
            ledger.withdraw(ALICE)
        );
        assert_eq!(500, ledger.balance_of(ALICE));
        assert_eq!(500, ledger.total_deposited());
        assert_eq!(15, ledger.interest_pool());
        assert!(ledger.deposit_of(ALICE).is_some());
        assert_eq!(2, ledger.events().len());
    }

    #[test]
    fn test_withdraw_drains_pool_exactly() {
        let clock = ManualClock::new(T0);
        let mut ledger = LedgerEngine::initialize(OWNER, 1_000_000, 10, clock.clone()).unwrap();
        ledger.transfer(OWNER, ALICE, 500).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        clock.advance(300);

        ledger.withdraw(ALICE).expect("should withdraw");
        assert_eq!(0, ledger.interest_pool());
        assert_eq!(510, ledger.balance_of(ALICE));
    }

    #[test]
    fn test_withdraw_clock_regression() {
        let (mut ledger, clock) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        clock.set(T0 - 1);

        assert_eq!(Err(LedgerError::ClockRegression), ledger.withdraw(ALICE));
        assert_eq!(
            Err(LedgerError::ClockRegression),
            ledger.calculate_interest(ALICE)
        );
        assert!(ledger.deposit_of(ALICE).is_some());
    }

    #[test]
    fn test_withdraw_only_touches_depositor() {
        let (mut ledger, clock) = new_ledger();
        ledger.transfer(OWNER, ALICE, 1_000).unwrap();
        ledger.transfer(OWNER, BOB, 1_000).unwrap();
        ledger.deposit(ALICE, 500).unwrap();
        ledger.deposit(BOB, 1_000).unwrap();
        clock.advance(300);

        ledger.withdraw(BOB).unwrap();

        assert_eq!(1_020, ledger.balance_of(BOB));
        assert_eq!(500, ledger.total_deposited());
        assert!(ledger.deposit_of(ALICE).is_some());
        assert_eq!(Ok(()), ledger.check_invariants());
    }
}
