use crate::ledger::{event::Event, AccountId, Amount, LedgerEngine, Timestamp};

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct AccountRecord {
    account: AccountId,
    balance: Amount,
    deposit: Amount,
    deposit_time: Option<Timestamp>,
}

#[derive(Serialize)]
struct EventRecord {
    event: &'static str,
    account: AccountId,
    counterparty: Option<AccountId>,
    amount: Amount,
    interest: Option<Amount>,
    total: Option<Amount>,
    timestamp: Option<Timestamp>,
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        match *event {
            Event::Transfer { from, to, amount } => Self {
                event: "transfer",
                account: from,
                counterparty: Some(to),
                amount,
                interest: None,
                total: None,
                timestamp: None,
            },
            Event::TokensDeposited {
                depositor,
                amount,
                timestamp,
            } => Self {
                event: "deposited",
                account: depositor,
                counterparty: None,
                amount,
                interest: None,
                total: None,
                timestamp: Some(timestamp),
            },
            Event::TokensWithdrawn {
                depositor,
                principal,
                interest,
                total,
            } => Self {
                event: "withdrawn",
                account: depositor,
                counterparty: None,
                amount: principal,
                interest: Some(interest),
                total: Some(total),
                timestamp: None,
            },
        }
    }
}

/// Writes every known account to the given stream, sorted by account id.
pub fn write_accounts(
    output_stream: impl std::io::Write,
    ledger: &LedgerEngine,
) -> Result<(), csv::Error> {
    let mut records: BTreeMap<AccountId, AccountRecord> = ledger
        .accounts()
        .iter()
        .map(|(account, balance)| {
            (
                account,
                AccountRecord {
                    account,
                    balance,
                    deposit: 0,
                    deposit_time: None,
                },
            )
        })
        .collect();

    for (account, deposit) in ledger.deposits().iter() {
        let record = records.entry(account).or_insert(AccountRecord {
            account,
            balance: ledger.balance_of(account),
            deposit: 0,
            deposit_time: None,
        });
        record.deposit = deposit.amount;
        record.deposit_time = Some(deposit.timestamp);
    }

    let mut writer = csv::Writer::from_writer(output_stream);
    for record in records.values() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the events to the given stream, in the order they were emitted.
pub fn write_events(output_stream: impl std::io::Write, events: &[Event]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);
    for event in events {
        writer.serialize(EventRecord::from(event))?;
    }
    writer.flush()?;

    Ok(())
}
