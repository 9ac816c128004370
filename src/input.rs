use crate::command::{self, Command};
use crate::ledger::{AccountId, Amount, Timestamp};

use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("malformed CSV: {0}")]
    Csv(String),
    #[error("invalid command: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<CommandRecord as TryInto<Command>>::Error> for Error {
    fn from(err: <CommandRecord as TryInto<Command>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// Bad rows don't abort the whole run: they are reported on the error channel,
// and the rows after them are still read.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Command>, Receiver<Error>) {
    let (command_tx, command_rx): (Sender<Command>, Receiver<Command>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start processing the commands immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<CommandRecord>() {
            // Sending only fails once the receiver is gone, i.e. nobody is listening anymore.
            let sent = match convert(record) {
                Ok(command) => command_tx.send(command).is_ok(),
                Err(err) => error_tx.send(err).is_ok(),
            };
            if !sent {
                break;
            }
        }
    });

    (command_rx, error_rx)
}

// Convert from a csv deserialise result into a command result.
fn convert(record: Result<CommandRecord, csv::Error>) -> Result<Command, Error> {
    Ok(record?.try_into()?)
}

// CommandRecord mirrors a CSV row, so the domain Command type doesn't have to
// carry Options for columns that only some commands use.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    #[serde(rename = "type")]
    cmd_type: CommandRecordType,

    caller: AccountId,

    to: Option<AccountId>,

    amount: Option<Amount>,

    time: Timestamp,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandRecordType {
    Transfer,
    Deposit,
    Withdraw,
}

impl TryFrom<CommandRecord> for Command {
    type Error = &'static str;
    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        let cmd_type = match record.cmd_type {
            CommandRecordType::Transfer => command::Type::Transfer {
                to: match record.to {
                    Some(to) => to,
                    None => return Err("missing recipient for transfer"),
                },
                amount: match record.amount {
                    Some(amount) => amount,
                    None => return Err("missing amount for transfer"),
                },
            },
            CommandRecordType::Deposit => command::Type::Deposit(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for deposit"),
            }),
            CommandRecordType::Withdraw => command::Type::Withdraw,
        };

        Ok(Self::new(cmd_type, record.caller, record.time))
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, CommandRecord, CommandRecordType, Error};
    use crate::command::{self, Command};

    #[test]
    fn test_parse_ok() {
        let data = r#"type,caller,to,amount,time
transfer,1,2,50,1000
deposit,2,,50,1000
withdraw,2,,,1300"#;
        let reader = std::io::Cursor::new(data);
        let (commands, errors) = parse(reader);

        assert_eq!(
            vec![
                Command::new(command::Type::Transfer { to: 2, amount: 50 }, 1, 1000),
                Command::new(command::Type::Deposit(50), 2, 1000),
                Command::new(command::Type::Withdraw, 2, 1300),
            ],
            commands.iter().collect::<Vec<_>>()
        );
        assert_eq!(0, errors.iter().count());
    }

    #[test]
    fn test_parse_ok_with_whitespace() {
        let data = r#"type,  caller,   to,  amount,  time
transfer , 1 , 2 , 50 , 1000
    deposit,2,   ,50,1000
        withdraw   ,2,,,   1300"#;
        let reader = std::io::Cursor::new(data);
        let (commands, errors) = parse(reader);

        assert_eq!(3, commands.iter().count());
        assert_eq!(0, errors.iter().count());
    }

    #[test]
    fn test_parse_invalid_format() {
        for (data, err_contains) in vec![
            (
                r#"type,caller,to,amount,time
mint,1,,1,1000"#,
                "unknown variant `mint`",
            ),
            (
                r#"type,caller,to,amount,time
withdraw,,,,1000"#, // missing caller
                "cannot parse integer from empty string",
            ),
            (
                r#"type,caller,to,amount,time
withdraw,1,,,"#, // missing time
                "cannot parse integer from empty string",
            ),
            (
                r#"type,caller,to,amount,time
deposit,1,,-5,1000"#,
                "invalid digit",
            ),
            (
                r#"type,caller,to,amount,time
withdraw,1,,1000"#,
                "found record with 4 fields, but the previous record has 5 fields",
            ),
        ] {
            let reader = std::io::Cursor::new(data);
            let (commands, errors) = parse(reader);

            assert_eq!(0, commands.iter().count());

            let errs: Vec<Error> = errors.iter().collect();
            assert_eq!(1, errs.len());

            match &errs[0] {
                Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
                _ => panic!("unexpected error"),
            }
        }
    }

    #[test]
    // Rows missing a column their command needs fail to convert into a Command.
    fn test_parse_invalid_data() {
        for (data, want_err) in vec![
            (
                r#"type,caller,to,amount,time
deposit,1,,,1000"#,
                Error::Format("missing amount for deposit".to_string()),
            ),
            (
                r#"type,caller,to,amount,time
transfer,1,,5,1000"#,
                Error::Format("missing recipient for transfer".to_string()),
            ),
            (
                r#"type,caller,to,amount,time
transfer,1,2,,1000"#,
                Error::Format("missing amount for transfer".to_string()),
            ),
        ] {
            let reader = std::io::Cursor::new(data);
            let (commands, errors) = parse(reader);

            assert_eq!(0, commands.iter().count());

            let errs: Vec<Error> = errors.iter().collect();
            assert_eq!(vec![want_err], errs);
        }
    }

    #[test]
    // A bad row doesn't stop the rows after it.
    fn test_parse_keeps_going_after_errors() {
        let data = r#"type,caller,to,amount,time
deposit,1,,,1000
badly formatted
deposit,1,,10,1000"#;
        let reader = std::io::Cursor::new(data);
        let (commands, errors) = parse(reader);

        assert_eq!(
            vec![Command::new(command::Type::Deposit(10), 1, 1000)],
            commands.iter().collect::<Vec<_>>()
        );
        assert_eq!(2, errors.iter().count());
    }

    #[test]
    fn test_command_record_into_command_invalid_data() {
        let record = CommandRecord {
            cmd_type: CommandRecordType::Deposit,
            caller: 1,
            to: None,
            amount: None,
            time: 0,
        };

        let got = Command::try_from(record);
        assert_eq!(Err("missing amount for deposit"), got);
    }
}
