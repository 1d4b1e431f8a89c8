use serde::Deserialize;

use super::error::IoError;
use crate::domain::AmountType;
use crate::engine::{AmountRequest, CreateAccountRequest, LedgerCommand};

/// Raw CSV record as read from input: `type,account,to,amount,name`
#[derive(Debug, Deserialize)]
pub struct RawCommandRecord {
    #[serde(rename = "type")]
    pub command_type: String,
    pub account: Option<u32>,
    pub to: Option<u32>,
    pub amount: Option<String>,
    pub name: Option<String>,
}

impl RawCommandRecord {
    /// Parse this raw record into a strongly-typed command
    ///
    /// Amount positivity is checked when the request body is executed, so a
    /// zero or negative amount parses here and fails there with `InvalidAmount`.
    pub fn parse<A: AmountType>(self) -> Result<LedgerCommand<A>, IoError> {
        let command_type = self.command_type.trim().to_lowercase();

        match command_type.as_str() {
            // An empty name field reads as None; any name is acceptable
            "create" => Ok(LedgerCommand::Create(CreateAccountRequest::new(
                self.name.unwrap_or_default(),
            ))),
            "deposit" => Ok(LedgerCommand::Deposit {
                account_id: require_account(self.account, "deposit")?,
                request: AmountRequest::new(parse_amount(self.amount)?),
            }),
            "withdraw" | "withdrawal" => Ok(LedgerCommand::Withdraw {
                account_id: require_account(self.account, "withdraw")?,
                request: AmountRequest::new(parse_amount(self.amount)?),
            }),
            "transfer" => {
                let from_id = require_account(self.account, "transfer")?;
                let to_id = self.to.ok_or_else(|| {
                    IoError::MissingField("to required for transfer".to_string())
                })?;
                Ok(LedgerCommand::Transfer {
                    from_id,
                    to_id,
                    request: AmountRequest::new(parse_amount(self.amount)?),
                })
            }
            _ => Err(IoError::InvalidCommandType(self.command_type)),
        }
    }
}

fn require_account(account: Option<u32>, command: &str) -> Result<u32, IoError> {
    account.ok_or_else(|| IoError::MissingField(format!("account required for {command}")))
}

fn parse_amount<A: AmountType>(raw: Option<String>) -> Result<Option<A>, IoError> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => A::from_decimal_str(&s)
            .map(Some)
            .map_err(|_| IoError::InvalidAmount(s)),
    }
}
