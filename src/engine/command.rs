use serde::{Deserialize, Serialize};

use crate::domain::{Account, AmountType, DomainError, TransferReceipt, validate_amount};

/// Ledger mutations as values, for batch input and transport layers
///
/// Each mutation carries its typed request body; [`LedgerStore::execute`]
/// validates the body before the store is touched.
///
/// [`LedgerStore::execute`]: super::LedgerStore::execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand<A: AmountType> {
    Create(CreateAccountRequest),
    Deposit {
        account_id: u32,
        request: AmountRequest<A>,
    },
    Withdraw {
        account_id: u32,
        request: AmountRequest<A>,
    },
    Transfer {
        from_id: u32,
        to_id: u32,
        request: AmountRequest<A>,
    },
}

impl<A: AmountType> LedgerCommand<A> {
    /// Short operation name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer",
        }
    }
}

/// Result of executing a [`LedgerCommand`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutcome<A: AmountType> {
    Account(Account<A>),
    Transfer(TransferReceipt<A>),
}

/// Body of a create-account request
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub name: String,
}

impl CreateAccountRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of a deposit, withdraw or transfer request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct AmountRequest<A: AmountType> {
    pub amount: Option<A>,
}

impl<A: AmountType> AmountRequest<A> {
    pub fn new(amount: Option<A>) -> Self {
        Self { amount }
    }

    /// The amount, if present and strictly positive
    pub fn amount(&self) -> Result<A, DomainError> {
        validate_amount(self.amount)
    }
}
