use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Account not found: {0}")]
    AccountNotFound(u32),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Corrupt ledger: {0}")]
    CorruptLedger(String),
}
