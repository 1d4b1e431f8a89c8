//! Prelude module for convenient imports
//!
//! Import everything you need with: `use bank_ledger::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AmountType, Clock, DomainError, FixedClock, FixedPoint, Ledger, SystemClock,
    Transaction, TransactionKind, TransferReceipt,
};

// Storage types
pub use crate::storage::{InMemoryBackend, JsonFileBackend, LedgerBackend, StorageError};

// Engine types
pub use crate::engine::{
    AmountRequest, CommandOutcome, CreateAccountRequest, EngineError, LedgerCommand, LedgerStore,
};

// IO types
pub use crate::io::{CsvCommandStream, IoError, write_accounts, write_json, write_statement};

// Streaming types
pub use crate::streaming::{BatchSummary, ErrorPolicy, ProcessingSession};

// App types
pub use crate::app::{AppError, CliApp, CliArgs, CliCommand, LedgerConfig};
