use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// Storage-level errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Ledger document not found")]
    Missing,

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Domain error: {0}")]
    DomainError(#[from] DomainError),
}
