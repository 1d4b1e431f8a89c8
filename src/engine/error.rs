use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors surfaced by ledger store operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl EngineError {
    /// The business rule violation behind this error, if it is one
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Storage(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            EngineError::from(DomainError::AccountNotFound(999)).to_string(),
            "Domain error: Account not found: 999"
        );
        assert_eq!(
            EngineError::from(StorageError::Missing).to_string(),
            "Storage error: Ledger document not found"
        );
    }

    #[test]
    fn domain_accessor_exposes_business_errors_only() {
        let engine_err = EngineError::from(DomainError::InsufficientFunds);
        assert_eq!(engine_err.domain(), Some(&DomainError::InsufficientFunds));

        let engine_err = EngineError::from(StorageError::Missing);
        assert_eq!(engine_err.domain(), None);
    }

    #[test]
    fn storage_error_conversion() {
        let engine_err = EngineError::from(StorageError::Missing);

        match engine_err {
            EngineError::Storage(StorageError::Missing) => {}
            _ => panic!("Expected Storage error variant"),
        }
    }
}
