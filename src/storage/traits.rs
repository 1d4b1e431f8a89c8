use std::sync::Arc;

use async_trait::async_trait;

use super::error::StorageError;
use crate::domain::{AmountType, Ledger};

/// Whole-document persistence primitives the ledger store depends on
///
/// Backends never merge: `save` replaces the previous document entirely,
/// and `load` returns it entirely.
#[async_trait]
pub trait LedgerBackend<A: AmountType>: Send + Sync {
    /// Read the full ledger, or `None` if no document has been written yet
    async fn load(&self) -> Result<Option<Ledger<A>>, StorageError>;

    /// Overwrite the stored document with `ledger`
    async fn save(&self, ledger: &Ledger<A>) -> Result<(), StorageError>;
}

// Allows sharing one backend between a store and a test harness
#[async_trait]
impl<A: AmountType, B: LedgerBackend<A> + ?Sized> LedgerBackend<A> for Arc<B> {
    async fn load(&self) -> Result<Option<Ledger<A>>, StorageError> {
        (**self).load().await
    }

    async fn save(&self, ledger: &Ledger<A>) -> Result<(), StorageError> {
        (**self).save(ledger).await
    }
}
