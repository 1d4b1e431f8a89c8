use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::error::StorageError;
use super::traits::LedgerBackend;
use crate::domain::{AmountType, Ledger};

/// In-memory backend holding the serialized document bytes
///
/// Keeping bytes rather than a typed ledger lets tests assert that a failed
/// operation left the stored document byte-for-byte unchanged.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    document: Mutex<Option<Vec<u8>>>,
    saves: AtomicUsize,
}

impl InMemoryBackend {
    /// Create an empty backend (no document yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend already holding `ledger`
    pub fn with_ledger<A: AmountType>(ledger: &Ledger<A>) -> Result<Self, StorageError> {
        let bytes = serde_json::to_vec_pretty(ledger)?;
        Ok(Self {
            document: Mutex::new(Some(bytes)),
            saves: AtomicUsize::new(0),
        })
    }

    /// Raw stored document, if any
    pub async fn document(&self) -> Option<Vec<u8>> {
        self.document.lock().await.clone()
    }

    /// Number of successful saves since creation
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<A: AmountType> LedgerBackend<A> for InMemoryBackend {
    async fn load(&self) -> Result<Option<Ledger<A>>, StorageError> {
        let guard = self.document.lock().await;
        let Some(bytes) = guard.as_ref() else {
            return Ok(None);
        };

        let ledger: Ledger<A> = serde_json::from_slice(bytes)?;
        ledger.verify()?;
        Ok(Some(ledger))
    }

    async fn save(&self, ledger: &Ledger<A>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(ledger)?;
        *self.document.lock().await = Some(bytes);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedPoint;

    #[tokio::test]
    async fn empty_backend_has_no_document() {
        let backend = InMemoryBackend::new();

        let loaded: Option<Ledger<FixedPoint>> = backend.load().await.unwrap();
        assert!(loaded.is_none());
        assert!(backend.document().await.is_none());
        assert_eq!(backend.save_count(), 0);
    }

    #[tokio::test]
    async fn save_then_load_returns_same_ledger() {
        let backend = InMemoryBackend::new();
        let ledger = Ledger::<FixedPoint>::seeded().unwrap();

        backend.save(&ledger).await.unwrap();
        let loaded: Ledger<FixedPoint> = backend.load().await.unwrap().unwrap();

        assert_eq!(loaded, ledger);
        assert_eq!(backend.save_count(), 1);
    }

    #[tokio::test]
    async fn with_ledger_does_not_count_as_save() {
        let ledger = Ledger::<FixedPoint>::seeded().unwrap();
        let backend = InMemoryBackend::with_ledger(&ledger).unwrap();

        assert_eq!(backend.save_count(), 0);
        assert_eq!(
            backend.document().await.unwrap(),
            serde_json::to_vec_pretty(&ledger).unwrap()
        );
    }
}
