use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::error::StorageError;
use super::traits::LedgerBackend;
use crate::domain::{AmountType, Ledger};

/// Ledger persisted as a single pretty-printed JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the document is written to before being renamed into place
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<A: AmountType> LedgerBackend<A> for JsonFileBackend {
    async fn load(&self) -> Result<Option<Ledger<A>>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let ledger: Ledger<A> = serde_json::from_slice(&bytes)?;
        ledger.verify()?;

        debug!(
            path = %self.path.display(),
            accounts = ledger.accounts().len(),
            "Loaded ledger"
        );
        Ok(Some(ledger))
    }

    async fn save(&self, ledger: &Ledger<A>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(ledger)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        // Write-then-rename so a failed write never truncates the document
        let staging = self.staging_path();
        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &self.path).await?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Saved ledger");
        Ok(())
    }
}
