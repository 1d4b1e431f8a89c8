use std::path::{Path, PathBuf};

/// Environment variable consulted for the ledger document path
pub const DATA_PATH_ENV: &str = "BANK_LEDGER_DATA";

/// Document path used when neither `--data` nor the environment names one
pub const DEFAULT_DATA_PATH: &str = "data/accounts.json";

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime configuration for the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    data_path: PathBuf,
}

impl LedgerConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}
