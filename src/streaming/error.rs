use std::fmt;

use tracing::warn;

/// What a batch does when a record cannot be read or a command is rejected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log a warning and move on to the next record
    #[default]
    Skip,
    /// Move on without logging
    SkipSilently,
    /// Stop at the first failure
    Abort,
}

impl ErrorPolicy {
    pub fn from_abort_flag(abort_on_error: bool) -> Self {
        if abort_on_error { Self::Abort } else { Self::Skip }
    }

    /// Report the failure of record `record` (1-based) and decide whether the batch goes on
    pub fn should_continue(self, record: usize, error: &dyn fmt::Display) -> bool {
        match self {
            Self::Skip => {
                warn!(record, %error, "Skipping failed command");
                true
            }
            Self::SkipSilently => true,
            Self::Abort => {
                warn!(record, %error, "Aborting batch on failed command");
                false
            }
        }
    }
}
