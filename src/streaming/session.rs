use futures::{Stream, StreamExt};
use tracing::{debug, info};

use super::error::ErrorPolicy;
use crate::domain::{AmountType, Clock};
use crate::engine::{LedgerCommand, LedgerStore};
use crate::io::IoError;
use crate::storage::LedgerBackend;

/// Counts from one pass over a command stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub applied: usize,
    pub failed: usize,
    pub aborted: bool,
}

/// Applies a stream of commands to a store, one operation at a time
///
/// Each command is its own atomic store operation; a rejected command never
/// affects the ones before or after it.
pub struct ProcessingSession<'a, A, B, C>
where
    A: AmountType,
    B: LedgerBackend<A>,
    C: Clock,
{
    store: &'a LedgerStore<A, B, C>,
    error_policy: ErrorPolicy,
}

impl<'a, A, B, C> ProcessingSession<'a, A, B, C>
where
    A: AmountType,
    B: LedgerBackend<A>,
    C: Clock,
{
    /// Create a new processing session
    pub fn new(store: &'a LedgerStore<A, B, C>, error_policy: ErrorPolicy) -> Self {
        Self {
            store,
            error_policy,
        }
    }

    /// Apply every command in `stream` in order, consulting the error policy on failures
    pub async fn process_stream<S>(&self, mut stream: S) -> BatchSummary
    where
        S: Stream<Item = Result<LedgerCommand<A>, IoError>> + Unpin,
    {
        let mut summary = BatchSummary::default();
        let mut record = 0;

        while let Some(result) = stream.next().await {
            record += 1;
            let keep_going = match result {
                Ok(command) => {
                    let name = command.name();
                    match self.store.execute(command).await {
                        Ok(_) => {
                            debug!(record, command = name, "Applied command");
                            summary.applied += 1;
                            true
                        }
                        Err(e) => {
                            summary.failed += 1;
                            self.error_policy.should_continue(record, &e)
                        }
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    self.error_policy.should_continue(record, &e)
                }
            };

            if !keep_going {
                summary.aborted = true;
                break;
            }
        }

        info!(
            applied = summary.applied,
            failed = summary.failed,
            aborted = summary.aborted,
            "Finished command batch"
        );
        summary
    }
}
