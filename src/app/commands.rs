use std::path::Path;

use tokio::io::AsyncWrite;
use tracing::info;

use super::args::CliCommand;
use super::error::AppError;
use crate::domain::{Clock, FixedPoint};
use crate::engine::{AmountRequest, CreateAccountRequest, LedgerCommand, LedgerStore};
use crate::io::{CsvCommandStream, write_accounts, write_json, write_statement};
use crate::storage::LedgerBackend;
use crate::streaming::{BatchSummary, ErrorPolicy, ProcessingSession};

/// Execute one CLI command against `store`, rendering its result to `writer`
pub async fn run_command<B, C, W>(
    store: &LedgerStore<FixedPoint, B, C>,
    command: CliCommand,
    writer: &mut W,
) -> Result<(), AppError>
where
    B: LedgerBackend<FixedPoint>,
    C: Clock,
    W: AsyncWrite + Unpin + Send,
{
    match command {
        CliCommand::List => {
            let accounts = store.list_accounts().await?;
            write_accounts(&accounts, writer).await?;
        }
        CliCommand::Show { id } => {
            let account = store.get_account(id).await?;
            write_json(&account, writer).await?;
        }
        CliCommand::Statement { id } => {
            let account = store.get_account(id).await?;
            write_statement(&account, writer).await?;
        }
        CliCommand::Create { name } => {
            execute(store, LedgerCommand::Create(CreateAccountRequest::new(name)), writer).await?;
        }
        CliCommand::Deposit { id, amount } => {
            let command = LedgerCommand::Deposit {
                account_id: id,
                request: AmountRequest::new(Some(amount)),
            };
            execute(store, command, writer).await?;
        }
        CliCommand::Withdraw { id, amount } => {
            let command = LedgerCommand::Withdraw {
                account_id: id,
                request: AmountRequest::new(Some(amount)),
            };
            execute(store, command, writer).await?;
        }
        CliCommand::Transfer { from, to, amount } => {
            let command = LedgerCommand::Transfer {
                from_id: from,
                to_id: to,
                request: AmountRequest::new(Some(amount)),
            };
            execute(store, command, writer).await?;
        }
        CliCommand::Apply {
            input_file,
            abort_on_error,
        } => {
            let summary = apply_batch(store, &input_file, abort_on_error).await?;
            if summary.aborted {
                return Err(AppError::BatchAborted {
                    applied: summary.applied,
                    failed: summary.failed,
                });
            }
            let accounts = store.list_accounts().await?;
            write_accounts(&accounts, writer).await?;
        }
    }
    Ok(())
}

// Mutations print the updated account, or `{from, to}` for a transfer
async fn execute<B, C, W>(
    store: &LedgerStore<FixedPoint, B, C>,
    command: LedgerCommand<FixedPoint>,
    writer: &mut W,
) -> Result<(), AppError>
where
    B: LedgerBackend<FixedPoint>,
    C: Clock,
    W: AsyncWrite + Unpin + Send,
{
    let outcome = store.execute(command).await?;
    write_json(&outcome, writer).await?;
    Ok(())
}

async fn apply_batch<B, C>(
    store: &LedgerStore<FixedPoint, B, C>,
    input_file: &Path,
    abort_on_error: bool,
) -> Result<BatchSummary, AppError>
where
    B: LedgerBackend<FixedPoint>,
    C: Clock,
{
    if !tokio::fs::try_exists(input_file).await? {
        return Err(AppError::FileNotFound(input_file.display().to_string()));
    }
    info!(path = %input_file.display(), abort_on_error, "Applying command batch");

    let stream = CsvCommandStream::<FixedPoint>::from_file(input_file).await?;
    let policy = ErrorPolicy::from_abort_flag(abort_on_error);
    Ok(ProcessingSession::new(store, policy)
        .process_stream(stream)
        .await)
}
