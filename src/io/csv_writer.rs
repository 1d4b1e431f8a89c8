use csv_async::{AsyncWriter, AsyncWriterBuilder};
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::{Account, AmountType};

/// Write the account listing as CSV: `id,name,balance,transactions`
pub async fn write_accounts<A, W>(accounts: &[Account<A>], writer: W) -> Result<(), IoError>
where
    A: AmountType,
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = AsyncWriterBuilder::new().create_writer(Vec::new());
    csv.write_record(&["id", "name", "balance", "transactions"])
        .await?;

    for account in accounts {
        csv.write_record(&[
            account.id().to_string(),
            account.name().to_string(),
            account.balance().to_decimal_string(),
            account.transactions().len().to_string(),
        ])
        .await?;
    }

    write_out(csv, writer).await
}

/// Write one account's transaction history as CSV, newest first:
/// `date,type,amount,counterparty`
pub async fn write_statement<A, W>(account: &Account<A>, writer: W) -> Result<(), IoError>
where
    A: AmountType,
    W: AsyncWrite + Unpin + Send,
{
    let mut transactions: Vec<_> = account.transactions().iter().collect();
    // Stable, so same-instant records keep their recorded order
    transactions.sort_by(|a, b| b.date().cmp(&a.date()));

    let mut csv = AsyncWriterBuilder::new().create_writer(Vec::new());
    csv.write_record(&["date", "type", "amount", "counterparty"])
        .await?;

    for tx in transactions {
        csv.write_record(&[
            tx.date().to_rfc3339(),
            tx.kind().as_str().to_string(),
            tx.amount().to_decimal_string(),
            tx.counterparty().unwrap_or_default().to_string(),
        ])
        .await?;
    }

    write_out(csv, writer).await
}

/// Write a value as pretty JSON followed by a newline
pub async fn write_json<T, W>(value: &T, mut writer: W) -> Result<(), IoError>
where
    T: Serialize + ?Sized,
    W: AsyncWrite + Unpin + Send,
{
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

async fn write_out<W>(csv: AsyncWriter<Vec<u8>>, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let bytes = csv.into_inner().await?;
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}
