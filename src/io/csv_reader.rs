use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawCommandRecord;
use crate::domain::AmountType;
use crate::engine::LedgerCommand;

/// Async stream of ledger commands from CSV input
pub struct CsvCommandStream<A: AmountType> {
    inner: Pin<Box<dyn Stream<Item = Result<LedgerCommand<A>, IoError>> + Send>>,
}

impl<A: AmountType> CsvCommandStream<A> {
    /// Create a new command stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawCommandRecord>()
            .map(|result| result.map_err(IoError::from).and_then(RawCommandRecord::parse::<A>));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new command stream from a file path
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl<A: AmountType> Stream for CsvCommandStream<A> {
    type Item = Result<LedgerCommand<A>, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
