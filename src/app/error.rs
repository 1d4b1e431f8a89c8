use std::io;
use thiserror::Error;

use crate::engine::EngineError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Batch aborted after {applied} applied and {failed} failed commands")]
    BatchAborted { applied: usize, failed: usize },
}
