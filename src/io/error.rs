use std::io;
use thiserror::Error;


/// IO-level errors for CSV command input and report output
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid command type: {0}")]
    InvalidCommandType(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            IoError::InvalidCommandType("refund".to_string()).to_string(),
            "Invalid command type: refund"
        );
        assert_eq!(
            IoError::MissingField("account required for deposit".to_string()).to_string(),
            "Missing required field: account required for deposit"
        );
        assert_eq!(
            IoError::InvalidAmount("xyz".to_string()).to_string(),
            "Invalid amount format: xyz"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let wrapped = IoError::from(io_err);

        match wrapped {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
