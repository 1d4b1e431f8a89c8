pub mod command;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use command::{AmountRequest, CommandOutcome, CreateAccountRequest, LedgerCommand};
pub use error::EngineError;
pub use store::LedgerStore;
