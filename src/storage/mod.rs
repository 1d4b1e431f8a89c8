pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::StorageError;
pub use json_file::JsonFileBackend;
pub use memory::InMemoryBackend;
pub use traits::LedgerBackend;
