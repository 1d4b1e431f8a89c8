pub mod error;
pub mod session;

// Re-export commonly used types
pub use error::ErrorPolicy;
pub use session::{BatchSummary, ProcessingSession};
