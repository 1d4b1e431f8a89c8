pub mod args;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types
pub use args::{CliArgs, CliCommand, parse_args};
pub use cli::CliApp;
pub use commands::run_command;
pub use config::LedgerConfig;
pub use error::AppError;
pub use telemetry::init_tracing;
