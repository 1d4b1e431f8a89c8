use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::config::{DATA_PATH_ENV, DEFAULT_DATA_PATH, LedgerConfig};
use crate::domain::{AmountType, FixedPoint};

/// Keep a small bank ledger in a JSON document
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Keep a small bank ledger in a JSON document", long_about = None)]
pub struct CliArgs {
    /// Path of the ledger document
    #[arg(
        long = "data",
        value_name = "PATH",
        env = DATA_PATH_ENV,
        default_value = DEFAULT_DATA_PATH,
        global = true
    )]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Ledger operations available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// List every account as CSV
    List,

    /// Print one account as JSON
    Show { id: u32 },

    /// Print an account's transactions as CSV, newest first
    Statement { id: u32 },

    /// Open a new account with a zero balance
    Create { name: String },

    /// Add funds to an account
    #[command(allow_negative_numbers = true)]
    Deposit {
        id: u32,
        #[arg(value_parser = parse_amount)]
        amount: FixedPoint,
    },

    /// Take funds out of an account
    #[command(allow_negative_numbers = true)]
    Withdraw {
        id: u32,
        #[arg(value_parser = parse_amount)]
        amount: FixedPoint,
    },

    /// Move funds between two accounts
    #[command(allow_negative_numbers = true)]
    Transfer {
        from: u32,
        to: u32,
        #[arg(value_parser = parse_amount)]
        amount: FixedPoint,
    },

    /// Apply a CSV file of commands (`type,account,to,amount,name`)
    Apply {
        #[arg(value_name = "CSV")]
        input_file: PathBuf,

        /// Stop at the first rejected command instead of skipping it
        #[arg(long = "abort-on-error")]
        abort_on_error: bool,
    },
}

impl CliArgs {
    pub fn to_config(&self) -> LedgerConfig {
        LedgerConfig::new(self.data.clone())
    }
}

/// Parse command-line arguments, exiting with usage on error
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

// Sign and zero are left to the ledger so they surface as InvalidAmount
fn parse_amount(s: &str) -> Result<FixedPoint, String> {
    FixedPoint::from_decimal_str(s).map_err(|e| format!("{e}: {s}"))
}
