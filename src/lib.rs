//! A small bank ledger kept in a single JSON document.
//!
//! Accounts hold a non-negative balance and an append-only transaction
//! history. Every operation loads the whole ledger, validates, mutates and
//! saves it back, so a rejected operation never touches the stored document.
//!
//! - [`domain`]: accounts, transactions, amounts and the pure ledger rules
//! - [`storage`]: whole-document backends (JSON file, in-memory)
//! - [`engine`]: [`engine::LedgerStore`], the gated read-modify-write store
//! - [`io`]: CSV command input and CSV/JSON output
//! - [`streaming`]: batch application of command streams
//! - [`app`]: the command-line front end

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod storage;
pub mod streaming;
