pub mod account;
pub mod amount;
pub mod clock;
pub mod error;
pub mod ledger;
pub mod operations;
pub mod transaction;

// Re-export commonly used types
pub use account::Account;
pub use amount::{AmountType, FixedPoint};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use ledger::{Ledger, TransferReceipt};
pub use operations::{
    apply_deposit, apply_self_transfer, apply_transfer, apply_withdrawal, validate_amount,
};
pub use transaction::{Transaction, TransactionKind};
