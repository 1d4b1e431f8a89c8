//! Pure balance operations on accounts.
//!
//! Every function checks all of its preconditions before touching the
//! account, so an `Err` always leaves its arguments unchanged.

use chrono::{DateTime, Utc};

use super::account::Account;
use super::amount::AmountType;
use super::error::DomainError;
use super::transaction::Transaction;

/// Require an amount to be present and strictly positive
pub fn validate_amount<A: AmountType>(amount: Option<A>) -> Result<A, DomainError> {
    match amount {
        Some(amount) if amount.is_positive() => Ok(amount),
        _ => Err(DomainError::InvalidAmount),
    }
}

/// Apply a deposit to an account
pub fn apply_deposit<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
    date: DateTime<Utc>,
) -> Result<(), DomainError> {
    let amount = validate_amount(Some(amount))?;

    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    account.record(Transaction::deposit(amount, date));
    Ok(())
}

/// Apply a withdrawal from an account
pub fn apply_withdrawal<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
    date: DateTime<Utc>,
) -> Result<(), DomainError> {
    let amount = validate_amount(Some(amount))?;

    if account.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    account.record(Transaction::withdraw(amount, date));
    Ok(())
}

/// Move funds between two distinct accounts, recording both legs with one timestamp
pub fn apply_transfer<A: AmountType>(
    from: &mut Account<A>,
    to: &mut Account<A>,
    amount: A,
    date: DateTime<Utc>,
) -> Result<(), DomainError> {
    let amount = validate_amount(Some(amount))?;

    if from.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let new_from = from
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;
    let new_to = to
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    let to_name = to.name().to_string();
    let from_name = from.name().to_string();

    from.set_balance(new_from);
    to.set_balance(new_to);
    from.record(Transaction::transfer_out(amount, to_name, date));
    to.record(Transaction::transfer_in(amount, from_name, date));
    Ok(())
}

/// Transfer from an account to itself: balance unchanged, both legs recorded
pub fn apply_self_transfer<A: AmountType>(
    account: &mut Account<A>,
    amount: A,
    date: DateTime<Utc>,
) -> Result<(), DomainError> {
    let amount = validate_amount(Some(amount))?;

    if account.balance() < amount {
        return Err(DomainError::InsufficientFunds);
    }

    let name = account.name().to_string();
    account.record(Transaction::transfer_out(amount, name.clone(), date));
    account.record(Transaction::transfer_in(amount, name, date));
    Ok(())
}
