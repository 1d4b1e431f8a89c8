use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::amount::AmountType;
use super::error::DomainError;
use super::operations::{apply_deposit, apply_self_transfer, apply_transfer, apply_withdrawal};

/// Accounts a fresh ledger starts with: (id, name, opening balance in whole units)
pub const SEED_ACCOUNTS: [(u32, &str, i64); 2] = [(1, "João Silva", 1000), (2, "Maria Souza", 5000)];

/// Aggregate root: every account in storage order
///
/// This is also the persisted document, `{ "accounts": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct Ledger<A: AmountType> {
    #[serde(default)]
    accounts: Vec<Account<A>>,
}

/// Both sides of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt<A: AmountType> {
    pub from: Account<A>,
    pub to: Account<A>,
}

impl<A: AmountType> Ledger<A> {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Ledger holding the two demonstration accounts
    pub fn seeded() -> Result<Self, DomainError> {
        let accounts = SEED_ACCOUNTS
            .iter()
            .map(|&(id, name, units)| {
                let balance = A::from_decimal_str(&units.to_string())?;
                Ok(Account::with_balance(id, name, balance))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Self { accounts })
    }

    pub fn accounts(&self) -> &[Account<A>] {
        &self.accounts
    }

    pub fn get(&self, id: u32) -> Option<&Account<A>> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    /// Check the invariants a loaded document must satisfy
    pub fn verify(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(self.accounts.len());

        for account in &self.accounts {
            if account.id() == 0 {
                return Err(DomainError::CorruptLedger("account id 0".to_string()));
            }
            if !seen.insert(account.id()) {
                return Err(DomainError::CorruptLedger(format!(
                    "duplicate account id {}",
                    account.id()
                )));
            }
            if account.balance() < A::zero() {
                return Err(DomainError::CorruptLedger(format!(
                    "negative balance on account {}",
                    account.id()
                )));
            }
            if account.transactions().iter().any(|tx| !tx.amount().is_positive()) {
                return Err(DomainError::CorruptLedger(format!(
                    "non-positive transaction amount on account {}",
                    account.id()
                )));
            }
        }

        Ok(())
    }

    /// Append a new zero-balance account with id highest + 1, or 1 when empty
    pub fn create_account(&mut self, name: impl Into<String>) -> Result<&Account<A>, DomainError> {
        let id = match self.accounts.iter().map(Account::id).max() {
            Some(max) => max.checked_add(1).ok_or(DomainError::Overflow)?,
            None => 1,
        };

        self.accounts.push(Account::new(id, name));
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    pub fn deposit(
        &mut self,
        id: u32,
        amount: A,
        date: DateTime<Utc>,
    ) -> Result<&Account<A>, DomainError> {
        let index = self.position(id)?;
        apply_deposit(&mut self.accounts[index], amount, date)?;
        Ok(&self.accounts[index])
    }

    pub fn withdraw(
        &mut self,
        id: u32,
        amount: A,
        date: DateTime<Utc>,
    ) -> Result<&Account<A>, DomainError> {
        let index = self.position(id)?;
        apply_withdrawal(&mut self.accounts[index], amount, date)?;
        Ok(&self.accounts[index])
    }

    /// Transfer between accounts; the source id is looked up first
    pub fn transfer(
        &mut self,
        from_id: u32,
        to_id: u32,
        amount: A,
        date: DateTime<Utc>,
    ) -> Result<TransferReceipt<A>, DomainError> {
        let from_index = self.position(from_id)?;
        let to_index = self.position(to_id)?;

        if from_index == to_index {
            let account = &mut self.accounts[from_index];
            apply_self_transfer(account, amount, date)?;
            return Ok(TransferReceipt {
                from: account.clone(),
                to: account.clone(),
            });
        }

        let (from, to) = pair_mut(&mut self.accounts, from_index, to_index);
        apply_transfer(from, to, amount, date)?;

        Ok(TransferReceipt {
            from: from.clone(),
            to: to.clone(),
        })
    }

    fn position(&self, id: u32) -> Result<usize, DomainError> {
        self.accounts
            .iter()
            .position(|account| account.id() == id)
            .ok_or(DomainError::AccountNotFound(id))
    }
}

/// Two distinct mutable elements of a slice
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
