use serde::{Deserialize, Serialize};

use super::amount::AmountType;
use super::transaction::Transaction;

/// Named balance holder with private fields enforcing invariants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct Account<A: AmountType> {
    id: u32,
    name: String,
    balance: A,
    #[serde(default)]
    transactions: Vec<Transaction<A>>,
}

impl<A: AmountType> Account<A> {
    /// Create a new account with zero balance and no history
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self::with_balance(id, name, A::zero())
    }

    /// Create an account holding an opening balance (used for seeding)
    pub(crate) fn with_balance(id: u32, name: impl Into<String>, balance: A) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> A {
        self.balance
    }

    /// Transaction history in the order operations were applied
    pub fn transactions(&self) -> &[Transaction<A>] {
        &self.transactions
    }

    pub fn last_transaction(&self) -> Option<&Transaction<A>> {
        self.transactions.last()
    }

    // Internal mutation methods for use by operations module
    pub(crate) fn set_balance(&mut self, balance: A) {
        self.balance = balance;
    }

    pub(crate) fn record(&mut self, transaction: Transaction<A>) {
        self.transactions.push(transaction);
    }
}
