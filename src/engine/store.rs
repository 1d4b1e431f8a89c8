use std::marker::PhantomData;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::command::{CommandOutcome, LedgerCommand};
use super::error::EngineError;
use crate::domain::{
    Account, AmountType, Clock, DomainError, Ledger, SystemClock, TransferReceipt,
    validate_amount,
};
use crate::storage::{LedgerBackend, StorageError};

/// The ledger store: owns the backend and serializes every read-modify-write
///
/// Each operation loads the whole ledger, validates, mutates the loaded copy
/// and saves it back. Mutations hold the write side of `gate` for that whole
/// cycle, so tasks sharing one store cannot lose each other's updates.
pub struct LedgerStore<A, B, C = SystemClock>
where
    A: AmountType,
    B: LedgerBackend<A>,
    C: Clock,
{
    backend: B,
    clock: C,
    gate: RwLock<()>,
    _phantom: PhantomData<A>,
}

impl<A, B> LedgerStore<A, B, SystemClock>
where
    A: AmountType,
    B: LedgerBackend<A>,
{
    /// Open a store on `backend`, seeding it if it holds no document
    pub async fn open(backend: B) -> Result<Self, EngineError> {
        Self::open_with_clock(backend, SystemClock).await
    }
}

impl<A, B, C> LedgerStore<A, B, C>
where
    A: AmountType,
    B: LedgerBackend<A>,
    C: Clock,
{
    /// Open a store with an explicit timestamp source
    pub async fn open_with_clock(backend: B, clock: C) -> Result<Self, EngineError> {
        let store = Self {
            backend,
            clock,
            gate: RwLock::new(()),
            _phantom: PhantomData,
        };
        store.seed_if_missing().await?;
        Ok(store)
    }

    /// Underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn seed_if_missing(&self) -> Result<(), EngineError> {
        let _guard = self.gate.write().await;

        if self.backend.load().await?.is_some() {
            return Ok(());
        }

        let ledger = Ledger::seeded()?;
        self.backend.save(&ledger).await?;
        info!(accounts = ledger.accounts().len(), "Seeded new ledger");
        Ok(())
    }

    async fn load(&self) -> Result<Ledger<A>, EngineError> {
        self.backend
            .load()
            .await?
            .ok_or(EngineError::Storage(StorageError::Missing))
    }

    /// All accounts in storage order
    pub async fn list_accounts(&self) -> Result<Vec<Account<A>>, EngineError> {
        let _guard = self.gate.read().await;
        Ok(self.load().await?.accounts().to_vec())
    }

    pub async fn get_account(&self, id: u32) -> Result<Account<A>, EngineError> {
        let _guard = self.gate.read().await;
        let ledger = self.load().await?;
        ledger
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::AccountNotFound(id).into())
    }

    pub async fn create_account(&self, name: impl Into<String>) -> Result<Account<A>, EngineError> {
        let name = name.into();
        let _guard = self.gate.write().await;

        let mut ledger = self.load().await?;
        let account = ledger.create_account(name)?.clone();
        self.backend.save(&ledger).await?;

        debug!(account_id = account.id(), "Created account");
        Ok(account)
    }

    pub async fn deposit(&self, id: u32, amount: Option<A>) -> Result<Account<A>, EngineError> {
        let amount = validate_amount(amount)?;
        let _guard = self.gate.write().await;

        let mut ledger = self.load().await?;
        let account = ledger.deposit(id, amount, self.clock.now())?.clone();
        self.backend.save(&ledger).await?;

        debug!(account_id = id, %amount, balance = %account.balance(), "Applied deposit");
        Ok(account)
    }

    pub async fn withdraw(&self, id: u32, amount: Option<A>) -> Result<Account<A>, EngineError> {
        let amount = validate_amount(amount)?;
        let _guard = self.gate.write().await;

        let mut ledger = self.load().await?;
        let account = ledger.withdraw(id, amount, self.clock.now())?.clone();
        self.backend.save(&ledger).await?;

        debug!(account_id = id, %amount, balance = %account.balance(), "Applied withdrawal");
        Ok(account)
    }

    pub async fn transfer(
        &self,
        from_id: u32,
        to_id: u32,
        amount: Option<A>,
    ) -> Result<TransferReceipt<A>, EngineError> {
        let amount = validate_amount(amount)?;
        let _guard = self.gate.write().await;

        let mut ledger = self.load().await?;
        let receipt = ledger.transfer(from_id, to_id, amount, self.clock.now())?;
        self.backend.save(&ledger).await?;

        debug!(from_id, to_id, %amount, "Applied transfer");
        Ok(receipt)
    }

    /// Execute a command through the matching operation
    ///
    /// The request body is validated first, so a missing or non-positive
    /// amount never reaches the gate or the backend.
    pub async fn execute(&self, command: LedgerCommand<A>) -> Result<CommandOutcome<A>, EngineError> {
        match command {
            LedgerCommand::Create(request) => self
                .create_account(request.name)
                .await
                .map(CommandOutcome::Account),
            LedgerCommand::Deposit { account_id, request } => {
                let amount = request.amount()?;
                self.deposit(account_id, Some(amount))
                    .await
                    .map(CommandOutcome::Account)
            }
            LedgerCommand::Withdraw { account_id, request } => {
                let amount = request.amount()?;
                self.withdraw(account_id, Some(amount))
                    .await
                    .map(CommandOutcome::Account)
            }
            LedgerCommand::Transfer {
                from_id,
                to_id,
                request,
            } => {
                let amount = request.amount()?;
                self.transfer(from_id, to_id, Some(amount))
                    .await
                    .map(CommandOutcome::Transfer)
            }
        }
    }
}
