//! Working context: which account is selected and which month is active.
//!
//! The manager is the only writer of the context. It is built by
//! [`WorkingContextManager::init`], which loads the account directory and then restores
//! the checkpoint, and it writes the checkpoint back when dropped.

use std::fs;

use tracing::{debug, info, warn};

use crate::{
    config::DataPaths,
    core::clock::Clock,
    domain::{Account, Expense, Span},
    errors::{FinanceError, Result},
    storage::{AccountDirectory, Checkpoint, CheckpointStore, ExpensePartitionStore, Partition},
};

/// Snapshot of the process-scope working context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingContext {
    pub selected_account_index: Option<usize>,
    pub active_span: Span,
}

/// Coordinates the account directory, expense partitions and the checkpoint.
pub struct WorkingContextManager {
    paths: DataPaths,
    accounts: AccountDirectory,
    partitions: ExpensePartitionStore,
    checkpoints: CheckpointStore,
    clock: Box<dyn Clock>,
    context: WorkingContext,
    /// Loaded partition of the selected account; `Some` exactly when an account is selected.
    partition: Option<Partition>,
}

impl WorkingContextManager {
    /// Opens the data directory and restores the previous working context.
    ///
    /// Fails with `CorruptAccounts` if the account file cannot be parsed.
    pub fn init(paths: DataPaths, clock: Box<dyn Clock>) -> Result<Self> {
        fs::create_dir_all(paths.base_dir())?;
        let accounts = AccountDirectory::load(paths.accounts_file())?;
        let context = WorkingContext {
            selected_account_index: None,
            active_span: clock.current_span(),
        };
        let mut manager = Self {
            partitions: ExpensePartitionStore::new(paths.base_dir()),
            checkpoints: CheckpointStore::new(paths.state_file()),
            paths,
            accounts,
            clock,
            context,
            partition: None,
        };
        manager.restore_from_checkpoint()?;
        info!(
            base = %manager.paths.base_dir().display(),
            accounts = manager.accounts.len(),
            selected = ?manager.context.selected_account_index,
            span = %manager.context.active_span,
            "working context ready"
        );
        Ok(manager)
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn context(&self) -> WorkingContext {
        self.context
    }

    pub fn active_span(&self) -> Span {
        self.context.active_span
    }

    /// Accounts ordered most recently created first.
    pub fn list_accounts(&self) -> Vec<&Account> {
        self.accounts.list()
    }

    pub fn create_account(&mut self, name: &str, email: &str) -> Result<&Account> {
        self.accounts.create(name, email)
    }

    /// Selects the account at `index` and loads its partition for the active span.
    /// On failure the previous selection stays in place.
    pub fn select_account(&mut self, index: i64) -> Result<&Account> {
        let account = self.accounts.get(index)?;
        let partition = self.partitions.load(account, self.context.active_span)?;
        let position = account.id;
        self.partition = Some(partition);
        // `get` succeeded, so the index is a valid non-negative position.
        self.context.selected_account_index = Some(index as usize);
        info!(index, account = position, span = %self.context.active_span, "account selected");
        self.accounts.get(index)
    }

    /// Details of the selected account.
    pub fn selected_account(&self) -> Result<&Account> {
        let index = self
            .context
            .selected_account_index
            .ok_or(FinanceError::NoAccountSelected)?;
        self.accounts.get(index as i64)
    }

    /// Expenses of the active partition, most recently added first.
    pub fn list_expenses(&self) -> Result<Vec<&Expense>> {
        self.partition
            .as_ref()
            .map(Partition::list)
            .ok_or(FinanceError::NoAccountSelected)
    }

    /// Records an expense on `day` of the active span.
    pub fn add_expense(
        &mut self,
        name: &str,
        value: f64,
        day: u32,
        description: Option<String>,
    ) -> Result<&Expense> {
        let partition = self
            .partition
            .as_mut()
            .ok_or(FinanceError::NoAccountSelected)?;
        let date = partition.date_for(day)?;
        partition.append(name, value, date, description)
    }

    /// Makes `(year, month)` the active span and loads its partition. The previous
    /// partition's file is left untouched.
    pub fn switch_span(&mut self, year: i32, month: u32) -> Result<Span> {
        if self.partition.is_none() {
            return Err(FinanceError::NoAccountSelected);
        }
        let span = Span::new(year, month)?;
        let account = self.selected_account()?;
        let partition = self.partitions.load(account, span)?;
        self.partition = Some(partition);
        self.context.active_span = span;
        info!(span = %span, "active span switched");
        Ok(span)
    }

    /// Switches to the calendar month containing today.
    pub fn switch_to_present(&mut self) -> Result<Span> {
        let today = self.clock.current_span();
        self.switch_span(today.year(), today.month())
    }

    /// Writes the checkpoint. Does nothing when no account is selected, which leaves
    /// any older checkpoint on disk in place.
    pub fn persist_checkpoint(&self) -> Result<()> {
        let Some(index) = self.context.selected_account_index else {
            debug!("no account selected; skipping checkpoint");
            return Ok(());
        };
        let Ok(index) = i32::try_from(index) else {
            warn!(index, "selected index does not fit the checkpoint; skipping");
            return Ok(());
        };
        let checkpoint = Checkpoint::new(index, self.context.active_span);
        self.checkpoints.save(&checkpoint)?;
        Ok(())
    }

    /// Applies the checkpoint's span, then re-selects its account so the partition is
    /// loaded for the restored span.
    fn restore_from_checkpoint(&mut self) -> Result<()> {
        let checkpoint = self.checkpoints.load(self.context.active_span)?;
        let Some(index) = checkpoint.selected_index() else {
            debug!("checkpoint names no account");
            return Ok(());
        };
        self.context.active_span = checkpoint.active_span;
        self.select_account(i64::from(index))?;
        Ok(())
    }
}

impl Drop for WorkingContextManager {
    fn drop(&mut self) {
        if let Err(err) = self.persist_checkpoint() {
            warn!(error = %err, "failed to write checkpoint on shutdown");
        }
    }
}
