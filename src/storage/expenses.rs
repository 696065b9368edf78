//! Per-account, per-month expense partitions.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    domain::{Account, Displayable, Expense, Span},
    errors::{FinanceError, Result},
    storage::{read_if_exists, records, write_replacing},
};

/// Identifies one partition: an account's expenses for one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    pub account: Uuid,
    pub span: Span,
}

impl PartitionKey {
    pub fn new(account: &Account, span: Span) -> Self {
        Self {
            account: account.guid,
            span,
        }
    }

    /// `{guid without dashes}_expenses_{YYYY_MM}.json`
    pub fn file_name(&self) -> String {
        format!("{}_expenses_{}.json", self.account.simple(), self.span)
    }
}

/// Locates partition files under the data directory.
#[derive(Debug, Clone)]
pub struct ExpensePartitionStore {
    base_dir: PathBuf,
}

impl ExpensePartitionStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn partition_path(&self, key: &PartitionKey) -> PathBuf {
        self.base_dir.join(key.file_name())
    }

    /// Loads the partition for `(account, span)`. A missing file yields an empty
    /// partition and is not created until the first append.
    pub fn load(&self, account: &Account, span: Span) -> Result<Partition> {
        let key = PartitionKey::new(account, span);
        let path = self.partition_path(&key);
        let expenses = match read_if_exists(&path)? {
            Some(bytes) => records::decode(&bytes)?,
            None => Vec::new(),
        };
        debug!(path = %path.display(), count = expenses.len(), "expense partition loaded");
        Ok(Partition {
            key,
            path,
            expenses,
        })
    }
}

/// The in-memory contents of one loaded partition.
#[derive(Debug)]
pub struct Partition {
    key: PartitionKey,
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl Partition {
    pub fn key(&self) -> PartitionKey {
        self.key
    }

    pub fn span(&self) -> Span {
        self.key.span
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expenses ordered most recently added first.
    pub fn list(&self) -> Vec<&Expense> {
        self.expenses.iter().rev().collect()
    }

    /// Composes a date inside this partition's month.
    pub fn date_for(&self, day: u32) -> Result<NaiveDate> {
        self.key.span.date(day)
    }

    /// Appends an expense and rewrites the partition file.
    pub fn append(
        &mut self,
        name: &str,
        value: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Result<&Expense> {
        if name.trim().is_empty() {
            return Err(FinanceError::InvalidName);
        }
        if !value.is_finite() {
            return Err(FinanceError::InvalidValue);
        }
        if Span::containing(date) != self.key.span {
            return Err(FinanceError::InvalidDate {
                span: self.key.span.to_string(),
                day: date.day(),
            });
        }

        let id = records::next_id::<Expense>(self.expenses.len(), 1)?;
        self.expenses
            .push(Expense::new(id, name, description, date, value));
        if let Err(err) = self.flush() {
            self.expenses.pop();
            return Err(err);
        }
        let expense = &self.expenses[self.expenses.len() - 1];
        info!(
            partition = %self.key.file_name(),
            id = expense.id,
            expense = %expense.display_label(),
            "expense recorded"
        );
        Ok(expense)
    }

    fn flush(&self) -> Result<()> {
        let data = records::encode(&self.expenses)?;
        write_replacing(&self.path, &data)?;
        Ok(())
    }
}
