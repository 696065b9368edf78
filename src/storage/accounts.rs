use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    domain::Account,
    errors::{FinanceError, Result},
    storage::{read_if_exists, records, write_replacing},
};

/// The full list of accounts, backed by a single JSON file.
#[derive(Debug)]
pub struct AccountDirectory {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountDirectory {
    /// Loads the directory. A missing file is an empty directory; the file is
    /// only created by the first write.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let accounts = match read_if_exists(&path)? {
            Some(bytes) => records::decode(&bytes)?,
            None => Vec::new(),
        };
        debug!(path = %path.display(), count = accounts.len(), "account directory loaded");
        Ok(Self { path, accounts })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts ordered most recently created first.
    pub fn list(&self) -> Vec<&Account> {
        self.accounts.iter().rev().collect()
    }

    /// Looks up an account by its storage position.
    pub fn get(&self, index: i64) -> Result<&Account> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.accounts.get(position))
            .ok_or(FinanceError::InvalidSelection(index))
    }

    /// Appends a new account and rewrites the backing file.
    pub fn create(&mut self, name: &str, email: &str) -> Result<&Account> {
        if name.trim().is_empty() {
            return Err(FinanceError::InvalidName);
        }
        let id = records::next_id::<Account>(self.accounts.len(), 0)?;
        self.accounts.push(Account::new(id, name, email));
        if let Err(err) = self.flush() {
            self.accounts.pop();
            return Err(err);
        }
        let account = &self.accounts[self.accounts.len() - 1];
        info!(id = account.id, guid = %account.guid, "account created");
        Ok(account)
    }

    fn flush(&self) -> Result<()> {
        let data = records::encode(&self.accounts)?;
        write_replacing(&self.path, &data)?;
        Ok(())
    }
}
