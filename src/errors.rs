use thiserror::Error;

/// Identifies which kind of persisted record a codec or store was handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Account,
    Expense,
}

impl RecordKind {
    /// Wraps a decode failure in the corruption variant matching this record kind.
    pub fn corrupt(self, source: serde_json::Error) -> FinanceError {
        match self {
            RecordKind::Account => FinanceError::CorruptAccounts(source),
            RecordKind::Expense => FinanceError::CorruptExpenses(source),
        }
    }
}

/// Every failure the finance core can surface to its callers.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Invalid name: a name must not be empty")]
    InvalidName,
    #[error("Invalid selection: no account at position {0}")]
    InvalidSelection(i64),
    #[error("Invalid date: day {day} does not exist in {span}")]
    InvalidDate { span: String, day: u32 },
    #[error("Invalid span: {year}/{month} is not a calendar month")]
    InvalidSpan { year: i32, month: u32 },
    #[error("Invalid value: expense amounts must be finite")]
    InvalidValue,
    #[error("No account selected")]
    NoAccountSelected,
    #[error("Account file is corrupt: {0}")]
    CorruptAccounts(#[source] serde_json::Error),
    #[error("Expense file is corrupt: {0}")]
    CorruptExpenses(#[source] serde_json::Error),
    #[error("Too many {0:?} records to assign another id")]
    TooManyRecords(RecordKind),
    #[error("Serialization error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FinanceError {
    /// Returns the record kind for corruption and capacity failures.
    pub fn record_kind(&self) -> Option<RecordKind> {
        match self {
            FinanceError::CorruptAccounts(_) => Some(RecordKind::Account),
            FinanceError::CorruptExpenses(_) => Some(RecordKind::Expense),
            FinanceError::TooManyRecords(kind) => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;
