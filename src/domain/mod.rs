pub mod account;
pub mod common;
pub mod expense;
pub mod span;

pub use account::Account;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use expense::Expense;
pub use span::{ParseSpanError, Span};
