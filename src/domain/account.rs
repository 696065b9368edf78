use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A person or household whose expenses are tracked.
///
/// `id` equals the account's position in the directory at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub guid: Uuid,
    pub name: String,
    pub email: String,
}

impl Account {
    /// Creates an account at directory position `id` with a fresh guid.
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            guid: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Identifiable for Account {
    fn guid(&self) -> Uuid {
        self.guid
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}
