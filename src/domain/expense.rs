use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A single spending entry inside one account's monthly partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// 1-based position inside the partition.
    pub id: u32,
    pub guid: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub value: f64,
}

impl Expense {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: Option<String>,
        date: NaiveDate,
        value: f64,
    ) -> Self {
        Self {
            id,
            guid: Uuid::new_v4(),
            name: name.into(),
            description,
            date,
            value,
        }
    }
}

impl Identifiable for Expense {
    fn guid(&self) -> Uuid {
        self.guid
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => format!(
                "{} - {}: {:.2} ({})",
                self.date, self.name, self.value, description
            ),
            _ => format!("{} - {}: {:.2}", self.date, self.name, self.value),
        }
    }
}
