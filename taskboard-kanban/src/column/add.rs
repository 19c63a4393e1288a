//! AddColumn command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Append a new column to the right end of the board
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column title; `None` generates "Column N"
    pub title: Option<String>,
}

impl AddColumn {
    /// Add a column with an explicit title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Add a column with a generated title
    pub fn untitled() -> Self {
        Self::default()
    }
}

impl Operation for AddColumn {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute for AddColumn {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();

        let id = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => store.insert_column(title),
            _ => store.add_default_column(),
        };
        let value = store
            .column(&id)
            .and_then(|c| serde_json::to_value(c).ok())
            .unwrap_or_else(|| json!({ "id": id }));

        ExecutionResult::finish(self, start, true, value)
    }
}
