//! RenameColumn command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Change a column's title
#[derive(Debug, Deserialize, Serialize)]
pub struct RenameColumn {
    /// The column ID to rename
    pub id: ColumnId,
    /// The new title
    pub title: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Operation for RenameColumn {
    fn verb(&self) -> &'static str {
        "rename"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute for RenameColumn {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let renamed = store.rename_column(&self.id, &self.title);

        let value = json!({
            "id": self.id,
            "renamed": renamed,
            "title": store.column(&self.id).map(|c| c.title.as_str()),
        });
        ExecutionResult::finish(self, start, renamed, value)
    }
}
