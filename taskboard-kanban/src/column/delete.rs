//! DeleteColumn command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Delete a column and every task in it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteColumn {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute for DeleteColumn {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let deleted = store.delete_column(&self.id);

        let value = json!({
            "deleted": deleted.is_some(),
            "id": self.id,
            "tasks_removed": deleted.as_ref().map_or(0, |d| d.tasks.len()),
        });
        ExecutionResult::finish(self, start, deleted.is_some(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewTask;

    #[test]
    fn test_delete_column_reports_cascade() {
        let mut store = BoardStore::with_default_columns();
        store.insert_task(NewTask::new("done", "one")).unwrap();
        store.insert_task(NewTask::new("done", "two")).unwrap();
        store.insert_task(NewTask::new("todo", "stays")).unwrap();

        let value = DeleteColumn::new("done").execute(&mut store).into_value();

        assert_eq!(value["deleted"], true);
        assert_eq!(value["tasks_removed"], 2);
        assert_eq!(store.task_count(), 1);
    }

    #[test]
    fn test_delete_unknown_column() {
        let mut store = BoardStore::with_default_columns();
        let result = DeleteColumn::new("ghost").execute(&mut store);
        assert!(!result.is_change());
        assert_eq!(store.column_count(), 3);
    }
}
