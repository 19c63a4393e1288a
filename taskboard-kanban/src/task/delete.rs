//! DeleteTask command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Delete a task
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteTask {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute for DeleteTask {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let deleted = store.delete_task(&self.id).is_some();

        let value = json!({
            "deleted": deleted,
            "id": self.id,
        });
        ExecutionResult::finish(self, start, deleted, value)
    }
}
