//! ReassignTask command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Move the task at `task_index` into `column`, landing at `dest_index`
#[derive(Debug, Deserialize, Serialize)]
pub struct ReassignTask {
    pub task_index: usize,
    pub column: ColumnId,
    pub dest_index: usize,
}

impl ReassignTask {
    pub fn new(task_index: usize, column: impl Into<ColumnId>, dest_index: usize) -> Self {
        Self {
            task_index,
            column: column.into(),
            dest_index,
        }
    }
}

impl Operation for ReassignTask {
    fn verb(&self) -> &'static str {
        "reassign"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute for ReassignTask {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let changed = store.reassign_and_move_task(self.task_index, &self.column, self.dest_index);

        let value = json!({
            "reassigned": changed,
            "id": store.task_at(self.dest_index).filter(|_| changed).map(|t| t.id.as_str()),
            "column": self.column,
        });
        ExecutionResult::finish(self, start, changed, value)
    }
}
