//! AddTask command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use crate::types::{ColumnId, NewTask, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Create a task at the end of the board's task sequence
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    #[serde(flatten)]
    pub task: NewTask,
}

impl AddTask {
    pub fn new(column: impl Into<ColumnId>, content: impl Into<String>) -> Self {
        Self {
            task: NewTask::new(column, content),
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.task = self.task.with_priority(priority);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task = self.task.with_description(description);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.task = self.task.with_due_date(due_date);
        self
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute for AddTask {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();

        let value = store
            .insert_task(self.task.clone())
            .and_then(|id| store.task(&id))
            .and_then(|task| serde_json::to_value(task).ok());

        match value {
            Some(value) => ExecutionResult::finish(self, start, true, value),
            None => ExecutionResult::finish(
                self,
                start,
                false,
                json!({ "created": false, "columnId": self.task.column_id }),
            ),
        }
    }
}
