//! UpdateTask command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use crate::types::{ColumnId, Priority, TaskId, TaskPatch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Update an existing task
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// Fields to change
    #[serde(flatten)]
    pub patch: TaskPatch,
}

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            patch: TaskPatch::new(),
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.patch = self.patch.with_content(content);
        self
    }

    /// Set or clear the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.patch = self.patch.with_description(description);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.patch = self.patch.with_priority(priority);
        self
    }

    /// Set or clear the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.patch = self.patch.with_due_date(due_date);
        self
    }

    /// Move the task to another column
    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.patch = self.patch.with_column(column);
        self
    }
}

impl Operation for UpdateTask {
    fn verb(&self) -> &'static str {
        "update"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute for UpdateTask {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let updated = store.update_task(&self.id, &self.patch);

        let value = store
            .task(&self.id)
            .and_then(|task| serde_json::to_value(task).ok())
            .unwrap_or_else(|| json!({ "id": self.id, "updated": false }));
        ExecutionResult::finish(self, start, updated, value)
    }
}
