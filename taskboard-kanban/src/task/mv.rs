//! MoveTask command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Move a task within the flat task sequence without changing its column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    pub from: usize,
    pub to: usize,
}

impl MoveTask {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute for MoveTask {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let moved = store.move_task(self.from, self.to);

        let value = json!({
            "moved": moved,
            "id": store.task_at(self.to).filter(|_| moved).map(|t| t.id.as_str()),
        });
        ExecutionResult::finish(self, start, moved, value)
    }
}
