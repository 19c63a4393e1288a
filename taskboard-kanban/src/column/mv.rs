//! MoveColumn command

use crate::operation::{ExecutionResult, Execute, Operation};
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

/// Move the column at one index to another
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveColumn {
    pub from: usize,
    pub to: usize,
}

impl MoveColumn {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl Operation for MoveColumn {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "column"
    }
}

impl Execute for MoveColumn {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult {
        let start = Instant::now();
        let moved = store.move_column(self.from, self.to);

        let value = json!({
            "moved": moved,
            "order": store.columns().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        });
        ExecutionResult::finish(self, start, moved, value)
    }
}
