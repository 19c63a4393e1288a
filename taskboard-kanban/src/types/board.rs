//! Board-level types: Column

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage. Its place in the board's column
/// sequence is its horizontal position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    /// Create a column with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
        }
    }

    /// Create a column with a fixed id
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Get the default columns for a new board
    pub fn default_columns() -> Vec<Column> {
        vec![
            Column::with_id("todo", "To Do"),
            Column::with_id("in-progress", "In Progress"),
            Column::with_id("done", "Done"),
        ]
    }
}
