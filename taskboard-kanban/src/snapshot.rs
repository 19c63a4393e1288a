//! Verbatim snapshots of the two board sequences.
//!
//! A snapshot is what a persistence layer stores and hands back: the column
//! list and the flat task list, in order. Restoring rebuilds a store from it.

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Column, Task};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Both board sequences, in board order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl BoardStore {
    /// Capture the current sequences
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns().cloned().collect(),
            tasks: self.tasks().cloned().collect(),
        }
    }
}

impl BoardSnapshot {
    /// Rebuild a store using the default configuration
    pub fn restore(self) -> Result<BoardStore> {
        self.restore_with_config(&BoardConfig::default())
    }

    /// Rebuild a store.
    ///
    /// Duplicate ids are rejected. Tasks whose column no longer exists are
    /// dropped so every restored task renders in some column.
    pub fn restore_with_config(self, config: &BoardConfig) -> Result<BoardStore> {
        let mut columns = IndexMap::with_capacity(self.columns.len());
        for column in self.columns {
            if columns.contains_key(&column.id) {
                return Err(BoardError::duplicate_id("column", column.id.to_string()));
            }
            columns.insert(column.id.clone(), column);
        }

        let mut tasks = IndexMap::with_capacity(self.tasks.len());
        for task in self.tasks {
            if tasks.contains_key(&task.id) {
                return Err(BoardError::duplicate_id("task", task.id.to_string()));
            }
            if !columns.contains_key(&task.column_id) {
                warn!(task = %task.id, column = %task.column_id, "dropping task without a column");
                continue;
            }
            tasks.insert(task.id.clone(), task);
        }

        Ok(BoardStore::from_parts(columns, tasks, config))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        info!(
            path = %path.display(),
            columns = self.columns.len(),
            tasks = self.tasks.len(),
            "board snapshot saved"
        );
        Ok(())
    }

    /// Read a snapshot written by [`BoardSnapshot::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let snapshot = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            columns = snapshot.columns.len(),
            tasks = snapshot.tasks.len(),
            "board snapshot loaded"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, NewTask, Priority};
    use tempfile::TempDir;

    fn sample() -> BoardStore {
        let mut store = BoardStore::with_default_columns();
        store.insert_task(NewTask::new("todo", "a")).unwrap();
        store
            .insert_task(NewTask::new("done", "b").with_priority(Priority::High))
            .unwrap();
        store.move_task(1, 0);
        store
    }

    #[test_log::test]
    fn test_restore_preserves_order() {
        let store = sample();
        let restored = store.snapshot().restore().unwrap();

        assert_eq!(restored.snapshot(), store.snapshot());
        assert_eq!(restored.task_at(0).unwrap().content, "b");
        assert_eq!(restored.revision(), 0);
    }

    #[test_log::test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("boards").join("task-store.json");
        let snapshot = sample().snapshot();

        snapshot.save(&path).unwrap();
        let loaded = BoardSnapshot::load(&path).unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[test_log::test]
    fn test_restore_drops_orphan_tasks() {
        let mut snapshot = sample().snapshot();
        snapshot.columns.retain(|c| c.id != ColumnId::from("done"));

        let store = snapshot.restore().unwrap();

        assert_eq!(store.task_count(), 1);
        assert_eq!(store.task_at(0).unwrap().content, "a");
    }

    #[test]
    fn test_restore_rejects_duplicates() {
        let mut snapshot = sample().snapshot();
        snapshot.tasks.push(snapshot.tasks[0].clone());

        let err = snapshot.restore().unwrap_err();
        assert!(matches!(err, BoardError::DuplicateId { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = BoardSnapshot::load(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn test_from_json_original_shape() {
        let json = r#"{
            "columns": [{"id": "todo", "title": "To Do"}],
            "tasks": [{
                "id": "t1",
                "columnId": "todo",
                "content": "Imported",
                "priority": "Low",
                "createdAt": "2026-01-01T09:00:00Z"
            }]
        }"#;

        let store = BoardSnapshot::from_json(json).unwrap().restore().unwrap();
        let task = store.task_at(0).unwrap();
        assert_eq!(task.id.as_str(), "t1");
        assert_eq!(task.priority, Priority::Low);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_from_json_datetime_due_date() {
        let json = r#"{
            "columns": [{"id": "todo", "title": "To Do"}],
            "tasks": [{
                "id": "t1",
                "columnId": "todo",
                "content": "Dated",
                "priority": "Medium",
                "dueDate": "2026-01-02T00:00:00.000Z",
                "createdAt": "2025-12-30T08:15:42.123Z"
            }]
        }"#;

        let store = BoardSnapshot::from_json(json).unwrap().restore().unwrap();
        let day = chrono::NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

        assert_eq!(store.task_at(0).unwrap().due_date, Some(day));
        assert_eq!(store.tasks_due_on(day).count(), 1);

        let saved = store.snapshot().to_json().unwrap();
        assert!(saved.contains(r#""dueDate": "2026-01-02""#));
    }
}
