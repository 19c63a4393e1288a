//! Ordered collection store for columns and tasks.
//!
//! The store owns two ordered sequences: the columns (left to right) and one
//! flat sequence of tasks. A column's visual contents are the tasks carrying
//! its id, in flat-sequence order.
//!
//! Every public mutation is total. Stale ids and out-of-range indices resolve
//! to "no change" and are reported through the return value, never as an
//! error or a panic. Effective mutations bump [`BoardStore::revision`].

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::types::{Column, ColumnId, NewTask, Priority, Task, TaskId, TaskPatch};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::hash::Hash;
use tracing::debug;

/// Outcome of a successful column deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedColumn {
    pub column: Column,
    /// Tasks removed with the column, in their former flat-sequence order
    pub tasks: Vec<Task>,
}

/// Canonical board state: ordered columns plus the flat ordered task list.
#[derive(Debug, Clone)]
pub struct BoardStore {
    columns: IndexMap<ColumnId, Column>,
    tasks: IndexMap<TaskId, Task>,
    default_priority: Priority,
    column_title_prefix: String,
    revision: u64,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Create an empty board
    pub fn new() -> Self {
        let config = BoardConfig::default();
        Self {
            columns: IndexMap::new(),
            tasks: IndexMap::new(),
            default_priority: config.default_priority,
            column_title_prefix: config.column_title_prefix,
            revision: 0,
        }
    }

    /// Create a board seeded with the "To Do" / "In Progress" / "Done" columns
    pub fn with_default_columns() -> Self {
        Self::from_config(&BoardConfig::default())
    }

    /// Create a board seeded from configuration
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut store = Self {
            columns: IndexMap::new(),
            tasks: IndexMap::new(),
            default_priority: config.default_priority,
            column_title_prefix: config.column_title_prefix.clone(),
            revision: 0,
        };
        for seed in &config.default_columns {
            let column = Column::with_id(seed.id.as_str(), seed.title.as_str());
            store.columns.entry(column.id.clone()).or_insert(column);
        }
        store
    }

    /// Build a store from already-validated sequences
    pub(crate) fn from_parts(
        columns: IndexMap<ColumnId, Column>,
        tasks: IndexMap<TaskId, Task>,
        config: &BoardConfig,
    ) -> Self {
        Self {
            columns,
            tasks,
            default_priority: config.default_priority,
            column_title_prefix: config.column_title_prefix.clone(),
            revision: 0,
        }
    }

    /// Counter bumped by every effective mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // =====================================================================
    // Reads
    // =====================================================================

    /// Columns in board order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// All tasks in flat-sequence order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn column_at(&self, index: usize) -> Option<&Column> {
        self.columns.get_index(index).map(|(_, c)| c)
    }

    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get_index(index).map(|(_, t)| t)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.get_index_of(id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.get_index_of(id)
    }

    /// Position of a column, or `ColumnNotFound`
    pub fn try_column_index(&self, id: &ColumnId) -> Result<usize> {
        self.column_index(id).ok_or_else(|| BoardError::ColumnNotFound {
            id: id.to_string(),
        })
    }

    /// Position of a task in the flat sequence, or `TaskNotFound`
    pub fn try_task_index(&self, id: &TaskId) -> Result<usize> {
        self.task_index(id).ok_or_else(|| BoardError::TaskNotFound {
            id: id.to_string(),
        })
    }

    /// Tasks rendered in a column, top to bottom
    pub fn tasks_in_column<'a>(
        &'a self,
        column_id: &'a ColumnId,
    ) -> impl Iterator<Item = &'a Task> {
        self.tasks.values().filter(move |t| &t.column_id == column_id)
    }

    /// Tasks due on the given day, in flat-sequence order
    pub fn tasks_due_on(&self, day: NaiveDate) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(move |t| t.is_due_on(day))
    }

    // =====================================================================
    // Ordering
    // =====================================================================

    /// Move the column at `from` so it ends up at `to`.
    ///
    /// Out-of-range indices and `from == to` leave the board untouched.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        match array_move(&mut self.columns, "columns", from, to) {
            Ok(moved) => {
                if moved {
                    self.touch();
                }
                moved
            }
            Err(e) => {
                debug!(error = %e, "ignoring column move");
                false
            }
        }
    }

    /// Move the task at `from` so it ends up at `to` in the flat sequence.
    /// Column membership is not touched.
    pub fn move_task(&mut self, from: usize, to: usize) -> bool {
        match array_move(&mut self.tasks, "tasks", from, to) {
            Ok(moved) => {
                if moved {
                    self.touch();
                }
                moved
            }
            Err(e) => {
                debug!(error = %e, "ignoring task move");
                false
            }
        }
    }

    /// Retag the task at `task_index` with `column_id`, then move it to
    /// `dest_index`. Either both steps happen or neither does.
    pub fn reassign_and_move_task(
        &mut self,
        task_index: usize,
        column_id: &ColumnId,
        dest_index: usize,
    ) -> bool {
        match self.try_reassign_and_move_task(task_index, column_id, dest_index) {
            Ok(changed) => {
                if changed {
                    self.touch();
                }
                changed
            }
            Err(e) => {
                debug!(error = %e, "ignoring task reassignment");
                false
            }
        }
    }

    fn try_reassign_and_move_task(
        &mut self,
        task_index: usize,
        column_id: &ColumnId,
        dest_index: usize,
    ) -> Result<bool> {
        let len = self.tasks.len();
        if dest_index >= len {
            return Err(BoardError::IndexOutOfBounds {
                sequence: "tasks",
                index: dest_index,
                len,
            });
        }
        if !self.columns.contains_key(column_id) {
            return Err(BoardError::ColumnNotFound {
                id: column_id.to_string(),
            });
        }
        let (_, task) = self
            .tasks
            .get_index_mut(task_index)
            .ok_or(BoardError::IndexOutOfBounds {
                sequence: "tasks",
                index: task_index,
                len,
            })?;

        let retagged = task.column_id != *column_id;
        task.column_id = column_id.clone();
        let moved = array_move(&mut self.tasks, "tasks", task_index, dest_index)?;
        Ok(retagged || moved)
    }

    // =====================================================================
    // Task CRUD
    // =====================================================================

    /// Append a task to the end of the flat sequence.
    ///
    /// Returns `None` when the column does not exist or the content is blank.
    pub fn insert_task(&mut self, new_task: NewTask) -> Option<TaskId> {
        if !self.columns.contains_key(&new_task.column_id) {
            debug!(column = %new_task.column_id, "not inserting task into unknown column");
            return None;
        }
        if new_task.content.trim().is_empty() {
            debug!("not inserting task with blank content");
            return None;
        }

        let task = new_task.into_task(self.default_priority);
        let id = task.id.clone();
        self.tasks.insert(id.clone(), task);
        self.touch();
        Some(id)
    }

    /// Merge `patch` into the task with `id`.
    ///
    /// Unknown ids, blank content and unknown target columns are no-ops.
    pub fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool {
        if patch.is_empty() {
            debug!(task = %id, "ignoring empty task patch");
            return false;
        }
        if let Some(content) = &patch.content {
            if content.trim().is_empty() {
                debug!(task = %id, "rejecting blank task content");
                return false;
            }
        }
        if let Some(column_id) = &patch.column_id {
            if !self.columns.contains_key(column_id) {
                debug!(task = %id, column = %column_id, "rejecting move to unknown column");
                return false;
            }
        }
        let Some(task) = self.tasks.get_mut(id) else {
            debug!(task = %id, "ignoring update of unknown task");
            return false;
        };

        let changed = patch.apply_to(task);
        if changed {
            self.touch();
        }
        changed
    }

    /// Remove a task, returning it if it existed
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let removed = self.tasks.shift_remove(id);
        if removed.is_some() {
            self.touch();
        } else {
            debug!(task = %id, "ignoring delete of unknown task");
        }
        removed
    }

    // =====================================================================
    // Column CRUD
    // =====================================================================

    /// Append a column with a generated id
    pub fn insert_column(&mut self, title: impl Into<String>) -> ColumnId {
        let column = Column::new(title);
        let id = column.id.clone();
        self.columns.insert(id.clone(), column);
        self.touch();
        id
    }

    /// Append a column titled "Column N", N being the new column count
    pub fn add_default_column(&mut self) -> ColumnId {
        let title = format!("{} {}", self.column_title_prefix, self.columns.len() + 1);
        self.insert_column(title)
    }

    /// Replace a column's title. Unknown ids, blank and unchanged titles
    /// are no-ops.
    pub fn rename_column(&mut self, id: &ColumnId, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            debug!(column = %id, "rejecting blank column title");
            return false;
        }
        let Some(column) = self.columns.get_mut(id) else {
            debug!(column = %id, "ignoring rename of unknown column");
            return false;
        };
        if column.title == title {
            return false;
        }

        column.title = title.to_string();
        self.touch();
        true
    }

    /// Remove a column together with every task tagged with it
    pub fn delete_column(&mut self, id: &ColumnId) -> Option<DeletedColumn> {
        let Some(column) = self.columns.shift_remove(id) else {
            debug!(column = %id, "ignoring delete of unknown column");
            return None;
        };

        let mut removed = Vec::new();
        let mut kept = IndexMap::with_capacity(self.tasks.len());
        for (task_id, task) in self.tasks.drain(..) {
            if task.column_id == *id {
                removed.push(task);
            } else {
                kept.insert(task_id, task);
            }
        }
        self.tasks = kept;
        self.touch();

        Some(DeletedColumn {
            column,
            tasks: removed,
        })
    }
}

/// Remove the entry at `from` and reinsert it so it lands at `to`.
///
/// `Ok(false)` for `from == to`; `IndexOutOfBounds` when either index is
/// outside the sequence, in which case nothing is touched.
fn array_move<K: Hash + Eq, V>(
    items: &mut IndexMap<K, V>,
    sequence: &'static str,
    from: usize,
    to: usize,
) -> Result<bool> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(BoardError::IndexOutOfBounds {
                sequence,
                index,
                len,
            });
        }
    }
    if from == to {
        return Ok(false);
    }
    items.move_index(from, to);
    Ok(true)
}
