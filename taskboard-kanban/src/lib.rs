//! Drag-driven reordering engine for a kanban task board
//!
//! This crate holds the board state behind a column/card UI and the logic that
//! turns a pointer drag gesture into reorders and column changes. It is a
//! pure, synchronous, in-memory state transformer: rendering, edit dialogs and
//! persistence are collaborators that read from it and feed events into it.
//!
//! ## Overview
//!
//! - **One flat task list** - Tasks live in a single ordered sequence tagged
//!   with their column; a column renders its tasks in that sequence's order
//! - **Total mutations** - Stale ids and bad indices are no-ops, never panics
//! - **Live task drags** - Each drag-over tick reorders the canonical store
//! - **Columns settle on release** - Column drags move once, on drag end
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard_kanban::{BoardStore, DragSession, DragSubject, NewTask};
//!
//! let mut store = BoardStore::with_default_columns();
//! let id = store.insert_task(NewTask::new("todo", "Write docs")).unwrap();
//!
//! let mut session = DragSession::new();
//! session.drag_start(&store, DragSubject::Task(id.clone()));
//! session.drag_over(&mut store, Some(&DragSubject::column("in-progress")));
//! session.drag_end(&mut store, Some(&DragSubject::column("in-progress")));
//!
//! assert_eq!(store.task(&id).unwrap().column_id.as_str(), "in-progress");
//! ```
//!
//! ## Commands
//!
//! Edit forms and board headers change the board through command structs
//! (`task::AddTask`, `column::RenameColumn`, ...) run by a [`BoardProcessor`],
//! which keeps an activity log of every command that changed something.

pub mod column;
pub mod config;
pub mod drag;
mod error;
pub mod operation;
mod processor;
pub mod snapshot;
pub mod store;
pub mod task;
pub mod types;

pub use config::{BoardConfig, ColumnSeed};
pub use drag::{DragEffect, DragSession, DragState, DragSubject, Lifted};
pub use error::{BoardError, Result};
pub use operation::{Execute, ExecutionResult, Operation};
pub use processor::BoardProcessor;
pub use snapshot::BoardSnapshot;
pub use store::{BoardStore, DeletedColumn};

// Re-export commonly used types
pub use types::{Column, ColumnId, LogEntry, NewTask, Priority, Task, TaskId, TaskPatch};
