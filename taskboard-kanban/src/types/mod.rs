//! Core types for the board engine

mod board;
mod ids;
mod log;
mod task;

// Re-export all types
pub use board::Column;
pub use ids::{ColumnId, TaskId};
pub use log::LogEntry;
pub use task::{NewTask, Priority, Task, TaskPatch};
