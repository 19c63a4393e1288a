//! Command plumbing for board mutations.
//!
//! Each user-facing mutation is a struct whose fields are its parameters.
//! `Operation` names it ("move task"), `Execute` applies it to a store.
//! Board mutations are total, so execution never fails: it either changed
//! the board (`Logged`) or it did not (`Unlogged`).

use crate::store::BoardStore;
use crate::types::LogEntry;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// A named board command
pub trait Operation: Serialize {
    /// Verb, e.g. "add"
    fn verb(&self) -> &'static str;

    /// Noun, e.g. "task"
    fn noun(&self) -> &'static str;

    /// Canonical op string, e.g. "add task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }

    /// The command's parameters as JSON
    fn input(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Apply a command to a store
pub trait Execute: Operation {
    fn execute(&self, store: &mut BoardStore) -> ExecutionResult;
}

/// Result of executing a command
#[derive(Debug, Clone)]
pub enum ExecutionResult {
    /// The board changed and the change should be recorded
    Logged { value: Value, log_entry: LogEntry },
    /// Nothing changed (stale id, rejected value, no-op move)
    Unlogged { value: Value },
}

impl ExecutionResult {
    /// Build the result for `op`, logging only when the board changed
    pub fn finish<O: Operation + ?Sized>(
        op: &O,
        start: Instant,
        changed: bool,
        value: Value,
    ) -> Self {
        if !changed {
            return Self::Unlogged { value };
        }
        let duration_ms = start.elapsed().as_millis() as u64;
        Self::Logged {
            log_entry: LogEntry::new(op.op_string(), op.input(), value.clone(), duration_ms),
            value,
        }
    }

    /// Extract the output value
    pub fn into_value(self) -> Value {
        match self {
            Self::Logged { value, .. } | Self::Unlogged { value } => value,
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Value, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (value, Some(log_entry)),
            Self::Unlogged { value } => (value, None),
        }
    }

    /// Check if the board changed
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }
}
