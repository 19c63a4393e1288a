//! Executes board commands and keeps the activity log.

use crate::config::{BoardConfig, DEFAULT_ACTIVITY_LIMIT};
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::LogEntry;
use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

/// Runs commands against a store, recording every effective one.
///
/// The activity log is kept newest first and holds at most `activity_limit`
/// entries; the oldest are dropped past that. Commands that leave the board
/// unchanged are not recorded.
#[derive(Debug)]
pub struct BoardProcessor {
    actor: Option<String>,
    activity: VecDeque<LogEntry>,
    activity_limit: usize,
}

impl Default for BoardProcessor {
    fn default() -> Self {
        Self {
            actor: None,
            activity: VecDeque::new(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl BoardProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the activity limit from `config`
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            activity_limit: config.activity_limit,
            ..Self::default()
        }
    }

    /// Attribute every recorded entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self::new().actor(actor)
    }

    /// Set the actor on an existing processor
    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Execute `op` and return its output
    pub fn process<O: Execute>(&mut self, op: &O, store: &mut BoardStore) -> Value {
        let (value, log_entry) = op.execute(store).split();

        match log_entry {
            Some(entry) => {
                let entry = match &self.actor {
                    Some(actor) => entry.with_actor(actor.as_str()),
                    None => entry,
                };
                debug!(op = %entry.op, revision = store.revision(), "recorded board operation");
                self.activity.push_front(entry);
                self.activity.truncate(self.activity_limit);
            }
            None => debug!(op = %op.op_string(), "board unchanged"),
        }
        value
    }

    /// Recorded operations, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// Drop all recorded entries
    pub fn clear_activity(&mut self) {
        self.activity.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::RenameColumn;
    use crate::task::{AddTask, DeleteTask};

    #[test_log::test]
    fn test_activity_newest_first_with_actor() {
        let mut store = BoardStore::with_default_columns();
        let mut processor = BoardProcessor::with_actor("alice");

        let added = processor.process(&AddTask::new("todo", "First"), &mut store);
        processor.process(&RenameColumn::new("todo", "Backlog"), &mut store);

        let ops: Vec<_> = processor.activity().map(|e| e.op.as_str()).collect();
        assert_eq!(ops, ["rename column", "add task"]);
        assert!(processor
            .activity()
            .all(|e| e.actor.as_deref() == Some("alice")));
        assert_eq!(added["content"], "First");
    }

    #[test_log::test]
    fn test_noop_commands_are_not_recorded() {
        let mut store = BoardStore::with_default_columns();
        let mut processor = BoardProcessor::new();

        let out = processor.process(&DeleteTask::new("ghost"), &mut store);

        assert_eq!(out["deleted"], false);
        assert_eq!(processor.activity().count(), 0);
    }

    #[test]
    fn test_activity_is_capped() {
        let mut store = BoardStore::with_default_columns();
        let config = BoardConfig {
            activity_limit: 2,
            ..BoardConfig::default()
        };
        let mut processor = BoardProcessor::from_config(&config).actor("bob");

        for content in ["one", "two", "three"] {
            processor.process(&AddTask::new("todo", content), &mut store);
        }

        let outputs: Vec<_> = processor
            .activity()
            .map(|e| e.output["content"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(outputs, ["three", "two"]);
        assert!(processor.activity().all(|e| e.actor.as_deref() == Some("bob")));
    }

    #[test]
    fn test_clear_activity() {
        let mut store = BoardStore::with_default_columns();
        let mut processor = BoardProcessor::new();
        processor.process(&AddTask::new("todo", "x"), &mut store);

        processor.clear_activity();
        assert_eq!(processor.activity().count(), 0);
    }
}
