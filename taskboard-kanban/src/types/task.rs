//! Task types: Task, Priority, NewTask, TaskPatch

use super::ids::{ColumnId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// How urgent a task is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

/// A task/card on the board.
///
/// Tasks live in one flat sequence. The `column_id` tag plus the task's
/// place in that sequence decide where it renders inside its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "due_date"
    )]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Check whether the task is due on the given day
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date == Some(day)
    }
}

/// Request to create a task. Fields left unset fall back to the board's
/// defaults when the task is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub column_id: ColumnId,
    pub content: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "due_date")]
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(column_id: impl Into<ColumnId>, content: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            content: content.into(),
            priority: None,
            description: None,
            due_date: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Build the task, using `default_priority` when none was requested
    pub fn into_task(self, default_priority: Priority) -> Task {
        Task {
            id: TaskId::new(),
            column_id: self.column_id,
            content: self.content,
            description: self.description,
            priority: self.priority.unwrap_or(default_priority),
            due_date: self.due_date,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a task. `None` leaves a field unchanged; for the
/// optional fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "due_date_patch"
    )]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

/// A present key maps to `Some`, so `null` becomes `Some(None)` (clear)
/// while a missing key stays `None` through `#[serde(default)]`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Due dates are stored as calendar days. Older boards persisted them as
/// full ISO datetimes (`2026-01-02T00:00:00.000Z`); those keep their UTC day.
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

fn due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_due_date(&raw).ok_or_else(|| {
                de::Error::custom(format!("invalid due date `{raw}`, expected YYYY-MM-DD"))
            })
        })
        .transpose()
}

fn due_date_patch<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    due_date(deserializer).map(Some)
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set or clear the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set or clear the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Move the task to another column (keeps its flat-sequence slot)
    pub fn with_column(mut self, column_id: impl Into<ColumnId>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }

    /// True when the patch sets no field at all
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.column_id.is_none()
    }

    /// Merge the patch into `task`, returning whether anything changed
    pub fn apply_to(&self, task: &mut Task) -> bool {
        let before = task.clone();

        if let Some(content) = &self.content {
            task.content = content.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(column_id) = &self.column_id {
            task.column_id = column_id.clone();
        }

        *task != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task = Task::new("todo", "Write docs");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.column_id.as_str(), "todo");
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_new_task_uses_default_priority_when_unset() {
        let task = NewTask::new("todo", "A").into_task(Priority::Low);
        assert_eq!(task.priority, Priority::Low);

        let task = NewTask::new("todo", "B")
            .with_priority(Priority::High)
            .into_task(Priority::Low);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_patch_leaves_unspecified_fields() {
        let mut task = Task::new("todo", "Original").with_description_for_test("keep me");
        let changed = TaskPatch::new()
            .with_priority(Priority::High)
            .apply_to(&mut task);

        assert!(changed);
        assert_eq!(task.content, "Original");
        assert_eq!(task.description.as_deref(), Some("keep me"));
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_patch_clears_optional_fields() {
        let due = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut task = Task::new("todo", "Dated");
        task.due_date = Some(due);

        assert!(TaskPatch::new().with_due_date(None).apply_to(&mut task));
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_patch_reports_unchanged() {
        let mut task = Task::new("todo", "Same");
        assert!(!TaskPatch::new().with_content("Same").apply_to(&mut task));
        assert!(TaskPatch::new().is_empty());
    }

    #[test]
    fn test_patch_json_null_clears() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"dueDate": null, "content": "Next"}"#).unwrap();

        assert_eq!(patch.due_date, Some(None));
        assert_eq!(patch.description, None);
        assert_eq!(patch.content.as_deref(), Some("Next"));
    }

    #[test]
    fn test_due_date_accepts_iso_datetime() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 2);

        let patch: TaskPatch =
            serde_json::from_str(r#"{"dueDate": "2026-01-02T00:00:00.000Z"}"#).unwrap();
        assert_eq!(patch.due_date, Some(expected));

        let new_task: NewTask = serde_json::from_str(
            r#"{"columnId": "todo", "content": "x", "dueDate": "2026-01-02"}"#,
        )
        .unwrap();
        assert_eq!(new_task.due_date, expected);
    }

    #[test]
    fn test_due_date_rejects_garbage() {
        let err = serde_json::from_str::<TaskPatch>(r#"{"dueDate": "next tuesday"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid due date"));
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let mut task = Task::new("todo", "Ship");
        task.due_date = NaiveDate::from_ymd_opt(2026, 1, 2);
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["columnId"], "todo");
        assert_eq!(json["priority"], "Medium");
        assert_eq!(json["dueDate"], "2026-01-02");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("description").is_none());
    }

    impl Task {
        fn new(column_id: &str, content: &str) -> Self {
            NewTask::new(column_id, content).into_task(Priority::default())
        }

        fn with_description_for_test(mut self, description: &str) -> Self {
            self.description = Some(description.to_string());
            self
        }
    }
}
