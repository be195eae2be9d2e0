//! Frontend Models
//!
//! Data structures matching the remote task store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TaskError;

/// Maximum length of a task action, in characters
pub const ACTION_MAX_LEN: usize = 50;

/// Completion status (closed two-value set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    NotCompleted,
    Completed,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }

    /// Status after ticking/unticking the checkbox
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::NotCompleted => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::NotCompleted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotCompleted => "NotCompleted",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Inline style for the action label.
    ///
    /// Completed tasks are muted, italic and struck through.
    pub fn label_style(self) -> &'static str {
        match self {
            TaskStatus::Completed => {
                "color: rgba(0, 0, 0, 0.45); font-style: italic; text-decoration: line-through;"
            }
            TaskStatus::NotCompleted => "",
        }
    }

    /// Completed tasks lock their text
    pub fn allows_edit(self) -> bool {
        !self.is_completed()
    }
}

/// Task as returned by the task store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: String,
    pub action: String,
    pub status: TaskStatus,
    #[serde(deserialize_with = "deserialize_created")]
    pub created: DateTime<Utc>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Creation date shown next to the task
    pub fn created_label(&self) -> String {
        self.created.format("%Y-%m-%d").to_string()
    }
}

/// Parse an ISO-8601 timestamp from the store.
///
/// RFC 3339 (with offset) first; a local date-time or a bare date
/// without offset is read as UTC.
pub fn parse_created(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| format!("unrecognized timestamp {:?}", raw))
}

fn deserialize_created<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_created(&raw).map_err(serde::de::Error::custom)
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub action: String,
    pub status: TaskStatus,
}

impl TaskRequest {
    /// Request for a brand new task
    pub fn new_task(action: &str) -> Result<Self, TaskError> {
        Ok(Self {
            action: validate_action(action)?,
            status: TaskStatus::NotCompleted,
        })
    }
}

/// Trim and check an action against the 1..=50 character rule
pub fn validate_action(action: &str) -> Result<String, TaskError> {
    let trimmed = action.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(TaskError::InvalidAction("action must not be empty".into()));
    }
    if len > ACTION_MAX_LEN {
        return Err(TaskError::InvalidAction(format!(
            "action is {} characters, limit is {}",
            len, ACTION_MAX_LEN
        )));
    }
    Ok(trimmed.to_string())
}
