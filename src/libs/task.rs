//! Task records as exchanged with the remote task store.
//!
//! A [`Task`] is the only entity on the board. The store assigns its
//! [`TaskId`] on creation; everything else is editable through the task
//! editor or, for [`TaskStatus`], by dragging the card to another column.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier assigned by the remote store. Opaque to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().trim_start_matches('#').parse()?))
    }
}

/// Board column a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    #[value(name = "in_progress", alias = "in-progress")]
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// All statuses in board display order.
    pub const ALL: [TaskStatus; 4] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done];

    /// Wire representation, also used as the column key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Column header shown on the board.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "Por Hacer",
            Self::InProgress => "En Progreso",
            Self::Review => "Revisión",
            Self::Done => "Completado",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentational priority. Never checked against any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High, TaskPriority::Urgent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Color tag used when rendering the card.
    pub const fn tag(self) -> PriorityTag {
        match self {
            Self::Low => PriorityTag::Success,
            Self::Medium => PriorityTag::Warning,
            Self::High => PriorityTag::Danger,
            Self::Urgent => PriorityTag::Dark,
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color family of a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTag {
    Success,
    Warning,
    Danger,
    Dark,
}

impl PriorityTag {
    /// prettytable style spec for the badge.
    pub const fn style_spec(self) -> &'static str {
        match self {
            Self::Success => "Fg",
            Self::Warning => "Fy",
            Self::Danger => "Fr",
            Self::Dark => "bFd",
        }
    }
}

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A task as returned by the store.
///
/// `created_at`, `updated_at` and `user_id` are owned by the store. They are
/// kept so a reload shows them, but never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Task {
    /// Task with default status and priority and no optional fields.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            created_at: None,
            updated_at: None,
            user_id: None,
        }
    }

    /// Record holding the writable fields of `payload` under `id`.
    pub fn from_payload(id: TaskId, payload: &TaskPayload) -> Self {
        Self {
            description: payload.description.clone(),
            status: payload.status,
            priority: payload.priority,
            due_date: payload.due_date.clone(),
            ..Self::new(id, payload.title.clone())
        }
    }

    /// Description with empty text treated as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Due date with empty text treated as absent.
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Writable fields of a task, sent on create and update.
///
/// Absent `description` and `due_date` go out as `null` so an update clears
/// them on the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<String>,
}

impl TaskPayload {
    /// Same payload with only the status replaced.
    pub fn with_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.clone(),
        }
    }
}

/// Drops the time-of-day part of an ISO timestamp: `2024-03-15T10:00:00Z`
/// becomes `2024-03-15`. Plain dates pass through.
pub fn truncate_to_date(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}
