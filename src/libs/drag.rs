//! Drag-and-drop of task cards between columns.
//!
//! A gesture carries a snapshot of the whole task from the card it started
//! on to the column it is dropped on, so the drop needs no lookup. The
//! snapshot can go stale if the task is edited mid-drag; that race is
//! accepted.
//!
//! ```text
//! Idle ──start──▶ Dragging ──enter(col)──▶ Hovering(col) ──release──▶ Committing ──finish──▶ Idle
//!                    ▲                          │   │
//!                    └─────────leave────────────┘   └── same column ──▶ Idle
//! ```
//!
//! The controller only decides what a drop means. Issuing the update and
//! reloading is the board's job (see [`Board::drop_card`](crate::libs::board::Board::drop_card)).

use crate::libs::task::{Task, TaskId, TaskPayload, TaskStatus};
use thiserror::Error;

/// MIME type the snapshot is carried under.
pub const DRAG_MIME_TYPE: &str = "text/plain";

#[derive(Debug, Error)]
pub enum DragError {
    #[error("no drag in progress")]
    NotDragging,

    #[error("dropped outside of a column")]
    NotHovering,

    #[error("unreadable drag payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Snapshot of the dragged task, serialized as JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    mime_type: &'static str,
    data: String,
}

impl DragPayload {
    pub fn from_task(task: &Task) -> Result<Self, DragError> {
        Ok(Self::from_text(serde_json::to_string(task)?))
    }

    /// Wraps text received from some other drag carrier.
    pub fn from_text(data: impl Into<String>) -> Self {
        Self {
            mime_type: DRAG_MIME_TYPE,
            data: data.into(),
        }
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Deserializes the carried task.
    pub fn task(&self) -> Result<Task, DragError> {
        Ok(serde_json::from_str(&self.data)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
    Hovering {
        payload: DragPayload,
        column: TaskStatus,
    },
    Committing {
        task_id: TaskId,
        target: TaskStatus,
    },
}

/// What a drop asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropIntent {
    /// Dropped on its own column. Nothing to write.
    Unchanged(Task),
    /// Dropped on another column. `payload` is the task's writable fields
    /// with only the status replaced.
    Move { task: Task, payload: TaskPayload },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Column currently under the cursor, if any.
    pub fn hovered(&self) -> Option<TaskStatus> {
        match self.state {
            DragState::Hovering { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Starts a gesture on `task`, replacing any gesture in progress.
    pub fn start(&mut self, task: &Task) -> Result<(), DragError> {
        let payload = DragPayload::from_task(task)?;
        self.start_with(payload);
        Ok(())
    }

    /// Starts a gesture with an already serialized payload.
    pub fn start_with(&mut self, payload: DragPayload) {
        tracing::debug!(bytes = payload.data().len(), "drag started");
        self.state = DragState::Dragging(payload);
    }

    /// Cursor entered the drop target of `column`.
    ///
    /// Returns `true` when the target accepts the drop, which is always the
    /// case while a gesture is active. Without a gesture nothing changes and
    /// the drop is rejected.
    pub fn enter(&mut self, column: TaskStatus) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(payload) | DragState::Hovering { payload, .. } => {
                self.state = DragState::Hovering { payload, column };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Cursor left the current drop target.
    pub fn leave(&mut self) {
        if let DragState::Hovering { payload, .. } = std::mem::take(&mut self.state) {
            self.state = DragState::Dragging(payload);
        }
    }

    /// Gesture ended without a drop.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Drops the card on the hovered column.
    ///
    /// A drop on the task's own column returns to `Idle` right away. A drop
    /// on another column moves to `Committing`; the caller must call
    /// [`finish`](Self::finish) once the update has been attempted.
    ///
    /// # Errors
    ///
    /// [`DragError::NotDragging`] or [`DragError::NotHovering`] when there is
    /// nothing to drop, [`DragError::Payload`] when the snapshot does not
    /// deserialize. The controller is back to `Idle` in every error case.
    pub fn release(&mut self) -> Result<DropIntent, DragError> {
        let (payload, target) = match std::mem::take(&mut self.state) {
            DragState::Hovering { payload, column } => (payload, column),
            DragState::Dragging(_) => return Err(DragError::NotHovering),
            _ => return Err(DragError::NotDragging),
        };

        let task = payload.task()?;
        if task.status == target {
            tracing::debug!(id = %task.id, status = %target, "dropped on own column");
            return Ok(DropIntent::Unchanged(task));
        }

        self.state = DragState::Committing { task_id: task.id, target };
        let payload = TaskPayload::from(&task).with_status(target);
        Ok(DropIntent::Move { task, payload })
    }

    /// Ends the commit, successful or not.
    pub fn finish(&mut self) {
        self.state = DragState::Idle;
    }
}
