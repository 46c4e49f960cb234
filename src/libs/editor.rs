//! Create/edit form for a single task.
//!
//! The editor behaves like a modal: it is opened in create or edit mode,
//! holds a [`TaskDraft`] while open, and closes on a successful save or on
//! cancel. A failed save keeps it open with the draft untouched.

use crate::api::{StoreResult, TaskStore};
use crate::libs::task::{truncate_to_date, Task, TaskId, TaskPayload, TaskPriority, TaskStatus};

/// Form state of the editor. Empty strings stand for "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Date-only value, `YYYY-MM-DD`.
    pub due_date: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: String::new(),
        }
    }
}

impl TaskDraft {
    /// Draft for editing `task`. A full timestamp due date is cut to its date.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date().map(truncate_to_date).unwrap_or_default().to_string(),
        }
    }

    /// Save is only possible with a non-blank title.
    pub fn is_saveable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn to_payload(&self) -> TaskPayload {
        let optional = |value: &str| (!value.is_empty()).then(|| value.to_string());

        TaskPayload {
            title: self.title.clone(),
            description: optional(&self.description),
            status: self.status,
            priority: self.priority,
            due_date: optional(&self.due_date),
        }
    }
}

/// Result of [`TaskEditor::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing sent: the editor is closed or the title is blank.
    Disabled,
    Created(Task),
    Updated(Task),
}

/// Result of [`delete_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted(TaskId),
}

#[derive(Debug, Default)]
pub struct TaskEditor {
    open: bool,
    editing: Option<Task>,
    draft: TaskDraft,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Task being edited; `None` in create mode.
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn can_save(&self) -> bool {
        self.open && self.draft.is_saveable()
    }

    pub fn open_create(&mut self) {
        self.open = true;
        self.editing = None;
        self.draft = TaskDraft::default();
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.open = true;
        self.draft = TaskDraft::from_task(task);
        self.editing = Some(task.clone());
    }

    /// Closes the editor and throws the draft away, changed or not.
    pub fn cancel(&mut self) {
        self.open = false;
        self.editing = None;
        self.draft = TaskDraft::default();
    }

    /// Sends the draft: create in create mode, update in edit mode.
    ///
    /// On success the editor closes and the draft resets. The caller is
    /// expected to reload the collection afterwards.
    ///
    /// # Errors
    ///
    /// Returns the store error; the editor stays open with its draft.
    pub async fn save<S: TaskStore>(&mut self, store: &S) -> StoreResult<SaveOutcome> {
        if !self.can_save() {
            return Ok(SaveOutcome::Disabled);
        }

        let payload = self.draft.to_payload();
        let result = match &self.editing {
            Some(task) => store.update(task.id, &payload).await.map(SaveOutcome::Updated),
            None => store.create(&payload).await.map(SaveOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                self.cancel();
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, editing = ?self.editing.as_ref().map(|t| t.id), "saving task failed");
                Err(err)
            }
        }
    }
}

/// Deletes `task` once `confirm` agrees. A declined confirmation sends
/// nothing.
///
/// # Errors
///
/// Returns the store error if the delete request fails.
pub async fn delete_task<S, F>(store: &S, task: &Task, confirm: F) -> StoreResult<DeleteOutcome>
where
    S: TaskStore,
    F: FnOnce(&Task) -> bool,
{
    if !confirm(task) {
        return Ok(DeleteOutcome::Declined);
    }

    match store.delete(task.id).await {
        Ok(()) => Ok(DeleteOutcome::Deleted(task.id)),
        Err(err) => {
            tracing::warn!(error = %err, id = %task.id, "deleting task failed");
            Err(err)
        }
    }
}
