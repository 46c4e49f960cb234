//! The Kanban board: one store, its cached task list, the editor and the
//! drag controller.
//!
//! Every mutation follows the same pattern: send it to the store, and if the
//! store accepted it, reload the whole collection. Nothing is patched
//! locally. When that follow-up reload fails the board keeps the old list and
//! flags itself stale until the next successful reload.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tablero::api::{BackendConfig, HttpTaskStore};
//! use tablero::libs::board::Board;
//! use tablero::libs::task::{TaskId, TaskStatus};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut board = Board::new(HttpTaskStore::new(&BackendConfig::default())?);
//! board.mount().await?;
//! board.move_task(TaskId(7), TaskStatus::Done).await?;
//! println!("{} done", board.columns().count(TaskStatus::Done));
//! # Ok(())
//! # }
//! ```

use crate::api::{StoreError, StoreResult, TaskStore};
use crate::libs::collection::TaskCollection;
use crate::libs::columns::{classify, Columns};
use crate::libs::drag::{DragController, DragError, DropIntent};
use crate::libs::editor::{delete_task, DeleteOutcome, SaveOutcome, TaskEditor};
use crate::libs::task::{Task, TaskId, TaskStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Drag(#[from] DragError),

    #[error("task #{0} is not on the board")]
    TaskNotFound(TaskId),
}

/// Result of a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped on its own column; no request was sent.
    Unchanged(Task),
    /// The store accepted the new status.
    Moved { from: TaskStatus, task: Task },
}

pub struct Board<S: TaskStore> {
    store: S,
    collection: TaskCollection,
    editor: TaskEditor,
    drag: DragController,
    stale: bool,
}

impl<S: TaskStore> Board<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: TaskCollection::new(),
            editor: TaskEditor::new(),
            drag: DragController::new(),
            stale: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    pub fn columns(&self) -> Columns<'_> {
        classify(self.collection.tasks())
    }

    /// `true` while the last reload attempt failed.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn task(&self, id: TaskId) -> Result<&Task, BoardError> {
        self.collection.get(id).ok_or(BoardError::TaskNotFound(id))
    }

    /// First load of the board.
    pub async fn mount(&mut self) -> StoreResult<usize> {
        self.reload().await
    }

    /// Replaces the collection with the store's current list.
    ///
    /// # Errors
    ///
    /// Returns the store error; the previous list stays in place.
    pub async fn reload(&mut self) -> StoreResult<usize> {
        let result = self.collection.reload(&self.store).await;
        self.stale = result.is_err();
        result
    }

    /// Reload after a mutation the store already accepted. A failure here
    /// does not undo the mutation, so it only marks the board stale.
    async fn resync(&mut self) {
        if let Err(err) = self.reload().await {
            tracing::warn!(error = %err, "board is stale after a successful change");
        }
    }

    // Drag and drop

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Picks up the card of task `id`.
    pub fn start_drag(&mut self, id: TaskId) -> Result<(), BoardError> {
        let task = self.collection.get(id).ok_or(BoardError::TaskNotFound(id))?;
        self.drag.start(task)?;
        Ok(())
    }

    /// Card is over `column`. Returns whether the column accepts the drop.
    pub fn drag_enter(&mut self, column: TaskStatus) -> bool {
        self.drag.enter(column)
    }

    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Drops the card on the hovered column.
    ///
    /// A drop on the card's own column sends nothing. Otherwise one update
    /// with the new status is sent and, if accepted, the board reloads. The
    /// drag controller is idle again afterwards in every case.
    ///
    /// A rejected update does not reload: the store did not change, so the
    /// collection is already current.
    ///
    /// # Errors
    ///
    /// [`BoardError::Drag`] for an invalid drop, [`BoardError::Store`] when
    /// the update fails. The collection is unchanged in both cases.
    pub async fn drop_card(&mut self) -> Result<DropOutcome, BoardError> {
        let intent = match self.drag.release() {
            Ok(intent) => intent,
            Err(err) => {
                tracing::warn!(error = %err, "drop ignored");
                return Err(err.into());
            }
        };

        let outcome = match intent {
            DropIntent::Unchanged(task) => Ok(DropOutcome::Unchanged(task)),
            DropIntent::Move { task, payload } => {
                let result = self.store.update(task.id, &payload).await;
                match result {
                    Ok(updated) => {
                        self.resync().await;
                        Ok(DropOutcome::Moved { from: task.status, task: updated })
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, id = %task.id, target = %payload.status, "moving task failed");
                        Err(err.into())
                    }
                }
            }
        };

        self.drag.finish();
        outcome
    }

    /// Whole gesture in one call: pick up task `id`, hover `target`, drop.
    pub async fn move_task(&mut self, id: TaskId, target: TaskStatus) -> Result<DropOutcome, BoardError> {
        self.start_drag(id)?;
        self.drag_enter(target);
        self.drop_card().await
    }

    // Editor

    pub fn editor(&self) -> &TaskEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TaskEditor {
        &mut self.editor
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    pub fn open_edit(&mut self, id: TaskId) -> Result<(), BoardError> {
        let task = self.collection.get(id).ok_or(BoardError::TaskNotFound(id))?;
        self.editor.open_edit(task);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Saves the editor's draft and reloads on success.
    ///
    /// # Errors
    ///
    /// Returns the store error; the editor stays open with its draft.
    pub async fn save(&mut self) -> Result<SaveOutcome, BoardError> {
        let outcome = self.editor.save(&self.store).await?;
        if outcome != SaveOutcome::Disabled {
            self.resync().await;
        }
        Ok(outcome)
    }

    /// Deletes task `id` after `confirm` agrees, then reloads.
    ///
    /// # Errors
    ///
    /// [`BoardError::TaskNotFound`] if `id` is not in the collection,
    /// [`BoardError::Store`] if the delete request fails.
    pub async fn delete<F>(&mut self, id: TaskId, confirm: F) -> Result<DeleteOutcome, BoardError>
    where
        F: FnOnce(&Task) -> bool,
    {
        let task = self.task(id)?.clone();
        let outcome = delete_task(&self.store, &task, confirm).await?;
        if let DeleteOutcome::Deleted(_) = outcome {
            self.resync().await;
        }
        Ok(outcome)
    }
}
