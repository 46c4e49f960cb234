//! Local projection of the remote task list.
//!
//! The collection is a cache of whatever the store returned last. It is
//! replaced wholesale on every [`TaskCollection::reload`]; there is no merge
//! and no partial update. A failed reload leaves the previous contents in
//! place so the board keeps showing stale data instead of nothing.

use crate::api::{StoreResult, TaskStore};
use crate::libs::task::{Task, TaskId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the full list and replaces the collection with it.
    ///
    /// Returns the number of tasks now held.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged. The collection is not touched in
    /// that case.
    pub async fn reload<S: TaskStore>(&mut self, store: &S) -> StoreResult<usize> {
        match store.list().await {
            Ok(tasks) => {
                self.replace(tasks);
                tracing::debug!(count = self.tasks.len(), "task collection reloaded");
                Ok(self.tasks.len())
            }
            Err(err) => {
                tracing::warn!(error = %err, kept = self.tasks.len(), "task reload failed, keeping previous tasks");
                Err(err)
            }
        }
    }

    /// Replaces the contents, keeping the first record of any repeated id.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::with_capacity(tasks.len());
        let mut unique = Vec::with_capacity(tasks.len());

        for task in tasks {
            if seen.insert(task.id) {
                unique.push(task);
            } else {
                tracing::warn!(id = %task.id, "store returned a duplicate task id, ignoring it");
            }
        }

        self.tasks = unique;
    }

    /// Tasks in the order the store returned them.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
