#![allow(dead_code)]

//! In-memory task store shared by the integration tests.

use std::sync::Mutex;
use tablero::api::{StoreError, StoreResult, TaskStore};
use tablero::libs::task::{Task, TaskId, TaskPayload, TaskPriority, TaskStatus};

/// One request as the store saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(TaskPayload),
    Update(TaskId, TaskPayload),
    Delete(TaskId),
}

#[derive(Debug, Default)]
struct MockState {
    tasks: Vec<Task>,
    calls: Vec<Call>,
    fail_list: bool,
    fail_writes: bool,
}

/// Records every call and keeps tasks in memory. Failures can be switched on
/// per kind of request.
#[derive(Debug, Default)]
pub struct MockStore {
    state: Mutex<MockState>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let store = Self::new();
        store.state.lock().unwrap().tasks = tasks;
        store
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Every call except `list`.
    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|call| *call != Call::List).collect()
    }

    pub fn list_count(&self) -> usize {
        self.calls().iter().filter(|call| **call == Call::List).count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    /// Replaces the stored tasks without recording a call.
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.state.lock().unwrap().tasks = tasks;
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }
}

fn failure(method: &str, status: u16) -> StoreError {
    StoreError::Status {
        method: method.to_string(),
        url: "mock://api/tasks".to_string(),
        status,
    }
}

impl TaskStore for MockStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(failure("GET", 500));
        }
        Ok(state.tasks.clone())
    }

    async fn create(&self, payload: &TaskPayload) -> StoreResult<Task> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(payload.clone()));
        if state.fail_writes {
            return Err(failure("POST", 500));
        }

        let next_id = state.tasks.iter().map(|task| task.id.0).max().unwrap_or(0) + 1;
        let mut task = Task::from_payload(TaskId(next_id), payload);
        task.created_at = Some("2024-03-01T09:00:00".to_string());
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, payload: &TaskPayload) -> StoreResult<Task> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(id, payload.clone()));
        if state.fail_writes {
            return Err(failure("PUT", 500));
        }

        let Some(stored) = state.tasks.iter_mut().find(|task| task.id == id) else {
            return Err(failure("PUT", 404));
        };
        let created_at = stored.created_at.take();
        *stored = Task {
            created_at,
            ..Task::from_payload(id, payload)
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id));
        if state.fail_writes {
            return Err(failure("DELETE", 500));
        }

        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        if state.tasks.len() == before {
            return Err(failure("DELETE", 404));
        }
        Ok(())
    }
}

pub fn task(id: i64, title: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    Task {
        status,
        priority,
        ..Task::new(TaskId(id), title)
    }
}

/// A small board: two todo, one in progress, one review, two done.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        task(1, "Write README", TaskStatus::Todo, TaskPriority::Low),
        task(2, "Set up CI", TaskStatus::InProgress, TaskPriority::High),
        task(3, "Review login form", TaskStatus::Review, TaskPriority::Medium),
        task(4, "Release 0.1", TaskStatus::Done, TaskPriority::Urgent),
        task(5, "Triage issues", TaskStatus::Todo, TaskPriority::Medium),
        task(6, "Pick a name", TaskStatus::Done, TaskPriority::Low),
    ]
}
