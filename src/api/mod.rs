//! Remote task store access.
//!
//! The board never owns its data: every task lives in an external HTTP
//! service and the board only keeps a projection of the last list it
//! fetched. This module defines the [`TaskStore`] seam the board talks to and
//! the HTTP implementation used in production.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tablero::api::{BackendConfig, HttpTaskStore, TaskStore};
//!
//! # async fn run() -> Result<(), tablero::api::StoreError> {
//! let store = HttpTaskStore::new(&BackendConfig::default())?;
//! let tasks = store.list().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Task, TaskId, TaskPayload};
use thiserror::Error;

pub mod tasks;

pub use tasks::{BackendConfig, HttpTaskStore};

/// Result type for task store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Why a task store request failed.
///
/// Every variant is handled the same way by the board: the triggering action
/// does not progress and the failure is logged and handed back to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("could not reach the task store: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status. The code is not
    /// interpreted any further.
    #[error("{method} {url} failed with status {status}")]
    Status { method: String, url: String, status: u16 },

    /// The store answered but the body is not the expected JSON.
    #[error("malformed response from the task store: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Create, read, update and delete tasks on the remote store.
///
/// Implementations do not cache anything; each call is one request.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    /// Fetches every task the store knows about, in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on transport failure, non-success status or
    /// an undecodable body.
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Creates a task and returns it with its store-assigned id.
    async fn create(&self, payload: &TaskPayload) -> StoreResult<Task>;

    /// Replaces the writable fields of task `id`.
    async fn update(&self, id: TaskId, payload: &TaskPayload) -> StoreResult<Task>;

    /// Removes task `id`.
    async fn delete(&self, id: TaskId) -> StoreResult<()>;
}
