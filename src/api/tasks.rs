//! HTTP client for the remote task store.
//!
//! Speaks the store's JSON API:
//!
//! | Operation | Request                 | Response          |
//! |-----------|-------------------------|-------------------|
//! | list      | `GET /api/tasks`        | array of tasks    |
//! | create    | `POST /api/tasks`       | created task      |
//! | update    | `PUT /api/tasks/{id}`   | updated task      |
//! | delete    | `DELETE /api/tasks/{id}`| ignored           |
//!
//! The base URL is resolved once at startup (see
//! [`Config::backend_url`](crate::libs::config::Config::backend_url)) and
//! handed in through [`BackendConfig`]; the client never re-reads it.

use super::{StoreError, StoreResult, TaskStore};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId, TaskPayload};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const TASKS_PATH: &str = "api/tasks";

/// Store URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the task store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the store, without the `/api/tasks` suffix.
    pub api_url: String,
    /// Upper bound for a single request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "backend".to_string(),
            name: "Task store".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleBackend);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendTimeout.to_string())
                .default(config.timeout_secs)
                .interact_text()?,
        })
    }
}

/// [`TaskStore`] backed by the store's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: String,
}

impl HttpTaskStore {
    /// Builds a client for the given backend.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(config: &BackendConfig) -> StoreResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are built from, trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, TASKS_PATH)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}/{}", self.base_url, TASKS_PATH, id)
    }

    /// Sends one request and returns the raw body of a 2xx response.
    async fn execute(&self, method: Method, url: String, payload: Option<&TaskPayload>) -> StoreResult<String> {
        tracing::debug!(%method, %url, "task store request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(payload) = payload {
            // Sets Content-Type: application/json as well
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                method: method.to_string(),
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl TaskStore for HttpTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let body = self.execute(Method::GET, self.collection_url(), None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, payload: &TaskPayload) -> StoreResult<Task> {
        let body = self.execute(Method::POST, self.collection_url(), Some(payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update(&self, id: TaskId, payload: &TaskPayload) -> StoreResult<Task> {
        let body = self.execute(Method::PUT, self.task_url(id), Some(payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        self.execute(Method::DELETE, self.task_url(id), None).await?;
        Ok(())
    }
}
