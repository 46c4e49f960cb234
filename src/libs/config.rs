//! Configuration for the tablero application.
//!
//! Settings live in `config.json` inside the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\tablero\config.json`
//! - **macOS**: `~/Library/Application Support/tablero/config.json`
//! - **Linux**: `~/.local/share/tablero/config.json`
//!
//! Both sections are optional. A missing file is not an error; every value
//! then falls back to its default.
//!
//! ## Store URL resolution
//!
//! The task store URL is resolved once, at startup, in this order:
//!
//! 1. the `--url` command-line flag
//! 2. the `TABLERO_BACKEND_URL` environment variable (after loading `.env`)
//! 3. `backend.api_url` from the configuration file
//! 4. `http://localhost:3001`
//!
//! ```rust,no_run
//! use tablero::api::HttpTaskStore;
//! use tablero::libs::config::Config;
//!
//! # fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let backend = config.backend(None);
//! let store = HttpTaskStore::new(&backend)?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::api::tasks::BackendConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured store URL.
pub const BACKEND_URL_ENV: &str = "TABLERO_BACKEND_URL";

/// A section offered by the configuration wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Diagnostic log settings, used when debug mode is on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    /// `pretty` or `compact`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON and returns its path.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Interactive setup. Starts from the current file so existing values
    /// show up as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            BackendConfig::module(),
            ConfigModule {
                key: "logging".to_string(),
                name: "Logging".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for module in selected.iter().filter_map(|&index| modules.get(index)) {
            match module.key.as_str() {
                "backend" => config.backend = Some(BackendConfig::init(&config.backend)?),
                "logging" => {
                    let default = config.logging.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLogging);
                    config.logging = Some(LoggingConfig {
                        level: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogLevel.to_string())
                            .default(default.level)
                            .interact_text()?,
                        format: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogFormat.to_string())
                            .default(default.format)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Backend settings with the store URL resolved from flag, environment,
    /// file and default, in that order.
    pub fn backend(&self, cli_url: Option<&str>) -> BackendConfig {
        let env_url = std::env::var(BACKEND_URL_ENV).ok();
        self.backend_with(cli_url, env_url.as_deref())
    }

    /// Same as [`backend`](Self::backend) with the environment value passed in.
    pub fn backend_with(&self, cli_url: Option<&str>, env_url: Option<&str>) -> BackendConfig {
        let configured = self.backend.clone().unwrap_or_default();
        let api_url = Self::backend_url(cli_url, env_url, Some(configured.api_url.as_str()));

        BackendConfig { api_url, ..configured }
    }

    /// First non-blank candidate, else the default store URL.
    pub fn backend_url(cli_url: Option<&str>, env_url: Option<&str>, file_url: Option<&str>) -> String {
        [cli_url, env_url, file_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(crate::api::tasks::DEFAULT_API_URL)
            .to_string()
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

/// Loads `.env` from the working directory, if present, into the process
/// environment.
pub fn load_env() {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
}
