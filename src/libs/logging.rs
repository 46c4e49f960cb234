//! Diagnostic logging setup.
//!
//! Outside debug mode nothing is installed and the `msg_*` macros print
//! straight to the console. In debug mode a `tracing-subscriber` fmt layer
//! takes over; `RUST_LOG` wins over the configured level.

use crate::libs::config::LoggingConfig;
use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs the global subscriber when debug mode is on.
///
/// Returns `Ok(false)` without doing anything otherwise.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !is_debug_mode() {
        return Ok(false);
    }

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let fmt_layer = match config.format.as_str() {
        "compact" => fmt::layer().compact().with_target(true).boxed(),
        _ => fmt::layer().with_target(true).with_level(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
    Ok(true)
}
