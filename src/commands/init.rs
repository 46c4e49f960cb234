//! Interactive setup of the task store connection and logging.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

/// Runs the configuration wizard and writes the result to the config file.
pub fn cmd() -> Result<()> {
    let path = Config::init()?.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
