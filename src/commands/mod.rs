//! Command-line front end of the board.
//!
//! Each subcommand loads the board from the store, drives the board state
//! machine the way the corresponding UI gesture would, and reports the
//! outcome through the message macros.

pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod export;
pub mod form;
pub mod init;
pub mod move_task;
pub mod show;

use crate::api::{BackendConfig, HttpTaskStore};
use crate::libs::board::Board;
use crate::libs::config::{self, Config};
use crate::libs::logging;
use crate::libs::messages::Message;
use crate::{msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the task store and logging")]
    Init,
    #[command(about = "Show the board")]
    Board,
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Move a task to another column")]
    Move(move_task::MoveArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export the board to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task store URL, overriding TABLERO_BACKEND_URL and the config file
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Settings resolved once at startup and shared by every command.
pub struct Context {
    pub backend: BackendConfig,
}

impl Context {
    /// A board connected to the configured store, not loaded yet.
    pub fn board(&self) -> Result<Board<HttpTaskStore>> {
        Ok(Board::new(HttpTaskStore::new(&self.backend)?))
    }

    /// A board with its first load done. A failed load is reported and
    /// returned as an error.
    pub async fn mounted_board(&self) -> Result<Board<HttpTaskStore>> {
        let mut board = self.board()?;
        if let Err(err) = board.mount().await {
            msg_error!(Message::BoardLoadFailed(err.to_string()));
            return Err(err.into());
        }
        Ok(board)
    }
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        config::load_env();
        let config = Config::read()?;
        logging::init(&config.logging())?;

        let context = Context {
            backend: config.backend(cli.url.as_deref()),
        };
        tracing::debug!(url = %context.backend.api_url, "task store resolved");

        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Board => board::cmd(&context).await,
            Commands::Show(args) => show::cmd(&context, args).await,
            Commands::Add(args) => add::cmd(&context, args).await,
            Commands::Edit(args) => edit::cmd(&context, args).await,
            Commands::Move(args) => move_task::cmd(&context, args).await,
            Commands::Delete(args) => delete::cmd(&context, args).await,
            Commands::Export(args) => export::cmd(&context, args).await,
        }
    }
}

/// Warns when the reload following a change did not go through.
pub(crate) fn warn_if_stale<S: crate::api::TaskStore>(board: &Board<S>) {
    if board.is_stale() {
        msg_warning!(Message::BoardStale);
    }
}
