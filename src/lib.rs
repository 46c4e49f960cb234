//! # Tablero - Kanban task board
//!
//! A command-line Kanban board backed by a remote task store over HTTP.
//!
//! ## Features
//!
//! - **Board**: Tasks grouped into four fixed columns, with per-column counts
//! - **Editing**: Create and edit tasks through flags or an interactive form
//! - **Moves**: Drag-and-drop semantics for changing a task's column
//! - **Consistency**: Full reload from the store after every change
//! - **Data Export**: Export the board to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tablero::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
