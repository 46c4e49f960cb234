//! Core library modules for tablero.
//!
//! ## Features
//!
//! - **Domain**: Task records, statuses, priorities and store payloads
//! - **Board State**: Cached collection, column grouping, editor and drag controller
//! - **Infrastructure**: Configuration, data storage, logging, messaging
//! - **User Interface**: Console rendering, date formatting, data export
//!
//! ## Usage
//!
//! ```rust
//! use tablero::libs::columns::classify;
//! use tablero::libs::task::{Task, TaskId, TaskStatus};
//!
//! let tasks = vec![Task::new(TaskId(1), "Write docs")];
//! let columns = classify(&tasks);
//! assert_eq!(columns.count(TaskStatus::Todo), 1);
//! ```

pub mod board;
pub mod collection;
pub mod columns;
pub mod config;
pub mod data_storage;
pub mod drag;
pub mod editor;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
