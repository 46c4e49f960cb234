//! Display implementation for tablero messages.
//!
//! Every user-facing sentence of the application is written here, in one
//! `match`, so wording stays consistent and parameters are interpolated in a
//! single place.
//!
//! ```rust
//! use tablero::libs::messages::Message;
//! use tablero::libs::task::TaskId;
//!
//! let message = Message::TaskDeleted(TaskId(4));
//! assert_eq!(message.to_string(), "Task #4 deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === BOARD MESSAGES ===
            Message::BoardHeader(url) => format!("Tablero Kanban · {}", url),
            Message::BoardEmpty => "The board is empty. Create a task with `tablero add`.".to_string(),
            Message::BoardLoadFailed(error) => format!("Could not load tasks: {}", error),
            Message::BoardStale => "The change was saved but the board could not be reloaded; it may be out of date.".to_string(),
            Message::BoardTotals(count) => format!("{} task(s) on the board", count),

            // === TASK MESSAGES ===
            Message::TaskCreated { id, title } => format!("Task #{} '{}' created", id, title),
            Message::TaskUpdated { id, title } => format!("Task #{} '{}' updated", id, title),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskDeleteDeclined => "Nothing deleted.".to_string(),
            Message::TaskSaveFailed(error) => format!("Could not save the task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Could not delete the task: {}", error),
            Message::TaskNotFound(id) => format!("Task #{} is not on the board.", id),
            Message::TaskTitleRequired => "A task needs a title before it can be saved.".to_string(),
            Message::EditingTask { id, title } => format!("Editing task #{} '{}'", id, title),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::SelectTask => "Select a task".to_string(),
            Message::NoTasksOnBoard => "There are no tasks to choose from.".to_string(),

            // === DRAG MESSAGES ===
            Message::TaskMoved { id, from, to } => format!("Task #{} moved from {} to {}", id, from, to),
            Message::TaskAlreadyInColumn { id, column } => format!("Task #{} is already in {}", id, column),
            Message::TaskMoveFailed(error) => format!("Could not move the task: {}", error),
            Message::SelectTargetColumn => "Move to column".to_string(),

            // === TASK FORM PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::InvalidDueDate(input) => format!("'{}' is not a date in YYYY-MM-DD format", input),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigModuleBackend => "Task store settings".to_string(),
            Message::ConfigModuleLogging => "Logging settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptBackendUrl => "Enter the task store URL".to_string(),
            Message::PromptBackendTimeout => "Enter the request timeout (seconds)".to_string(),
            Message::PromptLogLevel => "Enter the log level (trace, debug, info, warn, error)".to_string(),
            Message::PromptLogFormat => "Enter the log format (pretty, compact)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingBoard(format) => format!("Exporting board as {}...", format),
            Message::ExportCompleted(path) => format!("Board exported to {}", path),
        };
        write!(f, "{}", text)
    }
}
