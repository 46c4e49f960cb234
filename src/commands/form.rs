//! Task form shared by `add` and `edit`: flags, interactive prompts and
//! pickers.

use crate::api::TaskStore;
use crate::libs::board::Board;
use crate::libs::editor::TaskDraft;
use crate::libs::formatter::is_valid_due_date_input;
use crate::libs::messages::Message;
use crate::libs::task::{TaskId, TaskPriority, TaskStatus};
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Field values given on the command line. Unset flags leave the draft as is.
#[derive(Debug, Args, Default)]
pub struct TaskFields {
    /// Task title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Board column
    #[arg(short, long, value_enum)]
    pub status: Option<TaskStatus>,
    /// Priority tag
    #[arg(short, long, value_enum)]
    pub priority: Option<TaskPriority>,
    /// Due date as YYYY-MM-DD; an empty value clears it
    #[arg(long = "due")]
    pub due_date: Option<String>,
}

impl TaskFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none() && self.priority.is_none() && self.due_date.is_none()
    }

    pub fn apply(&self, draft: &mut TaskDraft) -> Result<()> {
        if let Some(due_date) = &self.due_date {
            if !is_valid_due_date_input(due_date) {
                crate::msg_bail_anyhow!(Message::InvalidDueDate(due_date.clone()));
            }
            draft.due_date = due_date.trim().to_string();
        }
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        Ok(())
    }
}

/// Asks for every field, offering the current draft values as defaults.
pub fn prompt(draft: &mut TaskDraft) -> Result<()> {
    let theme = ColorfulTheme::default();

    draft.title = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(draft.title.clone())
        .allow_empty(true)
        .interact_text()?;

    draft.description = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(draft.description.clone())
        .allow_empty(true)
        .interact_text()?;

    draft.status = select_status(Message::PromptTaskStatus, draft.status)?;

    let priorities: Vec<&str> = TaskPriority::ALL.iter().map(|priority| priority.as_str()).collect();
    let current = TaskPriority::ALL.iter().position(|priority| *priority == draft.priority).unwrap_or(1);
    let selection = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(current)
        .interact()?;
    draft.priority = TaskPriority::ALL.get(selection).copied().unwrap_or_default();

    let due_date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .with_initial_text(draft.due_date.clone())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), Message> {
            if is_valid_due_date_input(input) {
                Ok(())
            } else {
                Err(Message::InvalidDueDate(input.clone()))
            }
        })
        .interact_text()?;
    draft.due_date = due_date.trim().to_string();

    Ok(())
}

/// Column picker, preselecting `current`.
pub fn select_status(prompt: Message, current: TaskStatus) -> Result<TaskStatus> {
    let titles: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.title()).collect();
    let current = TaskStatus::ALL.iter().position(|status| *status == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&titles)
        .default(current)
        .interact()?;

    Ok(TaskStatus::ALL.get(selection).copied().unwrap_or_default())
}

/// Returns `id` if given, otherwise lets the user pick a task from the board.
/// `None` when the board has nothing to pick from.
pub fn resolve_task<S: TaskStore>(board: &Board<S>, id: Option<TaskId>) -> Result<Option<TaskId>> {
    if id.is_some() {
        return Ok(id);
    }

    let tasks = board.collection().tasks();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksOnBoard);
        return Ok(None);
    }

    let items: Vec<String> = tasks
        .iter()
        .map(|task| format!("#{} {} ({})", task.id, task.title, task.status.title()))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(tasks.get(selection).map(|task| task.id))
}
