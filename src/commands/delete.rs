//! Deletes a task after confirmation.

use super::{board::print, form, warn_if_stale, Context};
use crate::{
    libs::{
        editor::DeleteOutcome,
        messages::Message,
        task::{Task, TaskId},
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id; picked interactively when omitted
    id: Option<TaskId>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(context: &Context, args: DeleteArgs) -> Result<()> {
    let mut board = context.mounted_board().await?;
    let Some(id) = form::resolve_task(&board, args.id)? else {
        return Ok(());
    };

    let yes = args.yes;
    let outcome = board
        .delete(id, |task| {
            if yes {
                return true;
            }
            let answer = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                .default(false)
                .interact();
            confirmed(answer, task)
        })
        .await;

    match outcome {
        Ok(DeleteOutcome::Declined) => {
            msg_info!(Message::TaskDeleteDeclined);
            return Ok(());
        }
        Ok(DeleteOutcome::Deleted(id)) => msg_success!(Message::TaskDeleted(id)),
        Err(err) => {
            msg_error!(Message::TaskDeleteFailed(err.to_string()));
            return Err(err.into());
        }
    }

    warn_if_stale(&board);
    print(&board);
    Ok(())
}

/// Answer of the confirmation prompt. A prompt that could not be shown
/// counts as declined.
pub fn confirmed(answer: dialoguer::Result<bool>, task: &Task) -> bool {
    answer.unwrap_or_else(|err| {
        tracing::warn!(error = %err, id = %task.id, "delete confirmation failed, treating as declined");
        false
    })
}
