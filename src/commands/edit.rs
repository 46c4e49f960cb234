//! Edits an existing task.

use super::{board::print, form, warn_if_stale, Context};
use crate::{
    libs::{editor::SaveOutcome, messages::Message, task::TaskId},
    msg_bail_anyhow, msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id; picked interactively when omitted
    id: Option<TaskId>,

    #[command(flatten)]
    fields: form::TaskFields,
}

pub async fn cmd(context: &Context, args: EditArgs) -> Result<()> {
    let mut board = context.mounted_board().await?;
    let Some(id) = form::resolve_task(&board, args.id)? else {
        return Ok(());
    };

    board.open_edit(id)?;
    if let Some(task) = board.editor().editing() {
        msg_info!(Message::EditingTask {
            id: task.id,
            title: task.title.clone(),
        });
    }

    if args.fields.is_empty() {
        form::prompt(board.editor_mut().draft_mut())?;
    } else {
        args.fields.apply(board.editor_mut().draft_mut())?;
    }

    if !board.editor().can_save() {
        board.cancel_edit();
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }

    match board.save().await {
        Ok(SaveOutcome::Updated(task)) => {
            msg_success!(Message::TaskUpdated {
                id: task.id,
                title: task.title.clone(),
            });
        }
        Ok(_) => {}
        Err(err) => {
            msg_error!(Message::TaskSaveFailed(err.to_string()));
            return Err(err.into());
        }
    }

    warn_if_stale(&board);
    print(&board);
    Ok(())
}
