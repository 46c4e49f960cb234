//! Moves a card to another column, the command-line version of a drag and
//! drop.

use super::{board::print, form, warn_if_stale, Context};
use crate::{
    libs::{board::DropOutcome, messages::Message, task::{TaskId, TaskStatus}},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task id; picked interactively when omitted
    id: Option<TaskId>,

    /// Target column; picked interactively when omitted
    #[arg(value_enum)]
    status: Option<TaskStatus>,
}

pub async fn cmd(context: &Context, args: MoveArgs) -> Result<()> {
    let mut board = context.mounted_board().await?;
    let Some(id) = form::resolve_task(&board, args.id)? else {
        return Ok(());
    };

    board.start_drag(id)?;
    let target = match args.status {
        Some(status) => status,
        None => {
            let current = board.task(id)?.status;
            match form::select_status(Message::SelectTargetColumn, current) {
                Ok(status) => status,
                Err(err) => {
                    board.cancel_drag();
                    return Err(err);
                }
            }
        }
    };
    board.drag_enter(target);

    match board.drop_card().await {
        Ok(DropOutcome::Unchanged(task)) => {
            msg_info!(Message::TaskAlreadyInColumn {
                id: task.id,
                column: task.status.title().to_string(),
            });
            return Ok(());
        }
        Ok(DropOutcome::Moved { from, task }) => {
            msg_success!(Message::TaskMoved {
                id: task.id,
                from: from.title().to_string(),
                to: task.status.title().to_string(),
            });
        }
        Err(err) => {
            msg_error!(Message::TaskMoveFailed(err.to_string()));
            return Err(err.into());
        }
    }

    warn_if_stale(&board);
    print(&board);
    Ok(())
}
