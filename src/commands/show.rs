use super::{form::resolve_task, Context};
use crate::{
    libs::{messages::Message, task::TaskId, view::View},
    msg_bail_anyhow,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id; picked interactively when omitted
    id: Option<TaskId>,
}

pub async fn cmd(context: &Context, args: ShowArgs) -> Result<()> {
    let board = context.mounted_board().await?;
    let Some(id) = resolve_task(&board, args.id)? else {
        return Ok(());
    };

    match board.task(id) {
        Ok(task) => View::task(task),
        Err(_) => msg_bail_anyhow!(Message::TaskNotFound(id)),
    }
    Ok(())
}
