//! Creates a task, from flags or through the interactive form.

use super::{board::print, form, warn_if_stale, Context};
use crate::{
    libs::{editor::SaveOutcome, messages::Message},
    msg_bail_anyhow, msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: form::TaskFields,
}

pub async fn cmd(context: &Context, args: AddArgs) -> Result<()> {
    // A failed load does not block the create.
    let mut board = context.board()?;
    if let Err(err) = board.mount().await {
        msg_warning!(Message::BoardLoadFailed(err.to_string()));
    }
    board.open_create();

    args.fields.apply(board.editor_mut().draft_mut())?;
    // Without a title on the command line the whole form is prompted, with
    // any other flags as defaults.
    if args.fields.title.is_none() {
        form::prompt(board.editor_mut().draft_mut())?;
    }

    if !board.editor().can_save() {
        board.cancel_edit();
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }

    match board.save().await {
        Ok(SaveOutcome::Created(task)) => {
            msg_success!(Message::TaskCreated {
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
