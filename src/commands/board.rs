//! Prints the four columns of the board.

use super::Context;
use crate::{
    api::TaskStore,
    libs::{board::Board, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd(context: &Context) -> Result<()> {
    let board = context.mounted_board().await?;
    msg_print!(Message::BoardHeader(board.store().base_url().to_string()), true);
    print(&board);
    Ok(())
}

/// Board table followed by the task total, or a notice for an empty board.
pub fn print<S: TaskStore>(board: &Board<S>) {
    let columns = board.columns();
    View::board(&columns);

    if columns.total() == 0 {
        msg_info!(Message::BoardEmpty);
    } else {
        msg_print!(Message::BoardTotals(columns.total()));
    }
}
