//! Board export to a file for spreadsheets or scripts.

use super::Context;
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(context: &Context, args: ExportArgs) -> Result<()> {
    let board = context.mounted_board().await?;
    let format = args.format;
    let exporter = Exporter::new(format, args.output);

    msg_info!(Message::ExportingBoard(format.extension().to_uppercase()));
    let path = exporter.export(&board.columns())?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
