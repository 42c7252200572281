use super::UserArgs;
use crate::{
    libs::{config::Config, eligibility::pending_queue, messages::Message, sheet, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PendingArgs {
    /// CSV export of the delegation sheet
    #[arg(long)]
    rows: PathBuf,

    #[command(flatten)]
    user: UserArgs,
}

pub fn cmd(args: PendingArgs) -> Result<()> {
    let user = args.user.resolve(&Config::read()?)?;
    let rows = sheet::read_delegation_file(&args.rows)?;

    let queue = pending_queue(&rows, &user);
    if queue.is_empty() {
        msg_info!(Message::NoPendingTasks);
        return Ok(());
    }

    msg_print!(Message::PendingHeader(queue.len()), true);
    View::pending(&queue)?;

    Ok(())
}
