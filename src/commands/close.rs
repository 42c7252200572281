use super::{parse_date_arg, UserArgs};
use crate::{
    libs::{
        config::Config,
        delegation::{is_closed, submit, Outcome},
        eligibility::is_visible_to,
        messages::Message,
        sheet,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CloseArgs {
    /// CSV export of the delegation sheet
    #[arg(long)]
    rows: PathBuf,

    /// History export the outcome is appended to
    #[arg(long)]
    history: PathBuf,

    #[arg(short, long)]
    task: String,

    /// "done" or "extend"
    #[arg(long)]
    status: String,

    /// New target date, required when extending
    #[arg(long, value_parser = parse_date_arg)]
    next: Option<NaiveDate>,

    #[arg(short, long, default_value = "")]
    remarks: String,

    #[command(flatten)]
    user: UserArgs,
}

pub fn cmd(args: CloseArgs) -> Result<()> {
    let user = args.user.resolve(&Config::read()?)?;
    let outcome = Outcome::parse(&args.status, args.next).map_err(|err| msg_error_anyhow!(Message::InvalidOutcome(err.to_string())))?;

    let rows = sheet::read_delegation_file(&args.rows)?;
    let task_id = args.task.trim();
    let Some(row) = rows.iter().find(|row| row.task_id.trim() == task_id) else {
        msg_bail_anyhow!(Message::TaskNotFound(task_id.to_string()));
    };
    if !is_visible_to(&row.assignee, &user) {
        msg_bail_anyhow!(Message::TaskNotAssignedToUser(task_id.to_string(), user.name.clone()));
    }

    if args.history.exists() && is_closed(&sheet::read_history_file(&args.history)?, task_id) {
        msg_bail_anyhow!(Message::TaskAlreadyClosed(task_id.to_string()));
    }

    let entry = submit(row, outcome, &args.remarks, &user, Local::now().date_naive())?;
    sheet::append_history_file(&args.history, &entry)?;

    msg_success!(Message::OutcomeRecorded(entry.task_id.clone(), entry.outcome.to_string()));
    Ok(())
}
