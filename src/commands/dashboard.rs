use super::{parse_date_arg, UserArgs};
use crate::{
    libs::{
        config::Config,
        dates,
        lifecycle::LifecycleState,
        messages::Message,
        sheet,
        summary::FleetSummary,
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// CSV export of the checklist sheet
    #[arg(long)]
    rows: PathBuf,

    #[command(flatten)]
    user: UserArgs,

    /// Classify as of this date instead of today
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Also list the rows in one state
    #[arg(short, long, value_enum)]
    list: Option<LifecycleState>,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let user = args.user.resolve(&Config::read()?)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let rows = sheet::read_checklist_file(&args.rows)?;
    msg_debug!(format!("checklist rows read: {}", rows.len()));

    let summary = FleetSummary::collect(&rows, &user, today);
    if summary.is_empty() {
        msg_info!(Message::NoVisibleTasks);
        return Ok(());
    }

    msg_print!(Message::DashboardHeader(dates::format_sheet_date(today)), true);
    View::summary(&summary)?;

    if !summary.under_maintenance.is_empty() {
        msg_print!(Message::MaintenanceHeader, true);
        View::task_rows(&summary.under_maintenance)?;
    }

    if !summary.unclassifiable.is_empty() {
        msg_warning!(Message::UnclassifiableRows(summary.unclassifiable.len()), true);
        View::unclassifiable(&summary.unclassifiable)?;
    }

    if let Some(state) = args.list {
        let listed = summary.rows_in(state);
        if listed.is_empty() {
            msg_info!(Message::NoTasksInState(state.label().to_string()), true);
        } else {
            msg_print!(Message::StateListHeader(state.label().to_string()), true);
            View::task_rows(listed)?;
        }
    }

    Ok(())
}
