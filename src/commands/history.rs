use super::{parse_date_arg, UserArgs};
use crate::{
    libs::{
        config::Config,
        dates,
        delegation::{filter_history, HistoryFilter},
        messages::Message,
        sheet,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// CSV export of the delegation history sheet
    #[arg(long)]
    rows: PathBuf,

    #[command(flatten)]
    user: UserArgs,

    /// Earliest submission date, inclusive
    #[arg(long, value_parser = parse_date_arg)]
    from: Option<NaiveDate>,

    /// Latest submission date, inclusive
    #[arg(long, value_parser = parse_date_arg)]
    to: Option<NaiveDate>,

    /// Text to look for in ID, description, remarks, status or user
    #[arg(short, long)]
    search: Option<String>,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            msg_bail_anyhow!(Message::InvalidDateRange(dates::format_sheet_date(from), dates::format_sheet_date(to)));
        }
    }

    let user = args.user.resolve(&Config::read()?)?;
    let entries = sheet::read_history_file(&args.rows)?;
    let filter = HistoryFilter {
        from: args.from,
        to: args.to,
        search: args.search,
    };

    let visible = filter_history(&entries, &user, &filter);
    if visible.is_empty() {
        msg_info!(Message::NoHistoryEntries);
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(visible.len()), true);
    View::history(&visible)?;

    Ok(())
}
