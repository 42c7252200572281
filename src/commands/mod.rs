pub mod close;
pub mod dashboard;
pub mod generate;
pub mod history;
pub mod init;
pub mod pending;

use crate::libs::{
    config::Config,
    dates,
    eligibility::{CurrentUser, Role},
    messages::Message,
};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Generate recurring checklists from a template")]
    Generate(generate::GenerateArgs),
    #[command(about = "Show checklist status counts for the fleet")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "List delegated tasks waiting for an outcome")]
    Pending(pending::PendingArgs),
    #[command(about = "Submit an outcome for a delegated task")]
    Close(close::CloseArgs),
    #[command(about = "Search submitted outcomes")]
    History(history::HistoryArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Generate(args) => generate::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Pending(args) => pending::cmd(args),
            Commands::Close(args) => close::cmd(args),
            Commands::History(args) => history::cmd(args),
        }
    }
}

/// Identity flags shared by the filtered views.
#[derive(Debug, Clone, Default, Args)]
pub struct UserArgs {
    /// Name as it appears in the assignee columns
    #[arg(short, long)]
    pub user: Option<String>,

    /// See every row instead of only your own
    #[arg(long)]
    pub admin: bool,
}

impl UserArgs {
    /// Flags first, then the configured user.
    pub fn resolve(&self, config: &Config) -> Result<CurrentUser> {
        let configured = config.user.as_ref().map(CurrentUser::from);
        let name = match (&self.user, &configured) {
            (Some(name), _) => name.trim().to_string(),
            (None, Some(user)) => user.name.clone(),
            (None, None) if self.admin => String::new(),
            (None, None) => return Err(msg_error_anyhow!(Message::UserNotConfigured)),
        };
        let role = if self.admin {
            Role::Admin
        } else if self.user.is_some() {
            Role::User
        } else {
            configured.map(|user| user.role).unwrap_or(Role::User)
        };
        Ok(CurrentUser { name, role })
    }
}

/// `value_parser` for date flags. Accepts every sheet date format.
pub fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    dates::parse_sheet_date(value).map_err(|_| Message::InvalidDate(value.to_string()).to_string())
}
