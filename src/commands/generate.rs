use super::parse_date_arg;
use crate::{
    libs::{
        allocator::assign_ids,
        calendar::{CalendarProvider, WorkingDayCalendar},
        config::Config,
        dates,
        error::ScheduleError,
        lifecycle::TaskRow,
        messages::Message,
        schedule::{Frequency, Occurrences, TaskOccurrence, TemplateDraft},
        sheet::{self, BatchFormat, CsvCalendar},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What to check, e.g. "Tyre pressure, Truck 12"
    #[arg(short, long)]
    description: Option<String>,

    /// Person responsible for every generated checklist
    #[arg(short, long)]
    assignee: Option<String>,

    /// First due date (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date_arg)]
    start: Option<NaiveDate>,

    #[arg(short, long, value_enum)]
    frequency: Option<Frequency>,

    /// CSV export of the working-day calendar sheet
    #[arg(long)]
    calendar: Option<PathBuf>,

    /// CSV export of the checklist sheet, used to continue task numbering
    #[arg(long)]
    rows: Option<PathBuf>,

    /// Write the batch; without a path a timestamped file is created
    #[arg(short, long)]
    out: Option<Option<PathBuf>>,

    #[arg(long, value_enum, default_value = "csv")]
    format: BatchFormat,

    /// Show the dates only, without numbering or writing anything
    #[arg(long)]
    preview: bool,
}

pub fn cmd(args: GenerateArgs) -> Result<()> {
    let schedule = Config::read()?.schedule_or_default();
    let meta = schedule.checklist_meta()?;
    let options = schedule.generation_options();

    let template = TemplateDraft {
        description: args.description,
        assignee: args.assignee,
        start_date: args.start,
        frequency: args.frequency,
    }
    .validate()
    .map_err(explain)?;

    let calendar = match &args.calendar {
        Some(path) => CsvCalendar::new(path).working_days()?,
        None => WorkingDayCalendar::unrestricted(),
    };
    match calendar.last_day() {
        Some(last) => msg_info!(Message::CalendarLoaded(calendar.len(), dates::format_sheet_date(last))),
        None => msg_info!(Message::CalendarUnrestricted(options.horizon_years)),
    }

    let mut occurrences = Occurrences::new(&template, &calendar, &options);
    let generated: Vec<TaskOccurrence> = occurrences.by_ref().collect();
    if generated.is_empty() {
        msg_bail_anyhow!(Message::NothingToSchedule(dates::format_sheet_date(template.start_date)));
    }
    if occurrences.fallbacks() > 0 {
        msg_warning!(Message::SlotFallbacks(occurrences.fallbacks()));
    }

    msg_print!(Message::OccurrencesHeader(template.description.clone(), template.assignee.clone()), true);

    if args.preview {
        View::occurrences(&generated)?;
        msg_info!(Message::OccurrencesPreview(generated.len()));
        return Ok(());
    }

    let existing: Vec<TaskRow> = match &args.rows {
        Some(path) => sheet::read_checklist_file(path)?,
        None => {
            msg_warning!(Message::NoChecklistExport);
            Vec::new()
        }
    };
    let records = assign_ids(&generated, &existing, &meta)?;
    View::records(&records)?;

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        msg_success!(Message::TaskIdsAssigned(records.len(), first.task_id, last.task_id));
    }

    if let Some(out) = args.out {
        let submitted_at = Local::now().naive_local();
        let path = out.unwrap_or_else(|| sheet::default_batch_path(submitted_at, args.format));
        let rows = sheet::batch_rows(&records, submitted_at);
        sheet::write_batch_file(&path, &rows, args.format)?;
        msg_success!(Message::BatchWritten(rows.len(), path.display().to_string()));
    }

    Ok(())
}

fn explain(err: ScheduleError) -> anyhow::Error {
    match err {
        ScheduleError::InvalidTemplate { field } => msg_error_anyhow!(Message::TemplateFieldMissing(field.to_string())),
        other => anyhow::Error::new(other),
    }
}
