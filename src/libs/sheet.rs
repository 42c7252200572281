//! CSV exports of the sheet store and batch files for bulk insertion.
//!
//! Every sheet is exported with a header row and read positionally, the
//! same way the sheet columns are addressed (`A` = 0, `B` = 1, ...). Cells
//! that are missing or blank become `None`.
//!
//! ## Column layouts
//!
//! | Sheet                | Columns used                                              |
//! |----------------------|-----------------------------------------------------------|
//! | Working Day Calendar | A date                                                    |
//! | Checklist            | B id, C assignee, D description, E due, F frequency, G completion, J maintenance |
//! | Delegation           | B id, D given by, E assignee, F description, K planned, L actual |
//! | Delegation history   | A submitted, B id, C status, D next target, E remarks, H user, I description, J given by |

use super::allocator::TaskRecord;
use super::calendar::{CalendarProvider, WorkingDayCalendar};
use super::dates;
use super::delegation::{HistoryEntry, Outcome};
use super::eligibility::DelegationRow;
use super::lifecycle::TaskRow;
use super::schedule::Frequency;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const HISTORY_HEADERS: [&str; 10] = [
    "Timestamp",
    "Task ID",
    "Status",
    "Next Target Date",
    "Remarks",
    "Image",
    "",
    "Username",
    "Task",
    "Given By",
];

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new().has_headers(true).flexible(true).trim(csv::Trim::All).from_reader(source)
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record.get(index).map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn text(record: &StringRecord, index: usize) -> String {
    cell(record, index).unwrap_or_default()
}

fn frequency_cell(record: &StringRecord, index: usize) -> Option<Frequency> {
    let value = cell(record, index)?;
    match value.parse::<Frequency>() {
        Ok(frequency) => Some(frequency),
        Err(err) => {
            debug!(%err, "frequency cell ignored");
            None
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("failed to open {}", path.display()))
}

/// Reads working days from column A. Unreadable cells are skipped.
pub fn read_calendar<R: Read>(source: R) -> Result<WorkingDayCalendar> {
    let mut days = Vec::new();
    for record in reader(source).records() {
        let record = record?;
        let Some(value) = cell(&record, 0) else { continue };
        match dates::parse_sheet_date(&value) {
            Ok(date) => days.push(date),
            Err(err) => debug!(%err, "calendar cell skipped"),
        }
    }
    Ok(WorkingDayCalendar::new(days))
}

pub fn read_checklist<R: Read>(source: R) -> Result<Vec<TaskRow>> {
    let mut rows = Vec::new();
    for record in reader(source).records() {
        let record = record?;
        rows.push(TaskRow {
            task_id: text(&record, 1),
            assignee: text(&record, 2),
            description: text(&record, 3),
            due_date: text(&record, 4),
            frequency: frequency_cell(&record, 5),
            completion: cell(&record, 6),
            maintenance_note: cell(&record, 9),
        });
    }
    Ok(rows)
}

pub fn read_delegation<R: Read>(source: R) -> Result<Vec<DelegationRow>> {
    let mut rows = Vec::new();
    for record in reader(source).records() {
        let record = record?;
        rows.push(DelegationRow {
            task_id: text(&record, 1),
            given_by: text(&record, 3),
            assignee: cell(&record, 4).unwrap_or_else(|| "Unassigned".to_string()),
            description: text(&record, 5),
            source: cell(&record, 10),
            result: cell(&record, 11),
        });
    }
    Ok(rows)
}

/// Reads submitted outcomes. Rows with an unreadable date or status are skipped.
pub fn read_history<R: Read>(source: R) -> Result<Vec<HistoryEntry>> {
    let mut entries = Vec::new();
    for record in reader(source).records() {
        let record = record?;
        let Ok(submitted_on) = dates::parse_sheet_date(&text(&record, 0)) else {
            debug!(row = ?record.position().map(|p| p.line()), "history row without a readable date skipped");
            continue;
        };
        let next_target = cell(&record, 3).and_then(|value| dates::parse_sheet_date(&value).ok());
        let outcome = match Outcome::parse(&text(&record, 2), next_target) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "history row skipped");
                continue;
            }
        };
        entries.push(HistoryEntry {
            submitted_on,
            task_id: text(&record, 1),
            outcome,
            remarks: text(&record, 4),
            submitted_by: text(&record, 7),
            description: text(&record, 8),
            given_by: text(&record, 9),
        });
    }
    Ok(entries)
}

/// Appends one history row in the sheet's column layout.
pub fn append_history<W: Write>(sink: W, entry: &HistoryEntry) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    let next_target = entry.outcome.next_target().map(dates::format_sheet_date).unwrap_or_default();
    writer.write_record([
        dates::format_sheet_date(entry.submitted_on).as_str(),
        entry.task_id.as_str(),
        entry.outcome.status(),
        next_target.as_str(),
        entry.remarks.as_str(),
        "",
        "",
        entry.submitted_by.as_str(),
        entry.description.as_str(),
        entry.given_by.as_str(),
    ])?;
    writer.flush()?;
    Ok(())
}

/// Appends to a history export, writing the header row first for a new file.
///
/// Exports often end without a line break; one is added before the new row
/// so it does not run into the last exported one.
pub fn append_history_file(path: &Path, entry: &HistoryEntry) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let len = file.metadata()?.len();
    if len == 0 {
        writeln!(file, "{}", HISTORY_HEADERS.join(","))?;
    } else {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            debug!(path = %path.display(), "history export without trailing newline");
            writeln!(file)?;
        }
    }
    append_history(file, entry)
}

/// One generated row in the bulk-insert payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    pub timestamp: String,
    pub task_id: String,
    pub department: String,
    pub given_by: String,
    pub doer: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub frequency: String,
    pub enable_reminders: String,
    pub require_attachment: String,
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

impl BatchRow {
    pub fn new(record: &TaskRecord, submitted_at: NaiveDateTime) -> Self {
        Self {
            timestamp: submitted_at.format(dates::SHEET_DATETIME_FORMAT).to_string(),
            task_id: record.task_id.to_string(),
            department: record.department.clone(),
            given_by: record.given_by.clone(),
            doer: record.assignee.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            due_date: record.due_cell(),
            frequency: record.frequency.to_string(),
            enable_reminders: yes_no(record.enable_reminders),
            require_attachment: yes_no(record.require_attachment),
        }
    }
}

pub fn batch_rows(records: &[TaskRecord], submitted_at: NaiveDateTime) -> Vec<BatchRow> {
    records.iter().map(|record| BatchRow::new(record, submitted_at)).collect()
}

pub fn write_batch_csv<W: Write>(sink: W, rows: &[BatchRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_batch_json<W: Write>(sink: W, rows: &[BatchRow]) -> Result<()> {
    serde_json::to_writer_pretty(sink, rows)?;
    Ok(())
}

/// Output format of a generated batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BatchFormat {
    /// Header row plus one row per checklist, for pasting into the sheet.
    Csv,
    /// Array of row objects, for a bulk-insert call.
    Json,
}

impl BatchFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            BatchFormat::Csv => "csv",
            BatchFormat::Json => "json",
        }
    }
}

pub fn write_batch<W: Write>(sink: W, rows: &[BatchRow], format: BatchFormat) -> Result<()> {
    match format {
        BatchFormat::Csv => write_batch_csv(sink, rows),
        BatchFormat::Json => write_batch_json(sink, rows),
    }
}

/// Default batch file name, e.g. `fleetcheck_batch_20240108_090000.csv`.
pub fn default_batch_path(submitted_at: NaiveDateTime, format: BatchFormat) -> PathBuf {
    PathBuf::from(format!("fleetcheck_batch_{}.{}", submitted_at.format("%Y%m%d_%H%M%S"), format.extension()))
}

pub fn write_batch_file(path: &Path, rows: &[BatchRow], format: BatchFormat) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_batch(file, rows, format)
}

/// Calendar read from a CSV export of the "Working Day Calendar" sheet.
#[derive(Debug, Clone)]
pub struct CsvCalendar {
    path: PathBuf,
}

impl CsvCalendar {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl CalendarProvider for CsvCalendar {
    fn working_days(&self) -> Result<WorkingDayCalendar> {
        read_calendar(open(&self.path)?)
    }
}

pub fn read_checklist_file(path: &Path) -> Result<Vec<TaskRow>> {
    read_checklist(open(path)?)
}

pub fn read_delegation_file(path: &Path) -> Result<Vec<DelegationRow>> {
    read_delegation(open(path)?)
}

pub fn read_history_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    read_history(open(path)?)
}
