//! Task ID allocation for generated batches.
//!
//! IDs are sequential across the whole checklist store. The highest existing
//! ID is read once per batch and the batch is numbered locally from there,
//! so a batch never interleaves with IDs handed out elsewhere mid-way.

use super::dates;
use super::lifecycle::TaskRow;
use super::schedule::{Frequency, TaskOccurrence};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::info;

/// Reports the highest task ID currently in the store.
pub trait TaskIdSource {
    fn max_task_id(&self) -> Result<u64>;
}

/// A fixed maximum, for callers that already know it.
impl TaskIdSource for u64 {
    fn max_task_id(&self) -> Result<u64> {
        Ok(*self)
    }
}

/// Rows read back from the checklist export. Unparseable IDs are ignored.
impl TaskIdSource for [TaskRow] {
    fn max_task_id(&self) -> Result<u64> {
        Ok(self.iter().filter_map(|row| row.task_id.trim().parse::<u64>().ok()).max().unwrap_or(0))
    }
}

impl TaskIdSource for Vec<TaskRow> {
    fn max_task_id(&self) -> Result<u64> {
        self.as_slice().max_task_id()
    }
}

pub fn next_id(existing_max: u64) -> u64 {
    existing_max + 1
}

/// Fixed column values written alongside every generated checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistMeta {
    pub title: String,
    pub department: String,
    pub given_by: String,
    pub due_time: NaiveTime,
    pub enable_reminders: bool,
    pub require_attachment: bool,
}

impl Default for ChecklistMeta {
    fn default() -> Self {
        Self {
            title: "Vehicle Checklist".to_string(),
            department: "Vehicle Management".to_string(),
            given_by: "System".to_string(),
            due_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            enable_reminders: true,
            require_attachment: false,
        }
    }
}

/// A numbered occurrence, ready for bulk insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    pub task_id: u64,
    pub title: String,
    pub department: String,
    pub given_by: String,
    pub assignee: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub frequency: Frequency,
    pub enable_reminders: bool,
    pub require_attachment: bool,
}

impl TaskRecord {
    /// Due date as written to the sheet, e.g. `08/01/2024 09:00:00`.
    pub fn due_cell(&self) -> String {
        dates::format_due_datetime(self.due_date, self.due_time)
    }
}

/// Numbers `occurrences` in emission order, starting after the store's current maximum.
///
/// The source is queried exactly once.
pub fn assign_ids<S: TaskIdSource + ?Sized>(occurrences: &[TaskOccurrence], source: &S, meta: &ChecklistMeta) -> Result<Vec<TaskRecord>> {
    let existing_max = source.max_task_id()?;
    let first_id = next_id(existing_max);

    let records: Vec<TaskRecord> = occurrences
        .iter()
        .zip(first_id..)
        .map(|(occurrence, task_id)| TaskRecord {
            task_id,
            title: meta.title.clone(),
            department: meta.department.clone(),
            given_by: meta.given_by.clone(),
            assignee: occurrence.assignee.clone(),
            description: occurrence.description.clone(),
            due_date: occurrence.due_date,
            due_time: meta.due_time,
            frequency: occurrence.frequency,
            enable_reminders: meta.enable_reminders,
            require_attachment: meta.require_attachment,
        })
        .collect();

    info!(first_id, count = records.len(), "task ids allocated");
    Ok(records)
}
