//! Lifecycle classification of checklist rows.
//!
//! A row's state is never stored; it is derived every time from the due
//! date, the completion cell and today's date:
//!
//! ```text
//! completion non-blank        -> Completed
//! due date == today           -> Pending
//! due date <  today           -> Overdue
//! due date >  today           -> Upcoming
//! ```
//!
//! The first matching rule wins. A non-blank maintenance note marks the row
//! UnderMaintenance on top of whichever state it is in.

use super::dates;
use super::error::ScheduleError;
use super::schedule::Frequency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived due-date state of a checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Completed,
    Pending,
    Overdue,
    /// Not completed and due after today.
    Upcoming,
}

impl LifecycleState {
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleState::Completed => "Completed",
            LifecycleState::Pending => "Pending",
            LifecycleState::Overdue => "Overdue",
            LifecycleState::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A checklist row as read back from the store.
///
/// Date cells are kept raw so a malformed value can be reported rather than
/// silently miscounted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub task_id: String,
    pub assignee: String,
    pub description: String,
    pub due_date: String,
    /// `None` when the cell is blank or holds an unknown value.
    pub frequency: Option<Frequency>,
    pub completion: Option<String>,
    pub maintenance_note: Option<String>,
}

/// Classification of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClassification {
    /// `Err` when the due date could not be read; such rows are left out of
    /// every count and flagged for correction.
    pub state: Result<LifecycleState, ScheduleError>,
    pub under_maintenance: bool,
}

pub fn classify(due_date: NaiveDate, completion: Option<&str>, today: NaiveDate) -> LifecycleState {
    if !dates::is_blank(completion) {
        return LifecycleState::Completed;
    }
    if due_date == today {
        LifecycleState::Pending
    } else if due_date < today {
        LifecycleState::Overdue
    } else {
        LifecycleState::Upcoming
    }
}

pub fn has_maintenance_flag(note: Option<&str>) -> bool {
    !dates::is_blank(note)
}

/// Classifies a raw row against `today`.
///
/// Completion is checked before the due date is parsed, so a completed row
/// with an unreadable due date still counts as completed.
pub fn classify_row(row: &TaskRow, today: NaiveDate) -> RowClassification {
    let completion = row.completion.as_deref();
    let state = if !dates::is_blank(completion) {
        Ok(LifecycleState::Completed)
    } else {
        dates::parse_sheet_date(&row.due_date).map(|due| classify(due, completion, today))
    };

    RowClassification {
        state,
        under_maintenance: has_maintenance_flag(row.maintenance_note.as_deref()),
    }
}
