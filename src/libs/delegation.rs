//! Closing out delegated tasks and browsing their history.
//!
//! Submitting an outcome turns an actionable [`DelegationRow`] into a
//! [`HistoryEntry`]. There is no way back: correcting a submitted outcome
//! is a data fix in the store, not an operation here.

use super::dates;
use super::eligibility::{CurrentUser, DelegationRow};
use super::error::ScheduleError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// What the assignee reports for a delegated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Done,
    /// Not finished; the task moves to a new target date.
    ExtendDate(NaiveDate),
}

impl Outcome {
    /// Builds an outcome from the status dropdown value and the optional date field.
    pub fn parse(status: &str, next_target: Option<NaiveDate>) -> Result<Self, ScheduleError> {
        match status.trim().to_lowercase().as_str() {
            "done" => Ok(Outcome::Done),
            "extend date" | "extend" => next_target.map(Outcome::ExtendDate).ok_or(ScheduleError::MissingNextDate),
            _ => Err(ScheduleError::UnknownOutcome { value: status.to_string() }),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Done => "Done",
            Outcome::ExtendDate(_) => "Extend date",
        }
    }

    pub fn next_target(&self) -> Option<NaiveDate> {
        match self {
            Outcome::Done => None,
            Outcome::ExtendDate(date) => Some(*date),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("Done"),
            Outcome::ExtendDate(date) => write!(f, "Extend date ({})", dates::format_sheet_date(*date)),
        }
    }
}

/// One submitted outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub submitted_on: NaiveDate,
    pub task_id: String,
    pub outcome: Outcome,
    pub remarks: String,
    pub submitted_by: String,
    pub description: String,
    pub given_by: String,
}

/// Records `outcome` for `row` on behalf of `user`.
///
/// # Errors
///
/// [`ScheduleError::NotActionable`] if the row has no planned date or
/// already carries an outcome.
pub fn submit(row: &DelegationRow, outcome: Outcome, remarks: &str, user: &CurrentUser, today: NaiveDate) -> Result<HistoryEntry, ScheduleError> {
    if !row.is_actionable() {
        return Err(ScheduleError::NotActionable { task_id: row.task_id.clone() });
    }

    Ok(HistoryEntry {
        submitted_on: today,
        task_id: row.task_id.clone(),
        outcome,
        remarks: remarks.trim().to_string(),
        submitted_by: user.name.clone(),
        description: row.description.clone(),
        given_by: row.given_by.clone(),
    })
}

/// Whether `task_id` already has a "Done" outcome in the history.
///
/// Extensions can be submitted any number of times and do not count.
pub fn is_closed(entries: &[HistoryEntry], task_id: &str) -> bool {
    let task_id = task_id.trim();
    entries
        .iter()
        .any(|entry| entry.task_id.trim() == task_id && entry.outcome == Outcome::Done)
}

/// Criteria for the history view. Empty fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub search: Option<String>,
}

impl HistoryFilter {
    fn matches(&self, entry: &HistoryEntry) -> bool {
        if self.from.is_some_and(|from| entry.submitted_on < from) {
            return false;
        }
        if self.to.is_some_and(|to| entry.submitted_on > to) {
            return false;
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                [
                    entry.task_id.as_str(),
                    entry.description.as_str(),
                    entry.remarks.as_str(),
                    entry.outcome.status(),
                    entry.submitted_by.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            }
            None => true,
        }
    }
}

/// History entries visible to `user` that pass `filter`, newest first.
///
/// Non-admins only see what they submitted themselves.
pub fn filter_history<'a>(entries: &'a [HistoryEntry], user: &CurrentUser, filter: &HistoryFilter) -> Vec<&'a HistoryEntry> {
    let mut visible: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|entry| user.is_admin() || user.matches(&entry.submitted_by))
        .filter(|entry| filter.matches(entry))
        .collect();
    visible.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on));
    visible
}
