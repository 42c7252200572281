//! Recurring checklist generation.
//!
//! A [`TaskTemplate`] describes one recurring check ("Weekly tyre pressure,
//! Truck 12") assigned to one person. [`generate`] expands it into every
//! dated occurrence up to the scheduling horizon, placing each occurrence on
//! a free working day when a calendar is supplied.
//!
//! ## Algorithm
//!
//! ```text
//! cursor_k = start + k * step          (k = 0, 1, 2, ...)
//! while cursor_k <= horizon:
//!     date = first unused working day >= cursor_k   (bounded search)
//!            or cursor_k when the calendar is empty / the search fails
//!     stop if date > horizon
//!     emit date, mark it used
//! ```
//!
//! Cursors are computed from the start date rather than from the previous
//! cursor, so month-end starts do not drift: a monthly check starting on
//! Jan 31 lands on Feb 29, Mar 31, Apr 30 and so on.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleetcheck::libs::calendar::WorkingDayCalendar;
//! use fleetcheck::libs::schedule::{generate, Frequency, GenerationOptions, TaskTemplate};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let template = TaskTemplate::new("Brake inspection", "ravi", start, Frequency::Weekly).unwrap();
//! let occurrences = generate(&template, &WorkingDayCalendar::unrestricted(), &GenerationOptions::default()).unwrap();
//! assert_eq!(occurrences[1].due_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
//! ```

use super::calendar::{SlotResolution, WorkingDayCalendar, DEFAULT_MAX_SLOT_ATTEMPTS};
use super::dates;
use super::error::ScheduleError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Years scheduled ahead when no working-day calendar is available.
pub const DEFAULT_HORIZON_YEARS: u32 = 2;

/// How often a checklist recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }

    /// The `step`-th cursor date counted from `anchor`.
    ///
    /// Month-based frequencies clamp to the last day of shorter months.
    pub fn nth_date(&self, anchor: NaiveDate, step: u32) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => anchor.checked_add_days(Days::new(u64::from(step))),
            Frequency::Weekly => anchor.checked_add_days(Days::new(7 * u64::from(step))),
            Frequency::Monthly => dates::add_months_clamped(anchor, step),
            Frequency::Quarterly => dates::add_months_clamped(anchor, step.checked_mul(3)?),
            Frequency::Yearly => dates::add_months_clamped(anchor, step.checked_mul(12)?),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(ScheduleError::UnknownFrequency { value: value.to_string() }),
        }
    }
}

/// A validated recurring checklist definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub description: String,
    pub assignee: String,
    pub start_date: NaiveDate,
    pub frequency: Frequency,
}

impl TaskTemplate {
    pub fn new(description: &str, assignee: &str, start_date: NaiveDate, frequency: Frequency) -> Result<Self, ScheduleError> {
        TemplateDraft {
            description: Some(description.to_string()),
            assignee: Some(assignee.to_string()),
            start_date: Some(start_date),
            frequency: Some(frequency),
        }
        .validate()
    }
}

/// Template fields as collected from a form, any of which may be missing.
#[derive(Debug, Clone, Default)]
pub struct TemplateDraft {
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub frequency: Option<Frequency>,
}

impl TemplateDraft {
    /// Checks every required field before anything is generated or numbered.
    pub fn validate(self) -> Result<TaskTemplate, ScheduleError> {
        let start_date = self.start_date.ok_or(ScheduleError::InvalidTemplate { field: "start date" })?;
        let frequency = self.frequency.ok_or(ScheduleError::InvalidTemplate { field: "frequency" })?;
        let assignee = non_blank(self.assignee).ok_or(ScheduleError::InvalidTemplate { field: "assignee" })?;
        let description = non_blank(self.description).ok_or(ScheduleError::InvalidTemplate { field: "description" })?;

        Ok(TaskTemplate {
            description,
            assignee,
            start_date,
            frequency,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// One dated checklist generated from a template, not yet numbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOccurrence {
    pub due_date: NaiveDate,
    pub description: String,
    pub assignee: String,
    pub frequency: Frequency,
}

/// Tunables for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub horizon_years: u32,
    pub max_slot_attempts: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            max_slot_attempts: DEFAULT_MAX_SLOT_ATTEMPTS,
        }
    }
}

/// Lazy occurrence sequence for a template.
///
/// Cloning the iterator snapshots its progress; building a new one with
/// [`Occurrences::new`] restarts from the template's start date.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    template: &'a TaskTemplate,
    calendar: &'a WorkingDayCalendar,
    horizon_end: Option<NaiveDate>,
    max_slot_attempts: u32,
    step: u32,
    used: BTreeSet<NaiveDate>,
    fallbacks: usize,
    finished: bool,
}

impl<'a> Occurrences<'a> {
    pub fn new(template: &'a TaskTemplate, calendar: &'a WorkingDayCalendar, options: &GenerationOptions) -> Self {
        Self {
            template,
            calendar,
            horizon_end: calendar.horizon_end(template.start_date, options.horizon_years),
            max_slot_attempts: options.max_slot_attempts,
            step: 0,
            used: BTreeSet::new(),
            fallbacks: 0,
            finished: false,
        }
    }

    pub fn horizon_end(&self) -> Option<NaiveDate> {
        self.horizon_end
    }

    /// Number of occurrences so far that had to fall back to the raw cursor date.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    fn finish(&mut self) -> Option<TaskOccurrence> {
        self.finished = true;
        None
    }
}

impl Iterator for Occurrences<'_> {
    type Item = TaskOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            let Some(horizon_end) = self.horizon_end else {
                return self.finish();
            };
            let Some(cursor) = self.template.frequency.nth_date(self.template.start_date, self.step) else {
                return self.finish();
            };
            if cursor > horizon_end {
                return self.finish();
            }
            self.step += 1;

            let resolution = if self.calendar.is_empty() {
                SlotResolution::Found(cursor)
            } else {
                self.calendar.resolve_slot(cursor, &self.used, self.max_slot_attempts)
            };

            let due_date = resolution.date();
            if due_date > horizon_end {
                return self.finish();
            }

            if resolution.is_fallback() {
                self.fallbacks += 1;
                warn!(
                    cursor = %cursor,
                    attempts = self.max_slot_attempts,
                    "no free working day found, using the cursor date"
                );
                if self.used.contains(&due_date) {
                    debug!(date = %due_date, "fallback date already scheduled, skipping");
                    continue;
                }
            }

            self.used.insert(due_date);
            debug!(step = self.step, date = %due_date, "occurrence scheduled");

            return Some(TaskOccurrence {
                due_date,
                description: self.template.description.clone(),
                assignee: self.template.assignee.clone(),
                frequency: self.template.frequency,
            });
        }
    }
}

/// Expands `template` into its full, ordered occurrence list.
///
/// # Errors
///
/// Returns [`ScheduleError::NothingToSchedule`] when no occurrence fits
/// before the horizon (for example a start date after the calendar's last
/// working day).
pub fn generate(template: &TaskTemplate, calendar: &WorkingDayCalendar, options: &GenerationOptions) -> Result<Vec<TaskOccurrence>, ScheduleError> {
    let occurrences: Vec<TaskOccurrence> = Occurrences::new(template, calendar, options).collect();
    if occurrences.is_empty() {
        return Err(ScheduleError::NothingToSchedule);
    }
    debug!(count = occurrences.len(), frequency = %template.frequency, "template expanded");
    Ok(occurrences)
}
