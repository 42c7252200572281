//! Working-day calendar and slot resolution.
//!
//! The calendar is maintained outside the tool (a "Working Day Calendar"
//! sheet). An empty calendar means every day is a working day and the
//! scheduling horizon falls back to a fixed number of years after the start
//! date.

use super::dates;
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Number of forward day-steps tried before a slot search gives up.
pub const DEFAULT_MAX_SLOT_ATTEMPTS: u32 = 100;

/// Ordered, de-duplicated set of dates on which checklists may be scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingDayCalendar {
    days: BTreeSet<NaiveDate>,
}

/// Outcome of searching the calendar for an occurrence's date.
///
/// `Fallback` carries the cursor date itself and means no free working day
/// was found within the attempt ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotResolution {
    Found(NaiveDate),
    Fallback(NaiveDate),
}

impl SlotResolution {
    pub fn date(&self) -> NaiveDate {
        match self {
            SlotResolution::Found(date) | SlotResolution::Fallback(date) => *date,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SlotResolution::Fallback(_))
    }
}

impl WorkingDayCalendar {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(days: I) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Calendar with no restriction: every day is a working day.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Last date an occurrence may fall on.
    ///
    /// The calendar's last day when it has one, otherwise `start` plus
    /// `fallback_years`. Returns `None` if that sum overflows chrono's range.
    pub fn horizon_end(&self, start: NaiveDate, fallback_years: u32) -> Option<NaiveDate> {
        match self.last_day() {
            Some(last) => Some(last),
            None => dates::add_months_clamped(start, fallback_years.saturating_mul(12)),
        }
    }

    /// Finds the earliest working day on or after `cursor` not present in `used`.
    ///
    /// The cursor itself is checked first, then up to `max_attempts` following
    /// days. When none qualifies the cursor is returned as a fallback, which
    /// may be a non-working or already used date.
    pub fn resolve_slot(&self, cursor: NaiveDate, used: &BTreeSet<NaiveDate>, max_attempts: u32) -> SlotResolution {
        let is_free = |date: &NaiveDate| self.days.contains(date) && !used.contains(date);

        if is_free(&cursor) {
            return SlotResolution::Found(cursor);
        }

        let mut candidate = cursor;
        for _ in 0..max_attempts {
            candidate = match candidate.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
            if is_free(&candidate) {
                return SlotResolution::Found(candidate);
            }
        }

        SlotResolution::Fallback(cursor)
    }
}

impl FromIterator<NaiveDate> for WorkingDayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Source of the working-day calendar.
///
/// Implemented by whatever layer fetches the calendar sheet; the engine only
/// ever sees the resulting [`WorkingDayCalendar`].
pub trait CalendarProvider {
    fn working_days(&self) -> anyhow::Result<WorkingDayCalendar>;
}

impl CalendarProvider for WorkingDayCalendar {
    fn working_days(&self) -> anyhow::Result<WorkingDayCalendar> {
        Ok(self.clone())
    }
}
