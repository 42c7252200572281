//! Date helpers for the sheet store.
//!
//! Checklist and calendar cells arrive in several shapes depending on how
//! the sheet was edited: `DD/MM/YYYY` text (sometimes unpadded, sometimes
//! followed by a time), ISO `YYYY-MM-DD` from HTML date inputs, and the
//! `Date(year,month,day)` literal the sheet service emits for typed date
//! cells. The month inside that literal is zero-based.
//!
//! ## Usage
//!
//! ```rust
//! use fleetcheck::libs::dates::{format_sheet_date, parse_sheet_date};
//!
//! let date = parse_sheet_date("Date(2024,0,15)").unwrap();
//! assert_eq!(format_sheet_date(date), "15/01/2024");
//! ```

use super::error::ScheduleError;
use chrono::{Months, NaiveDate, NaiveTime};

/// Display and storage format used by every sheet date column.
pub const SHEET_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format of due-date cells written with a time of day.
pub const SHEET_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a sheet date cell, ignoring any time-of-day component.
///
/// Blank input is treated as malformed; callers that allow empty cells must
/// check for blankness first.
pub fn parse_sheet_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScheduleError::malformed(value));
    }

    if let Some(inner) = trimmed.strip_prefix("Date(").and_then(|rest| rest.strip_suffix(')')) {
        return parse_date_literal(inner).ok_or_else(|| ScheduleError::malformed(value));
    }

    // Drop a trailing time ("15/01/2024 09:00:00", "2024-01-15T09:00")
    let date_part = trimmed.split([' ', 'T']).next().unwrap_or(trimmed);

    if date_part.contains('/') {
        return parse_day_month_year(date_part).ok_or_else(|| ScheduleError::malformed(value));
    }

    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT).map_err(|_| ScheduleError::malformed(value))
}

/// `Date(2024,0,15)` or `Date(2024,0,15,9,30,0)`; only the first three parts matter.
fn parse_date_literal(inner: &str) -> Option<NaiveDate> {
    let mut parts = inner.split(',').map(|p| p.trim().parse::<i64>());
    let year = parts.next()?.ok()?;
    let month0 = parts.next()?.ok()?;
    let day = parts.next()?.ok()?;
    if !(0..=11).contains(&month0) {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, (month0 + 1) as u32, u32::try_from(day).ok()?)
}

/// `15/01/2024` and `5/1/2024`; year must be four digits.
fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return None;
    }
    let day = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let year = parts[2].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn format_sheet_date(date: NaiveDate) -> String {
    date.format(SHEET_DATE_FORMAT).to_string()
}

/// Formats a due date with the time of day the checklist is expected at.
pub fn format_due_datetime(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format(SHEET_DATETIME_FORMAT).to_string()
}

/// Parses an `HH:MM` (or `HH:MM:SS`) time of day.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Adds calendar months, clamping the day to the end of the target month.
///
/// `Jan 31 + 1 month` is `Feb 29` in a leap year, never an early March date.
/// Returns `None` only when the result leaves chrono's representable range.
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// A cell counts as blank when it is missing or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
