//! Console tables.

use super::allocator::TaskRecord;
use super::dates;
use super::delegation::HistoryEntry;
use super::eligibility::DelegationRow;
use super::lifecycle::TaskRow;
use super::schedule::TaskOccurrence;
use super::summary::{FleetSummary, Tally, Unclassifiable};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn occurrences(occurrences: &[TaskOccurrence]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DUE DATE", "DAY", "DESCRIPTION", "ASSIGNEE", "FREQUENCY"]);
        for (index, occurrence) in occurrences.iter().enumerate() {
            table.add_row(row![
                index + 1,
                dates::format_sheet_date(occurrence.due_date),
                occurrence.due_date.format("%a"),
                occurrence.description,
                occurrence.assignee,
                occurrence.frequency
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn records(records: &[TaskRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK ID", "DUE", "ASSIGNEE", "DESCRIPTION", "FREQUENCY"]);
        for record in records {
            table.add_row(row![record.task_id, record.due_cell(), record.assignee, record.description, record.frequency]);
        }
        table.printstd();

        Ok(())
    }

    /// Fleet totals followed by one line per vehicle type.
    pub fn summary(summary: &FleetSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "TOTAL", "COMPLETED", "PENDING", "OVERDUE", "UPCOMING", "MAINTENANCE", "UNREADABLE", "EFFICIENCY"]);
        Self::tally_row(&mut table, "Fleet", &summary.fleet);
        for (vehicle_type, tally) in &summary.by_type {
            Self::tally_row(&mut table, vehicle_type.label(), tally);
        }
        table.printstd();

        Ok(())
    }

    fn tally_row(table: &mut Table, label: &str, tally: &Tally) {
        table.add_row(row![
            label,
            tally.total,
            tally.completed,
            tally.pending,
            tally.overdue,
            tally.upcoming,
            tally.under_maintenance,
            tally.unclassified,
            format!("{}%", tally.efficiency())
        ]);
    }

    pub fn task_rows(rows: &[TaskRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK ID", "DUE DATE", "ASSIGNEE", "DESCRIPTION", "FREQUENCY", "NOTE"]);
        for row in rows {
            table.add_row(row![
                row.task_id,
                row.due_date,
                row.assignee,
                row.description,
                row.frequency.map(|frequency| frequency.to_string()).unwrap_or_default(),
                row.maintenance_note.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn unclassifiable(rows: &[Unclassifiable]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK ID", "PROBLEM"]);
        for row in rows {
            table.add_row(row![row.task_id, row.reason]);
        }
        table.printstd();

        Ok(())
    }

    pub fn pending(rows: &[&DelegationRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK ID", "GIVEN BY", "ASSIGNEE", "DESCRIPTION", "PLANNED"]);
        for row in rows {
            table.add_row(row![row.task_id, row.given_by, row.assignee, row.description, row.source.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn history(entries: &[&HistoryEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TASK ID", "STATUS", "NEXT TARGET", "REMARKS", "USER", "DESCRIPTION"]);
        for entry in entries {
            table.add_row(row![
                dates::format_sheet_date(entry.submitted_on),
                entry.task_id,
                entry.outcome.status(),
                entry.outcome.next_target().map(dates::format_sheet_date).unwrap_or_default(),
                entry.remarks,
                entry.submitted_by,
                entry.description
            ]);
        }
        table.printstd();

        Ok(())
    }
}
