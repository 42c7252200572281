//! Dashboard aggregation over classified checklist rows.
//!
//! Every visible row is classified independently and tallied. No state is
//! carried between rows, so collecting the same rows twice gives the same
//! summary.

use super::eligibility::{is_visible_to, CurrentUser};
use super::error::ScheduleError;
use super::lifecycle::{classify_row, LifecycleState, TaskRow};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Vehicle category inferred from a checklist description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
    Bike,
    Bus,
}

const TYPE_KEYWORDS: [(VehicleType, &[&str]); 4] = [
    (VehicleType::Car, &["car", "sedan", "hatchback", "vehicle"]),
    (VehicleType::Truck, &["truck", "lorry", "heavy", "cargo"]),
    (VehicleType::Bike, &["bike", "motorcycle", "scooter", "two wheeler"]),
    (VehicleType::Bus, &["bus", "coach", "transport"]),
];

impl VehicleType {
    /// First category whose keyword appears in the description; cars by default.
    ///
    /// Keywords match as substrings and categories are checked in
    /// declaration order, so "cargo lorry" is a car ("car" is inside "cargo").
    pub fn detect(description: &str) -> Self {
        let description = description.to_lowercase();
        TYPE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| description.contains(keyword)))
            .map(|(vehicle_type, _)| *vehicle_type)
            .unwrap_or(VehicleType::Car)
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Cars",
            VehicleType::Truck => "Trucks",
            VehicleType::Bike => "Bikes",
            VehicleType::Bus => "Buses",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket counts for one group of rows.
///
/// `total` covers classified rows only. Rows whose due date could not be
/// read are counted in `unclassified` and stay out of [`Tally::efficiency`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub upcoming: usize,
    pub under_maintenance: usize,
    pub unclassified: usize,
}

impl Tally {
    fn record(&mut self, state: Option<LifecycleState>, under_maintenance: bool) {
        match state {
            Some(state) => {
                self.total += 1;
                match state {
                    LifecycleState::Completed => self.completed += 1,
                    LifecycleState::Pending => self.pending += 1,
                    LifecycleState::Overdue => self.overdue += 1,
                    LifecycleState::Upcoming => self.upcoming += 1,
                }
            }
            None => self.unclassified += 1,
        }
        if under_maintenance {
            self.under_maintenance += 1;
        }
    }

    /// Completed share of the classified rows, as a rounded percentage.
    pub fn efficiency(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn count(&self, state: LifecycleState) -> usize {
        match state {
            LifecycleState::Completed => self.completed,
            LifecycleState::Pending => self.pending,
            LifecycleState::Overdue => self.overdue,
            LifecycleState::Upcoming => self.upcoming,
        }
    }
}

/// A row that could not be classified and needs correcting at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unclassifiable {
    pub task_id: String,
    pub reason: ScheduleError,
}

/// Fleet-wide dashboard figures for one user and one day.
#[derive(Debug, Clone, Default)]
pub struct FleetSummary {
    pub fleet: Tally,
    pub by_type: BTreeMap<VehicleType, Tally>,
    pub rows: BTreeMap<LifecycleState, Vec<TaskRow>>,
    pub under_maintenance: Vec<TaskRow>,
    pub unclassifiable: Vec<Unclassifiable>,
}

impl FleetSummary {
    /// Classifies and tallies every row visible to `user`.
    ///
    /// Rows without a task ID are not checklist rows and are skipped.
    /// Unclassifiable rows are counted in `unclassified` only and listed in
    /// [`FleetSummary::unclassifiable`].
    pub fn collect(rows: &[TaskRow], user: &CurrentUser, today: NaiveDate) -> Self {
        let mut summary = FleetSummary::default();

        for row in rows {
            if row.task_id.trim().is_empty() || !is_visible_to(&row.assignee, user) {
                continue;
            }

            let classification = classify_row(row, today);
            let state = match classification.state {
                Ok(state) => {
                    summary.rows.entry(state).or_default().push(row.clone());
                    Some(state)
                }
                Err(reason) => {
                    tracing::debug!(task_id = %row.task_id, %reason, "row left out of counts");
                    summary.unclassifiable.push(Unclassifiable {
                        task_id: row.task_id.clone(),
                        reason,
                    });
                    None
                }
            };

            if classification.under_maintenance {
                summary.under_maintenance.push(row.clone());
            }

            summary.fleet.record(state, classification.under_maintenance);
            summary
                .by_type
                .entry(VehicleType::detect(&row.description))
                .or_default()
                .record(state, classification.under_maintenance);
        }

        summary
    }

    pub fn rows_in(&self, state: LifecycleState) -> &[TaskRow] {
        self.rows.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// No visible row at all, classified or not.
    pub fn is_empty(&self) -> bool {
        self.fleet.total == 0 && self.fleet.unclassified == 0
    }
}
