//! Human-readable text for every [`Message`] variant.
//!
//! All user-facing wording lives here so commands only pick a variant and
//! its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleSchedule => "Checklist scheduling".to_string(),
            Message::ConfigModuleUser => "Default user".to_string(),
            Message::InvalidDueTime(value) => format!("Invalid due time '{}', expected HH:MM", value),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptHorizonYears => "Years to schedule ahead without a calendar".to_string(),
            Message::PromptMaxSlotAttempts => "Days to search for a free working day".to_string(),
            Message::PromptDueTime => "Due time for generated checklists (HH:MM)".to_string(),
            Message::PromptChecklistTitle => "Checklist title".to_string(),
            Message::PromptDepartment => "Department".to_string(),
            Message::PromptGivenBy => "Given by".to_string(),
            Message::PromptEnableReminders => "Enable reminders?".to_string(),
            Message::PromptRequireAttachment => "Require an attachment?".to_string(),
            Message::PromptUserName => "Your name as it appears in the sheets".to_string(),
            Message::PromptUserRole => "Your role".to_string(),

            // === USER MESSAGES ===
            Message::UserNotConfigured => "No user given. Pass --user or run 'fleetcheck init'".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected DD/MM/YYYY or YYYY-MM-DD", value),
            Message::InvalidDateRange(from, to) => format!("Start date {} is after end date {}", from, to),
            Message::InvalidOutcome(reason) => format!("Invalid outcome: {}", reason),

            // === GENERATION MESSAGES ===
            Message::NoChecklistExport => "No checklist export given (--rows); task IDs start at 1".to_string(),
            Message::TemplateFieldMissing(field) => format!("Please fill in the {}", field),
            Message::NothingToSchedule(start) => {
                format!("No checklist dates fall between {} and the scheduling horizon", start)
            }
            Message::CalendarLoaded(days, last) => format!("Working-day calendar: {} days, last {}", days, last),
            Message::CalendarUnrestricted(years) => {
                format!("No working-day calendar given, scheduling {} years ahead on any day", years)
            }
            Message::SlotFallbacks(count) => {
                format!("{} checklists could not find a free working day and keep their raw date", count)
            }
            Message::OccurrencesHeader(description, assignee) => format!("{} for {}", description, assignee),
            Message::OccurrencesPreview(count) => format!("Preview only, {} checklists not numbered", count),
            Message::TaskIdsAssigned(count, first, last) => {
                format!("{} checklists numbered {}..={}", count, first, last)
            }
            Message::BatchWritten(rows, path) => format!("{} rows written to {}", rows, path),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(date) => format!("Fleet checklist status on {}", date),
            Message::StateListHeader(state) => format!("{} checklists", state),
            Message::NoTasksInState(state) => format!("No {} checklists", state.to_lowercase()),
            Message::NoVisibleTasks => "No checklists found for this user".to_string(),
            Message::UnclassifiableRows(count) => {
                format!("{} rows have an unreadable due date and are not counted", count)
            }
            Message::MaintenanceHeader => "Vehicles under maintenance".to_string(),

            // === DELEGATION MESSAGES ===
            Message::PendingHeader(count) => format!("Pending delegated tasks: {}", count),
            Message::NoPendingTasks => "Nothing waiting for an outcome".to_string(),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TaskNotAssignedToUser(id, user) => format!("Task {} is not assigned to {}", id, user),
            Message::TaskAlreadyClosed(id) => format!("Task {} is already marked done in the history", id),
            Message::OutcomeRecorded(id, outcome) => format!("Task {} closed: {}", id, outcome),
            Message::HistoryHeader(count) => format!("Submitted outcomes: {}", count),
            Message::NoHistoryEntries => "No history entries match".to_string(),
        };
        write!(f, "{}", s)
    }
}
