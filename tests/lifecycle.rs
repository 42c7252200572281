#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fleetcheck::libs::error::ScheduleError;
    use fleetcheck::libs::lifecycle::{classify, classify_row, has_maintenance_flag, LifecycleState, TaskRow};
    use fleetcheck::libs::schedule::Frequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(due: &str, completion: Option<&str>, note: Option<&str>) -> TaskRow {
        TaskRow {
            task_id: "101".to_string(),
            assignee: "ravi".to_string(),
            description: "Fuel log, Car 3".to_string(),
            due_date: due.to_string(),
            frequency: Some(Frequency::Weekly),
            completion: completion.map(str::to_string),
            maintenance_note: note.map(str::to_string),
        }
    }

    #[test]
    fn test_due_today_then_overdue_then_completed() {
        let due = date(2024, 1, 10);
        assert_eq!(classify(due, None, date(2024, 1, 10)), LifecycleState::Pending);
        assert_eq!(classify(due, None, date(2024, 1, 11)), LifecycleState::Overdue);
        assert_eq!(classify(due, Some("10/01/2024"), date(2024, 1, 10)), LifecycleState::Completed);
        assert_eq!(classify(due, Some("10/01/2024"), date(2030, 1, 1)), LifecycleState::Completed);
    }

    #[test]
    fn test_today_boundaries() {
        let today = date(2024, 3, 1);
        assert_eq!(classify(date(2024, 2, 29), None, today), LifecycleState::Overdue);
        assert_eq!(classify(date(2024, 3, 1), None, today), LifecycleState::Pending);
        assert_eq!(classify(date(2024, 3, 2), None, today), LifecycleState::Upcoming);
    }

    #[test]
    fn test_blank_completion_is_not_completed() {
        assert_eq!(classify(date(2024, 1, 1), Some("   "), date(2024, 1, 5)), LifecycleState::Overdue);
    }

    #[test]
    fn test_classify_row_reads_sheet_dates() {
        let today = date(2024, 1, 10);
        assert_eq!(classify_row(&row("10/01/2024 09:00:00", None, None), today).state, Ok(LifecycleState::Pending));
        assert_eq!(classify_row(&row("Date(2024,0,9)", None, None), today).state, Ok(LifecycleState::Overdue));
        assert_eq!(classify_row(&row("2024-01-12", None, None), today).state, Ok(LifecycleState::Upcoming));
    }

    #[test]
    fn test_malformed_due_date_is_reported() {
        let classification = classify_row(&row("soon", None, None), date(2024, 1, 10));
        assert_eq!(classification.state, Err(ScheduleError::MalformedDate { value: "soon".to_string() }));

        // Completion wins even over an unreadable due date.
        let completed = classify_row(&row("soon", Some("09/01/2024"), None), date(2024, 1, 10));
        assert_eq!(completed.state, Ok(LifecycleState::Completed));
    }

    #[test]
    fn test_maintenance_is_orthogonal() {
        let classification = classify_row(&row("05/01/2024", Some("05/01/2024"), Some("Brake pads on order")), date(2024, 1, 10));
        assert_eq!(classification.state, Ok(LifecycleState::Completed));
        assert!(classification.under_maintenance);

        assert!(!has_maintenance_flag(None));
        assert!(!has_maintenance_flag(Some("  ")));
        assert!(has_maintenance_flag(Some("Workshop")));
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(LifecycleState::Overdue.to_string(), "Overdue");
        assert_eq!(LifecycleState::Upcoming.label(), "Upcoming");
    }
}
