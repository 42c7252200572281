#[cfg(test)]
mod tests {
    use fleetcheck::libs::eligibility::{is_actionable, is_visible_to, pending_queue, CurrentUser, DelegationRow};

    fn delegation(task_id: &str, assignee: &str, source: Option<&str>, result: Option<&str>) -> DelegationRow {
        DelegationRow {
            task_id: task_id.to_string(),
            given_by: "Fleet Manager".to_string(),
            assignee: assignee.to_string(),
            description: format!("Task {task_id}"),
            source: source.map(str::to_string),
            result: result.map(str::to_string),
        }
    }

    #[test]
    fn test_actionable_until_result_is_written() {
        let mut row = delegation("D-1", "ravi", Some("X"), None);
        assert!(row.is_actionable());

        row.result = Some("Done".to_string());
        assert!(!row.is_actionable());
    }

    #[test]
    fn test_blank_cells() {
        assert!(!is_actionable(None, None));
        assert!(!is_actionable(Some("  "), None));
        assert!(is_actionable(Some("12/01/2024"), Some("   ")));
        assert!(!is_actionable(Some("12/01/2024"), Some("Extend date")));
    }

    #[test]
    fn test_visibility() {
        let admin = CurrentUser::admin("Asha");
        let ravi = CurrentUser::user("ravi");

        assert!(is_visible_to("someone else", &admin));
        assert!(is_visible_to(" Ravi ", &ravi));
        assert!(!is_visible_to("Asha", &ravi));
    }

    #[test]
    fn test_pending_queue_filters_and_keeps_order() {
        let rows = vec![
            delegation("D-1", "ravi", Some("10/01/2024"), None),
            delegation("D-2", "asha", Some("10/01/2024"), None),
            delegation("D-3", "RAVI", Some("11/01/2024"), Some("Done")),
            delegation("D-4", "Ravi", Some("12/01/2024"), None),
            delegation("D-5", "ravi", None, None),
        ];

        let mine: Vec<&str> = pending_queue(&rows, &CurrentUser::user("ravi")).iter().map(|r| r.task_id.as_str()).collect();
        assert_eq!(mine, vec!["D-1", "D-4"]);

        let all: Vec<&str> = pending_queue(&rows, &CurrentUser::admin("boss")).iter().map(|r| r.task_id.as_str()).collect();
        assert_eq!(all, vec!["D-1", "D-2", "D-4"]);
    }
}
