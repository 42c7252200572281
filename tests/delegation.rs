#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fleetcheck::libs::delegation::{filter_history, is_closed, submit, HistoryEntry, HistoryFilter, Outcome};
    use fleetcheck::libs::eligibility::{CurrentUser, DelegationRow};
    use fleetcheck::libs::error::ScheduleError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(task_id: &str, submitted_on: NaiveDate, submitted_by: &str, remarks: &str) -> HistoryEntry {
        HistoryEntry {
            submitted_on,
            task_id: task_id.to_string(),
            outcome: Outcome::Done,
            remarks: remarks.to_string(),
            submitted_by: submitted_by.to_string(),
            description: format!("Battery check {task_id}"),
            given_by: "Fleet Manager".to_string(),
        }
    }

    fn history() -> Vec<HistoryEntry> {
        vec![
            entry("D-1", date(2024, 1, 5), "ravi", "terminals cleaned"),
            entry("D-2", date(2024, 1, 20), "asha", "replaced"),
            entry("D-3", date(2024, 1, 12), "Ravi", "ok"),
            entry("D-4", date(2024, 2, 1), "ravi", "replaced"),
        ]
    }

    fn ids(entries: &[&HistoryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.task_id.clone()).collect()
    }

    #[test]
    fn test_outcome_parsing() {
        assert_eq!(Outcome::parse(" done ", None), Ok(Outcome::Done));
        assert_eq!(Outcome::parse("Extend date", Some(date(2024, 2, 1))), Ok(Outcome::ExtendDate(date(2024, 2, 1))));
        assert_eq!(Outcome::parse("extend", None), Err(ScheduleError::MissingNextDate));
        assert_eq!(
            Outcome::parse("later", None),
            Err(ScheduleError::UnknownOutcome { value: "later".to_string() })
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let extended = Outcome::ExtendDate(date(2024, 2, 1));
        assert_eq!(extended.status(), "Extend date");
        assert_eq!(extended.next_target(), Some(date(2024, 2, 1)));
        assert_eq!(extended.to_string(), "Extend date (01/02/2024)");
        assert_eq!(Outcome::Done.next_target(), None);
    }

    #[test]
    fn test_submit_actionable_row() {
        let row = DelegationRow {
            task_id: "D-9".to_string(),
            given_by: "Asha".to_string(),
            assignee: "ravi".to_string(),
            description: "Renew insurance, Truck 2".to_string(),
            source: Some("10/01/2024".to_string()),
            result: None,
        };
        let user = CurrentUser::user("ravi");

        let entry = submit(&row, Outcome::Done, "  paid online ", &user, date(2024, 1, 11)).unwrap();
        assert_eq!(entry.task_id, "D-9");
        assert_eq!(entry.remarks, "paid online");
        assert_eq!(entry.submitted_by, "ravi");
        assert_eq!(entry.given_by, "Asha");
        assert_eq!(entry.submitted_on, date(2024, 1, 11));

        let closed = DelegationRow {
            result: Some("Done".to_string()),
            ..row
        };
        assert_eq!(
            submit(&closed, Outcome::Done, "", &user, date(2024, 1, 11)),
            Err(ScheduleError::NotActionable { task_id: "D-9".to_string() })
        );
    }

    #[test]
    fn test_done_entry_closes_task() {
        let mut entries = history();
        entries.push(HistoryEntry {
            outcome: Outcome::ExtendDate(date(2024, 2, 10)),
            ..entry("D-7", date(2024, 2, 2), "ravi", "waiting for parts")
        });

        assert!(is_closed(&entries, " D-1 "));
        assert!(!is_closed(&entries, "D-7"));
        assert!(!is_closed(&entries, "D-99"));
    }

    #[test]
    fn test_users_only_see_their_own_history() {
        let entries = history();
        let visible = filter_history(&entries, &CurrentUser::user("ravi"), &HistoryFilter::default());
        assert_eq!(ids(&visible), vec!["D-4", "D-3", "D-1"]);

        let all = filter_history(&entries, &CurrentUser::admin("boss"), &HistoryFilter::default());
        assert_eq!(ids(&all), vec!["D-4", "D-2", "D-3", "D-1"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let entries = history();
        let filter = HistoryFilter {
            from: Some(date(2024, 1, 12)),
            to: Some(date(2024, 1, 20)),
            search: None,
        };
        let visible = filter_history(&entries, &CurrentUser::admin("boss"), &filter);
        assert_eq!(ids(&visible), vec!["D-2", "D-3"]);
    }

    #[test]
    fn test_search_term() {
        let entries = history();
        let filter = HistoryFilter {
            search: Some("REPLACED".to_string()),
            ..HistoryFilter::default()
        };
        let visible = filter_history(&entries, &CurrentUser::admin("boss"), &filter);
        assert_eq!(ids(&visible), vec!["D-4", "D-2"]);

        let blank = HistoryFilter {
            search: Some("   ".to_string()),
            ..HistoryFilter::default()
        };
        assert_eq!(filter_history(&entries, &CurrentUser::admin("boss"), &blank).len(), 4);
    }
}
