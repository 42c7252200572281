#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use fleetcheck::libs::allocator::{ChecklistMeta, TaskRecord};
    use fleetcheck::libs::calendar::CalendarProvider;
    use fleetcheck::libs::delegation::{HistoryEntry, Outcome};
    use fleetcheck::libs::schedule::Frequency;
    use fleetcheck::libs::sheet::{
        append_history_file, batch_rows, default_batch_path, read_calendar, read_checklist, read_delegation, read_history_file, write_batch_csv,
        write_batch_file, write_batch_json, BatchFormat, CsvCalendar,
    };
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SheetTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SheetTestContext {
        fn setup() -> Self {
            SheetTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(task_id: u64) -> TaskRecord {
        let meta = ChecklistMeta::default();
        TaskRecord {
            task_id,
            title: meta.title,
            department: meta.department,
            given_by: meta.given_by,
            assignee: "ravi".to_string(),
            description: "Tyre pressure, Truck 12".to_string(),
            due_date: date(2024, 1, 8),
            due_time: meta.due_time,
            frequency: Frequency::Weekly,
            enable_reminders: true,
            require_attachment: false,
        }
    }

    fn submitted_at() -> chrono::NaiveDateTime {
        date(2024, 1, 1).and_time(NaiveTime::from_hms_opt(8, 15, 0).unwrap())
    }

    #[test]
    fn test_read_calendar_skips_unreadable_cells() {
        let csv = "Date\n02/01/2024\nholiday\n\n2024-01-05\n02/01/2024\n";
        let calendar = read_calendar(csv.as_bytes()).unwrap();
        assert_eq!(calendar.len(), 2);
        assert_eq!(calendar.last_day(), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_read_checklist_columns() {
        let csv = "\
Timestamp,Task ID,Doer,Description,Due,Frequency,Completed,Status,Remarks,Maintenance
01/01/2024,17,ravi,\"Oil level, Car 3\",08/01/2024 09:00:00,weekly,08/01/2024,,,
01/01/2024,18,asha,Brakes Bus 7,15/01/2024 09:00:00,fortnightly,,,,Workshop
";
        let rows = read_checklist(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task_id, "17");
        assert_eq!(rows[0].description, "Oil level, Car 3");
        assert_eq!(rows[0].completion.as_deref(), Some("08/01/2024"));
        assert_eq!(rows[0].maintenance_note, None);
        assert_eq!(rows[0].frequency, Some(Frequency::Weekly));
        assert_eq!(rows[1].frequency, None);
        assert_eq!(rows[1].completion, None);
        assert_eq!(rows[1].maintenance_note.as_deref(), Some("Workshop"));
    }

    #[test]
    fn test_read_delegation_defaults_assignee() {
        let csv = "\
Timestamp,Task ID,Department,Given By,Name,Description,F,G,H,I,Planned,Actual
01/01/2024,D-1,Fleet,Asha,,Renew permit,,,,,10/01/2024,
01/01/2024,D-2,Fleet,Asha,ravi,Fuel card,,,,,10/01/2024,Done
";
        let rows = read_delegation(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].assignee, "Unassigned");
        assert!(rows[0].is_actionable());
        assert_eq!(rows[1].given_by, "Asha");
        assert!(!rows[1].is_actionable());
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_history_append_then_read(ctx: &mut SheetTestContext) {
        let path = ctx.temp_dir.path().join("history.csv");
        let done = HistoryEntry {
            submitted_on: date(2024, 1, 11),
            task_id: "D-1".to_string(),
            outcome: Outcome::Done,
            remarks: "paid, receipt filed".to_string(),
            submitted_by: "ravi".to_string(),
            description: "Renew permit".to_string(),
            given_by: "Asha".to_string(),
        };
        let extended = HistoryEntry {
            task_id: "D-2".to_string(),
            outcome: Outcome::ExtendDate(date(2024, 1, 20)),
            ..done.clone()
        };

        append_history_file(&path, &done).unwrap();
        append_history_file(&path, &extended).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().filter(|line| line.starts_with("Timestamp")).count(), 1);

        let entries = read_history_file(&path).unwrap();
        assert_eq!(entries, vec![done, extended]);
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_history_append_to_export_without_trailing_newline(ctx: &mut SheetTestContext) {
        let path = ctx.temp_dir.path().join("history.csv");
        fs::write(
            &path,
            "Timestamp,Task ID,Status,Next Target Date,Remarks,Image,,Username,Task,Given By\n\
01/01/2024 10:00:00,7,Done,,ok,,,ravi,Oil,boss",
        )
        .unwrap();

        let entry = HistoryEntry {
            submitted_on: date(2024, 1, 2),
            task_id: "8".to_string(),
            outcome: Outcome::Done,
            remarks: "fine".to_string(),
            submitted_by: "ravi".to_string(),
            description: "Tyres".to_string(),
            given_by: "boss".to_string(),
        };
        append_history_file(&path, &entry).unwrap();

        let entries = read_history_file(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task_id, "7");
        assert_eq!(entries[0].given_by, "boss");
        assert_eq!(entries[1], entry);
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_csv_calendar_provider(ctx: &mut SheetTestContext) {
        let path = ctx.temp_dir.path().join("calendar.csv");
        fs::write(&path, "Date\n02/01/2024\n03/01/2024\n").unwrap();

        let calendar = CsvCalendar::new(&path).working_days().unwrap();
        assert_eq!(calendar.first_day(), Some(date(2024, 1, 2)));

        assert!(CsvCalendar::new(ctx.temp_dir.path().join("missing.csv")).working_days().is_err());
    }

    #[test]
    fn test_batch_csv() {
        let rows = batch_rows(&[record(42), record(43)], submitted_at());
        let mut out = Vec::new();
        write_batch_csv(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("timestamp,taskId,department,givenBy,doer,title,description,dueDate,frequency,enableReminders,requireAttachment")
        );
        assert_eq!(
            lines.next(),
            Some("01/01/2024 08:15:00,42,Vehicle Management,System,ravi,Vehicle Checklist,\"Tyre pressure, Truck 12\",08/01/2024 09:00:00,weekly,Yes,No")
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_batch_json() {
        let rows = batch_rows(&[record(7)], submitted_at());
        let mut out = Vec::new();
        write_batch_json(&mut out, &rows).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["taskId"], "7");
        assert_eq!(value[0]["doer"], "ravi");
        assert_eq!(value[0]["enableReminders"], "Yes");
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_batch_file(ctx: &mut SheetTestContext) {
        let default = default_batch_path(submitted_at(), BatchFormat::Json);
        assert_eq!(default.to_string_lossy(), "fleetcheck_batch_20240101_081500.json");

        let path = ctx.temp_dir.path().join("batch.csv");
        write_batch_file(&path, &batch_rows(&[record(1)], submitted_at()), BatchFormat::Csv).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }
}
