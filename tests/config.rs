#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use fleetcheck::libs::config::{Config, ScheduleConfig, UserConfig};
    use fleetcheck::libs::eligibility::{CurrentUser, Role};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the platform data directory at a fresh temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.schedule.is_none());
        assert!(config.user.is_none());
        assert_eq!(config.schedule_or_default(), ScheduleConfig::default());
    }

    #[test]
    fn test_default_schedule_values() {
        let schedule = ScheduleConfig::default();
        assert_eq!(schedule.horizon_years, 2);
        assert_eq!(schedule.max_slot_attempts, 100);

        let options = schedule.generation_options();
        assert_eq!(options.horizon_years, 2);
        assert_eq!(options.max_slot_attempts, 100);

        let meta = schedule.checklist_meta().unwrap();
        assert_eq!(meta.title, "Vehicle Checklist");
        assert_eq!(meta.due_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_due_time() {
        let schedule = ScheduleConfig {
            due_time: "9am".to_string(),
            ..ScheduleConfig::default()
        };
        let err = schedule.checklist_meta().unwrap_err();
        assert!(err.to_string().contains("9am"));
    }

    #[test]
    fn test_user_config_to_current_user() {
        let user = CurrentUser::from(&UserConfig {
            name: "Asha".to_string(),
            role: Role::Admin,
        });
        assert!(user.is_admin());
        assert!(user.matches("asha"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_save_read(_ctx: &mut ConfigTestContext) {
        // Missing file reads as defaults.
        let config = Config::read().unwrap();
        assert!(config.schedule.is_none());

        let config = Config {
            schedule: Some(ScheduleConfig {
                horizon_years: 1,
                due_time: "07:30".to_string(),
                department: "Depot North".to_string(),
                ..ScheduleConfig::default()
            }),
            user: Some(UserConfig {
                name: "ravi".to_string(),
                role: Role::User,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.schedule, config.schedule);
        assert_eq!(read_config.user, config.user);
        assert_eq!(
            read_config.schedule_or_default().checklist_meta().unwrap().due_time,
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
    }
}
