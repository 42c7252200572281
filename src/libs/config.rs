//! Configuration management for fleetcheck.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\fleetops\fleetcheck\config.json`
//! - **macOS**: `~/Library/Application Support/fleetops/fleetcheck/config.json`
//! - **Linux**: `~/.local/share/fleetops/fleetcheck/config.json`
//!
//! Both sections are optional. A missing section falls back to defaults, so
//! the tool works without ever running `fleetcheck init`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use fleetcheck::libs::config::Config;
//!
//! let config = Config::read()?;
//! let options = config.schedule.clone().unwrap_or_default().generation_options();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::allocator::ChecklistMeta;
use super::calendar::DEFAULT_MAX_SLOT_ATTEMPTS;
use super::data_storage::DataStorage;
use super::dates;
use super::eligibility::{CurrentUser, Role};
use super::messages::Message;
use super::schedule::{GenerationOptions, DEFAULT_HORIZON_YEARS};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Scheduling defaults and the fixed column values of generated checklist rows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Years scheduled ahead when the working-day calendar is empty.
    pub horizon_years: u32,

    /// Forward day-steps tried when looking for a free working day.
    pub max_slot_attempts: u32,

    /// Time of day written with every due date, `HH:MM`.
    pub due_time: String,

    pub title: String,
    pub department: String,
    pub given_by: String,
    pub enable_reminders: bool,
    pub require_attachment: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let meta = ChecklistMeta::default();
        ScheduleConfig {
            horizon_years: DEFAULT_HORIZON_YEARS,
            max_slot_attempts: DEFAULT_MAX_SLOT_ATTEMPTS,
            due_time: "09:00".to_string(),
            title: meta.title,
            department: meta.department,
            given_by: meta.given_by,
            enable_reminders: meta.enable_reminders,
            require_attachment: meta.require_attachment,
        }
    }
}

impl ScheduleConfig {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            horizon_years: self.horizon_years,
            max_slot_attempts: self.max_slot_attempts,
        }
    }

    /// Column values for generated rows.
    ///
    /// # Errors
    ///
    /// Fails if `due_time` is not a valid `HH:MM` time.
    pub fn checklist_meta(&self) -> Result<ChecklistMeta> {
        let Some(due_time) = dates::parse_time_of_day(&self.due_time) else {
            msg_bail_anyhow!(Message::InvalidDueTime(self.due_time.clone()));
        };
        Ok(ChecklistMeta {
            title: self.title.clone(),
            department: self.department.clone(),
            given_by: self.given_by.clone(),
            due_time,
            enable_reminders: self.enable_reminders,
            require_attachment: self.require_attachment,
        })
    }
}

/// Default identity for filtered views. Command-line flags take precedence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserConfig {
    pub name: String,
    pub role: Role,
}

impl From<&UserConfig> for CurrentUser {
    fn from(config: &UserConfig) -> Self {
        CurrentUser {
            name: config.name.clone(),
            role: config.role,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn schedule_or_default(&self) -> ScheduleConfig {
        self.schedule.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let modules = [Message::ConfigModuleSchedule.to_string(), Message::ConfigModuleUser.to_string()];
        let selected = MultiSelect::with_theme(&theme)
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    let default = config.schedule_or_default();
                    msg_print!(Message::ConfigModuleSchedule);
                    let due_time: String = Input::with_theme(&theme)
                        .with_prompt(Message::PromptDueTime.to_string())
                        .default(default.due_time.clone())
                        .validate_with(|value: &String| match dates::parse_time_of_day(value) {
                            Some(_) => Ok(()),
                            None => Err(Message::InvalidDueTime(value.clone()).to_string()),
                        })
                        .interact_text()?;
                    config.schedule = Some(ScheduleConfig {
                        horizon_years: Input::with_theme(&theme)
                            .with_prompt(Message::PromptHorizonYears.to_string())
                            .default(default.horizon_years)
                            .interact_text()?,
                        max_slot_attempts: Input::with_theme(&theme)
                            .with_prompt(Message::PromptMaxSlotAttempts.to_string())
                            .default(default.max_slot_attempts)
                            .interact_text()?,
                        due_time,
                        title: Input::with_theme(&theme)
                            .with_prompt(Message::PromptChecklistTitle.to_string())
                            .default(default.title)
                            .interact_text()?,
                        department: Input::with_theme(&theme)
                            .with_prompt(Message::PromptDepartment.to_string())
                            .default(default.department)
                            .interact_text()?,
                        given_by: Input::with_theme(&theme)
                            .with_prompt(Message::PromptGivenBy.to_string())
                            .default(default.given_by)
                            .interact_text()?,
                        enable_reminders: Confirm::with_theme(&theme)
                            .with_prompt(Message::PromptEnableReminders.to_string())
                            .default(default.enable_reminders)
                            .interact()?,
                        require_attachment: Confirm::with_theme(&theme)
                            .with_prompt(Message::PromptRequireAttachment.to_string())
                            .default(default.require_attachment)
                            .interact()?,
                    });
                }
                1 => {
                    let default = config.user.clone().unwrap_or(UserConfig {
                        name: String::new(),
                        role: Role::User,
                    });
                    msg_print!(Message::ConfigModuleUser);
                    let name: String = Input::with_theme(&theme)
                        .with_prompt(Message::PromptUserName.to_string())
                        .default(default.name)
                        .interact_text()?;
                    let role_index = Select::with_theme(&theme)
                        .with_prompt(Message::PromptUserRole.to_string())
                        .items(&["user", "admin"])
                        .default(if default.role == Role::Admin { 1 } else { 0 })
                        .interact()?;
                    config.user = Some(UserConfig {
                        name,
                        role: if role_index == 1 { Role::Admin } else { Role::User },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
