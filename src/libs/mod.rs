//! Core library modules for fleetcheck.
//!
//! ## Features
//!
//! - **Scheduling**: recurring checklist expansion over a working-day calendar
//! - **Numbering**: contiguous task IDs for generated batches
//! - **Classification**: due-date lifecycle states and the fleet dashboard
//! - **Delegation**: pending queues, submitted outcomes and their history
//! - **Infrastructure**: configuration, data storage, sheet exports, messaging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fleetcheck::libs::calendar::WorkingDayCalendar;
//! use fleetcheck::libs::schedule::{generate, Frequency, GenerationOptions, TaskTemplate};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let template = TaskTemplate::new("Oil level, Truck 7", "ravi", start, Frequency::Monthly)?;
//! let occurrences = generate(&template, &WorkingDayCalendar::unrestricted(), &GenerationOptions::default())?;
//! # Ok::<(), fleetcheck::libs::error::ScheduleError>(())
//! ```

pub mod allocator;
pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod delegation;
pub mod eligibility;
pub mod error;
pub mod lifecycle;
pub mod messages;
pub mod schedule;
pub mod sheet;
pub mod summary;
pub mod view;
