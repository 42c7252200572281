//! Error types for the scheduling and classification engine.
//!
//! The pure library functions return [`ScheduleError`] so callers can tell a
//! template that was never valid apart from one that simply produced no
//! occurrences. The CLI layer wraps these into `anyhow` errors.

use thiserror::Error;

/// Errors raised by the scheduling, classification and delegation modules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A required template field was missing or blank.
    #[error("missing required field: {field}")]
    InvalidTemplate { field: &'static str },

    /// Generation ran but the horizon left no room for a single occurrence.
    #[error("no occurrences fall between the start date and the scheduling horizon")]
    NothingToSchedule,

    /// A date cell could not be read in any supported sheet format.
    #[error("malformed date value: \"{value}\"")]
    MalformedDate { value: String },

    /// The frequency column held something other than the five known values.
    #[error("unknown frequency: \"{value}\"")]
    UnknownFrequency { value: String },

    /// The outcome dropdown held neither "Done" nor "Extend date".
    #[error("unknown outcome: \"{value}\"")]
    UnknownOutcome { value: String },

    /// "Extend date" was chosen without a next target date.
    #[error("an extended task needs a next target date")]
    MissingNextDate,

    /// An outcome was submitted for a row that is not waiting for one.
    #[error("task {task_id} is not waiting for an outcome")]
    NotActionable { task_id: String },
}

impl ScheduleError {
    pub fn malformed(value: &str) -> Self {
        ScheduleError::MalformedDate { value: value.to_string() }
    }
}
