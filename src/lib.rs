//! # Fleetcheck - recurring vehicle checklist scheduling
//!
//! A command-line utility for generating recurring fleet maintenance
//! checklists and tracking how they are closed out.
//!
//! ## Features
//!
//! - **Checklist Generation**: Expand a recurring template onto free working days
//! - **Task Numbering**: Contiguous task IDs continuing from the checklist store
//! - **Dashboard**: Completed, pending, overdue and upcoming counts per vehicle type
//! - **Delegation**: Pending queue, outcome submission and history search
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fleetcheck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
