//! Pending-work queue filtering.
//!
//! Delegated tasks carry a planned date ("source") and an outcome column
//! ("result"). A row needs action while the first is filled and the second
//! is still empty. Once an outcome is written the row only ever shows up in
//! history.

use super::dates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The person a view is being built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn admin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: Role::Admin,
        }
    }

    pub fn user(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: Role::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Case-insensitive name comparison used for every ownership check.
    pub fn matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// A delegated task row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRow {
    pub task_id: String,
    pub given_by: String,
    pub assignee: String,
    pub description: String,
    pub source: Option<String>,
    pub result: Option<String>,
}

impl DelegationRow {
    pub fn is_actionable(&self) -> bool {
        is_actionable(self.source.as_deref(), self.result.as_deref())
    }
}

pub fn is_actionable(source: Option<&str>, result: Option<&str>) -> bool {
    !dates::is_blank(source) && dates::is_blank(result)
}

/// Admins see every row; everyone else only rows assigned to them.
///
/// A display filter only; the store enforces access.
pub fn is_visible_to(assignee: &str, user: &CurrentUser) -> bool {
    user.is_admin() || user.matches(assignee)
}

/// Rows the user still has to act on, in their original order.
pub fn pending_queue<'a>(rows: &'a [DelegationRow], user: &CurrentUser) -> Vec<&'a DelegationRow> {
    rows.iter()
        .filter(|row| is_visible_to(&row.assignee, user))
        .filter(|row| row.is_actionable())
        .collect()
}
