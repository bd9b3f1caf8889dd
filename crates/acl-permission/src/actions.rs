//! # Actions
//!
//! Well-known permission keywords. A [`Permission`](crate::Permission) stores
//! its action as a plain string; these constants and the [`Action`] enum are
//! for callers that want the canonical spellings.

use serde::{Deserialize, Serialize};

/// Read a record.
pub const READ: &str = "read";
/// Create a record.
pub const CREATE: &str = "create";
/// Update a record.
pub const UPDATE: &str = "update";
/// Delete a record.
pub const DELETE: &str = "delete";
/// Aggregate of create, update and delete.
pub const WRITE: &str = "write";

/// Every primitive permission keyword, the default allow-list for aggregation.
pub const PERMISSIONS: [&str; 4] = [CREATE, READ, UPDATE, DELETE];

/// Permission keywords understood by the record layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read/view a record.
    Read,
    /// Create a record.
    Create,
    /// Update a record.
    Update,
    /// Delete a record.
    Delete,
    /// Aggregate expanding to create, update and delete.
    Write,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => READ,
            Action::Create => CREATE,
            Action::Update => UPDATE,
            Action::Delete => DELETE,
            Action::Write => WRITE,
        }
    }

    /// Parse an action keyword.
    ///
    /// Matching is exact: keywords are case-sensitive in permission strings.
    ///
    /// # Example
    ///
    /// ```
    /// use acl_permission::actions::Action;
    ///
    /// assert_eq!(Action::parse("write"), Some(Action::Write));
    /// assert_eq!(Action::parse("Write"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            READ => Some(Action::Read),
            CREATE => Some(Action::Create),
            UPDATE => Some(Action::Update),
            DELETE => Some(Action::Delete),
            WRITE => Some(Action::Write),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::Read,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Write,
        ]
    }

    /// Check if this action is an aggregate of other actions.
    pub fn is_aggregate(&self) -> bool {
        crate::aggregate::AGGREGATES.expansion(self.as_str()).is_some()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
