//! Role references
//!
//! This module defines the identity reference a permission is granted to,
//! along with its canonical string grammar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RoleError, RoleResult};

/// Role kind matching every requester.
pub const ANY: &str = "any";
/// Role kind matching unauthenticated requesters.
pub const GUESTS: &str = "guests";
/// Role kind for a single user.
pub const USER: &str = "user";
/// Role kind for all authenticated users.
pub const USERS: &str = "users";
/// Role kind for a team.
pub const TEAM: &str = "team";
/// Role kind for a team membership.
pub const MEMBER: &str = "member";
/// Role kind for users carrying a label.
pub const LABEL: &str = "label";

/// An identity reference a permission is granted to.
///
/// A role is a kind, optionally narrowed to a specific instance by an
/// identifier, and optionally narrowed further by a dimension.
///
/// # Grammar
///
/// ```text
/// kind
/// kind:identifier
/// kind/dimension
/// kind:identifier/dimension
/// ```
///
/// Empty identifiers and dimensions are omitted when serializing.
///
/// # Examples
///
/// ```
/// use acl_role::Role;
///
/// let role = Role::team("engineering", "admin");
/// assert_eq!(role.to_string(), "team:engineering/admin");
///
/// let parsed = Role::parse("team:engineering/admin").unwrap();
/// assert_eq!(parsed, role);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Role {
    role: String,
    identifier: String,
    dimension: String,
}

impl Role {
    /// Create a role from its three parts.
    ///
    /// Pass empty strings for an absent identifier or dimension.
    pub fn new(
        role: impl Into<String>,
        identifier: impl Into<String>,
        dimension: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            identifier: identifier.into(),
            dimension: dimension.into(),
        }
    }

    /// The role kind (e.g. `user`, `team`).
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The identifier, or an empty string.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The dimension, or an empty string.
    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    /// Parse a role from its canonical string.
    ///
    /// # Errors
    ///
    /// - [`RoleError::MultipleDimensions`] if the dimension segment contains
    ///   another `/`
    /// - [`RoleError::EmptyDimension`] if nothing follows the `/`
    ///
    /// # Examples
    ///
    /// ```
    /// use acl_role::Role;
    ///
    /// let role = Role::parse("user:123").unwrap();
    /// assert_eq!(role.role(), "user");
    /// assert_eq!(role.identifier(), "123");
    /// assert_eq!(role.dimension(), "");
    ///
    /// assert!(Role::parse("team/a/b").is_err());
    /// ```
    pub fn parse(s: &str) -> RoleResult<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let has_identifier = parts.len() > 1;
        let has_dimension = s.contains('/');

        match (has_identifier, has_dimension) {
            (false, false) => Ok(Self::new(s, "", "")),
            (true, false) => Ok(Self::new(parts[0], parts[1], "")),
            (false, true) => {
                let (role, dimension) = split_dimension(s, s)?;
                Ok(Self::new(role, "", dimension))
            }
            (true, true) => {
                let (identifier, dimension) = split_dimension(parts[1], s)?;
                Ok(Self::new(parts[0], identifier, dimension))
            }
        }
    }

    /// Role matching every requester.
    pub fn any() -> Self {
        Self::new(ANY, "", "")
    }

    /// Role matching unauthenticated requesters.
    pub fn guests() -> Self {
        Self::new(GUESTS, "", "")
    }

    /// Role for a single user, optionally narrowed by status (e.g. `verified`).
    ///
    /// ```
    /// use acl_role::Role;
    ///
    /// assert_eq!(Role::user("123", "").to_string(), "user:123");
    /// assert_eq!(Role::user("123", "verified").to_string(), "user:123/verified");
    /// ```
    pub fn user(identifier: impl Into<String>, status: impl Into<String>) -> Self {
        Self::new(USER, identifier, status)
    }

    /// Role for all authenticated users, optionally narrowed by status.
    pub fn users(status: impl Into<String>) -> Self {
        Self::new(USERS, "", status)
    }

    /// Role for a team, optionally narrowed to members holding a team role.
    pub fn team(identifier: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self::new(TEAM, identifier, dimension)
    }

    /// Role for a single team membership.
    pub fn member(identifier: impl Into<String>) -> Self {
        Self::new(MEMBER, identifier, "")
    }

    /// Role for users carrying a label.
    pub fn label(identifier: impl Into<String>) -> Self {
        Self::new(LABEL, identifier, "")
    }
}

/// Split `segment` on `/` into exactly two parts with a non-empty second part.
fn split_dimension<'a>(segment: &'a str, input: &str) -> RoleResult<(&'a str, &'a str)> {
    let parts: Vec<&str> = segment.split('/').collect();
    if parts.len() != 2 {
        return Err(RoleError::MultipleDimensions {
            input: input.to_string(),
        });
    }
    if parts[1].is_empty() {
        return Err(RoleError::EmptyDimension {
            input: input.to_string(),
        });
    }
    Ok((parts[0], parts[1]))
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.role)?;
        if !self.identifier.is_empty() {
            write!(f, ":{}", self.identifier)?;
        }
        if !self.dimension.is_empty() {
            write!(f, "/{}", self.dimension)?;
        }
        Ok(())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}
