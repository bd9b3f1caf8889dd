//! # Permissions
//!
//! A permission binds an action to a [`Role`] and has the canonical form
//! `action("role[:identifier][/dimension]")`.

use acl_role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::actions::{CREATE, DELETE, READ, UPDATE, WRITE};
use crate::aggregate::{AggregateTable, AGGREGATES};
use crate::error::{PermissionError, PermissionResult};

const ROLE_OPEN: &str = "(\"";
const ROLE_CLOSE: &str = "\")";

/// An action granted to a role.
///
/// The action is kept as a plain string: whether it is a known keyword is
/// decided by the allow-list handed to [`Permission::aggregate`], not here.
///
/// # Example
///
/// ```
/// use acl_permission::Permission;
///
/// let perm = Permission::new("read", "user", "123", "");
/// assert_eq!(perm.to_string(), r#"read("user:123")"#);
///
/// let parsed = Permission::parse(r#"update("team:abc/owner")"#).unwrap();
/// assert_eq!(parsed.permission(), "update");
/// assert_eq!(parsed.role(), "team");
/// assert_eq!(parsed.identifier(), "abc");
/// assert_eq!(parsed.dimension(), "owner");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    permission: String,
    role: Role,
}

impl Permission {
    /// Create a permission from an action and the parts of its role.
    ///
    /// Pass empty strings for an absent identifier or dimension.
    pub fn new(
        permission: impl Into<String>,
        role: impl Into<String>,
        identifier: impl Into<String>,
        dimension: impl Into<String>,
    ) -> Self {
        Self {
            permission: permission.into(),
            role: Role::new(role, identifier, dimension),
        }
    }

    /// Create a permission granting `permission` to an existing role.
    pub fn from_role(permission: impl Into<String>, role: Role) -> Self {
        Self {
            permission: permission.into(),
            role,
        }
    }

    /// The action keyword (e.g. `read`, `write`).
    pub fn permission(&self) -> &str {
        &self.permission
    }

    /// Alias for [`Permission::permission`].
    pub fn action(&self) -> &str {
        &self.permission
    }

    /// The role kind (e.g. `user`, `team`).
    pub fn role(&self) -> &str {
        self.role.role()
    }

    pub fn identifier(&self) -> &str {
        self.role.identifier()
    }

    pub fn dimension(&self) -> &str {
        self.role.dimension()
    }

    /// The role this permission is granted to.
    pub fn as_role(&self) -> &Role {
        &self.role
    }

    /// Parse a permission from its canonical string.
    ///
    /// Every `")` in the role part is dropped, not only the trailing one.
    ///
    /// # Errors
    ///
    /// - [`PermissionError::MalformedFormat`] if `s` does not contain exactly
    ///   one `("`
    /// - [`PermissionError::MultipleDimensions`] if the dimension segment
    ///   contains another `/`
    /// - [`PermissionError::EmptyDimension`] if nothing follows the `/`
    ///
    /// # Example
    ///
    /// ```
    /// use acl_permission::{Permission, PermissionErrorKind};
    ///
    /// let perm = Permission::parse(r#"read("any")"#).unwrap();
    /// assert_eq!(perm.role(), "any");
    ///
    /// let err = Permission::parse("malformed").unwrap_err();
    /// assert_eq!(err.kind(), PermissionErrorKind::MalformedFormat);
    /// ```
    pub fn parse(s: &str) -> PermissionResult<Self> {
        let parts: Vec<&str> = s.split(ROLE_OPEN).collect();
        if parts.len() != 2 {
            return Err(PermissionError::MalformedFormat {
                input: s.to_string(),
            });
        }

        let permission = parts[0];
        let full_role = parts[1].replace(ROLE_CLOSE, "");
        let role_parts: Vec<&str> = full_role.split(':').collect();

        let has_identifier = role_parts.len() > 1;
        let has_dimension = full_role.contains('/');

        match (has_identifier, has_dimension) {
            (false, false) => Ok(Self::new(permission, full_role.as_str(), "", "")),
            (true, false) => Ok(Self::new(permission, role_parts[0], role_parts[1], "")),
            (false, true) => {
                let (role, dimension) = split_dimension(&full_role, s)?;
                Ok(Self::new(permission, role, "", dimension))
            }
            (true, true) => {
                let (identifier, dimension) = split_dimension(role_parts[1], s)?;
                Ok(Self::new(permission, role_parts[0], identifier, dimension))
            }
        }
    }

    /// Map aggregate permissions into the individual permissions they stand
    /// for, using the built-in aggregate table.
    ///
    /// Returns `Ok(None)` when `permissions` is `None`. Expanded primitives
    /// not present in `allowed` are dropped. Non-aggregate permissions pass
    /// through in their canonical form.
    ///
    /// # Errors
    ///
    /// The first string that fails to parse aborts the whole batch.
    ///
    /// # Example
    ///
    /// ```
    /// use acl_permission::{actions, Permission};
    ///
    /// let input = [r#"write("user:123")"#, r#"read("any")"#];
    /// let out = Permission::aggregate(Some(&input[..]), &actions::PERMISSIONS)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(
    ///     out,
    ///     vec![
    ///         r#"create("user:123")"#,
    ///         r#"update("user:123")"#,
    ///         r#"delete("user:123")"#,
    ///         r#"read("any")"#,
    ///     ]
    /// );
    /// ```
    pub fn aggregate<S, A>(
        permissions: Option<&[S]>,
        allowed: &[A],
    ) -> PermissionResult<Option<Vec<String>>>
    where
        S: AsRef<str>,
        A: AsRef<str>,
    {
        Self::aggregate_with(&AGGREGATES, permissions, allowed)
    }

    /// [`Permission::aggregate`] over an explicit aggregate table.
    ///
    /// Each permission is checked against every table entry in order. Every
    /// entry it does not match appends one pass-through copy, so with more
    /// than one entry a non-aggregate permission is emitted once per entry.
    pub fn aggregate_with<S, A>(
        table: &AggregateTable,
        permissions: Option<&[S]>,
        allowed: &[A],
    ) -> PermissionResult<Option<Vec<String>>>
    where
        S: AsRef<str>,
        A: AsRef<str>,
    {
        let Some(permissions) = permissions else {
            return Ok(None);
        };

        let mut mutated = Vec::with_capacity(permissions.len());
        for raw in permissions {
            let raw: &str = raw.as_ref();
            let permission = Self::parse(raw).map_err(|e| {
                debug!(permission = raw, error = %e, "Rejected permission during aggregation");
                e
            })?;

            for (aggregate, primitives) in table.entries() {
                if permission.permission != aggregate {
                    mutated.push(permission.to_string());
                    continue;
                }

                let before = mutated.len();
                for primitive in primitives {
                    if !allowed.iter().any(|a| a.as_ref() == *primitive) {
                        continue;
                    }
                    mutated.push(Self::from_role(*primitive, permission.role.clone()).to_string());
                }
                debug!(
                    action = aggregate,
                    role = %permission.role,
                    expanded = mutated.len() - before,
                    "Expanded aggregate permission"
                );
            }
        }

        Ok(Some(mutated))
    }

    /// Create a read permission string for the given role.
    ///
    /// ```
    /// use acl_permission::Permission;
    /// use acl_role::Role;
    ///
    /// assert_eq!(Permission::read(&Role::any()), r#"read("any")"#);
    /// ```
    pub fn read(role: &Role) -> String {
        Self::from_role(READ, role.clone()).to_string()
    }

    /// Create a create permission string for the given role.
    pub fn create(role: &Role) -> String {
        Self::from_role(CREATE, role.clone()).to_string()
    }

    /// Create an update permission string for the given role.
    pub fn update(role: &Role) -> String {
        Self::from_role(UPDATE, role.clone()).to_string()
    }

    /// Create a delete permission string for the given role.
    pub fn delete(role: &Role) -> String {
        Self::from_role(DELETE, role.clone()).to_string()
    }

    /// Create a write permission string for the given role.
    ///
    /// `write` is an aggregate; run the result through
    /// [`Permission::aggregate`] to get the primitives.
    pub fn write(role: &Role) -> String {
        Self::from_role(WRITE, role.clone()).to_string()
    }
}

/// Split `segment` on `/` into exactly two parts with a non-empty second part.
fn split_dimension<'a>(segment: &'a str, input: &str) -> PermissionResult<(&'a str, &'a str)> {
    let parts: Vec<&str> = segment.split('/').collect();
    if parts.len() != 2 {
        return Err(PermissionError::MultipleDimensions {
            input: input.to_string(),
        });
    }
    if parts[1].is_empty() {
        return Err(PermissionError::EmptyDimension {
            input: input.to_string(),
        });
    }
    Ok((parts[0], parts[1]))
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.permission, ROLE_OPEN, self.role, ROLE_CLOSE)
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Permission {
    type Error = PermissionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}
