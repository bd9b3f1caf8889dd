//! # ACL Permissions
//!
//! Record-level access-control permission strings.
//!
//! ## Overview
//!
//! A permission grants an action to a role:
//!
//! ```text
//! Permission = Action("Role")
//!
//! Examples:
//!   read("any")                  - Anyone may read
//!   update("user:123")           - User 123 may update
//!   delete("team:abc/owner")     - Owners of team abc may delete
//!   write("users/verified")      - Aggregate: create, update, delete
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use acl_permission::{actions, Permission};
//! use acl_role::Role;
//!
//! // Build permission strings
//! let read = Permission::read(&Role::user("123", ""));
//! assert_eq!(read, r#"read("user:123")"#);
//!
//! // Parse them back
//! let perm = Permission::parse(&read).unwrap();
//! assert_eq!(perm.identifier(), "123");
//!
//! // Expand aggregates
//! let write = [Permission::write(&Role::user("123", ""))];
//! let expanded = Permission::aggregate(Some(&write[..]), &[actions::CREATE])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(expanded, vec![r#"create("user:123")"#]);
//! ```
//!
//! ## Aggregates
//!
//! - `write` expands to `create`, `update`, `delete`

pub mod actions;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod permission;

// Re-export main types for convenience
pub use actions::Action;
pub use aggregate::{AggregateTable, AGGREGATES};
pub use config::{ConfigError, PermissionConfig};
pub use error::{PermissionError, PermissionErrorKind, PermissionResult};
pub use permission::Permission;
