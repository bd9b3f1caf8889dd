//! # ACL Role
//!
//! Role references used by access-control permission strings.
//!
//! ## Overview
//!
//! A role names who a permission is granted to:
//!
//! ```text
//! Role = Kind [: Identifier] [/ Dimension]
//!
//! Examples:
//!   "any"                  - Every requester
//!   "user:123"             - A single user
//!   "users/verified"       - All verified users
//!   "team:abc/owner"       - Owners of team abc
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use acl_role::Role;
//!
//! let role = Role::user("123", "");
//! assert_eq!(role.to_string(), "user:123");
//!
//! let parsed: Role = "team:abc/owner".parse().unwrap();
//! assert_eq!(parsed.identifier(), "abc");
//! assert_eq!(parsed.dimension(), "owner");
//! ```

pub mod error;
pub mod role;

// Re-export main types for convenience
pub use error::{RoleError, RoleResult};
pub use role::Role;
