//! Permission configuration.
//!
//! Holds the allow-list of primitive permission keywords that aggregate
//! expansion may emit. Configuration is loaded from environment variables
//! with the full primitive set as the default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::PERMISSIONS;
use crate::error::PermissionResult;
use crate::permission::Permission;

/// Environment variable holding a comma-separated allow-list.
pub const ALLOWED_PERMISSIONS_ENV: &str = "ACL_ALLOWED_PERMISSIONS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Allow-list configuration for aggregate expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionConfig {
    /// Primitive permission keywords aggregates may expand to.
    pub allowed: Vec<String>,
}

impl Default for PermissionConfig {
    /// Returns every primitive keyword (create, read, update, delete).
    fn default() -> Self {
        Self {
            allowed: PERMISSIONS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PermissionConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ACL_ALLOWED_PERMISSIONS`: comma-separated keywords
    ///   (default: create,read,update,delete)
    pub fn from_env() -> Self {
        match std::env::var(ALLOWED_PERMISSIONS_ENV) {
            Ok(value) => Self::from_list(&value),
            Err(_) => Self::default(),
        }
    }

    /// Build a configuration from a comma-separated list.
    ///
    /// Entries are trimmed and empty entries are dropped.
    ///
    /// ```
    /// use acl_permission::PermissionConfig;
    ///
    /// let config = PermissionConfig::from_list(" read, create ,,");
    /// assert_eq!(config.allowed, vec!["read", "create"]);
    /// ```
    pub fn from_list(value: &str) -> Self {
        Self {
            allowed: value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Validate the allow-list.
    ///
    /// The list must not be empty and no entry may contain the `("` separator,
    /// which would make the expanded strings unparseable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: ALLOWED_PERMISSIONS_ENV.to_string(),
                message: "allow-list must not be empty".to_string(),
            });
        }
        if let Some(bad) = self.allowed.iter().find(|p| p.contains("(\"")) {
            return Err(ConfigError::InvalidValue {
                key: ALLOWED_PERMISSIONS_ENV.to_string(),
                message: format!("\"{}\" is not a permission keyword", bad),
            });
        }
        Ok(())
    }

    /// Check if a keyword is allowed.
    pub fn is_allowed(&self, permission: &str) -> bool {
        self.allowed.iter().any(|p| p == permission)
    }

    /// Run [`Permission::aggregate`] with this allow-list.
    pub fn aggregate<S: AsRef<str>>(
        &self,
        permissions: Option<&[S]>,
    ) -> PermissionResult<Option<Vec<String>>> {
        Permission::aggregate(permissions, self.allowed.as_slice())
    }
}
