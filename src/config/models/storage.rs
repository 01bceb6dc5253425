//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Locations of the flat record files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `username:hash` credential records
    #[serde(default = "default_passwd_file")]
    pub passwd_file: String,
    /// `username:Role,Role` role records
    #[serde(default = "default_roles_file")]
    pub roles_file: String,
    /// Passwords rejected at signup, one per line
    #[serde(default = "default_weak_passwords_file")]
    pub weak_passwords_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            passwd_file: default_passwd_file(),
            roles_file: default_roles_file(),
            weak_passwords_file: default_weak_passwords_file(),
        }
    }
}
