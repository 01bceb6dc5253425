//! Configuration loading utilities
//!
//! Environment variable overrides applied on top of file or default values.

use super::Config;
use std::env;
use tracing::debug;

/// Credential records path
pub const ENV_PASSWD_FILE: &str = "JUSTINVEST_PASSWD_FILE";
/// Role records path
pub const ENV_ROLES_FILE: &str = "JUSTINVEST_ROLES_FILE";
/// Weak-password list path
pub const ENV_WEAK_PASSWORDS_FILE: &str = "JUSTINVEST_WEAK_PASSWORDS_FILE";
/// Log filter directives
pub const ENV_LOG_LEVEL: &str = "JUSTINVEST_LOG_LEVEL";

impl Config {
    /// Apply `JUSTINVEST_*` environment variables
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    pub(super) fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_PASSWD_FILE) {
            debug!("{} overrides passwd_file", ENV_PASSWD_FILE);
            self.storage.passwd_file = path;
        }
        if let Some(path) = lookup(ENV_ROLES_FILE) {
            debug!("{} overrides roles_file", ENV_ROLES_FILE);
            self.storage.roles_file = path;
        }
        if let Some(path) = lookup(ENV_WEAK_PASSWORDS_FILE) {
            debug!("{} overrides weak_passwords_file", ENV_WEAK_PASSWORDS_FILE);
            self.storage.weak_passwords_file = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        self
    }
}
